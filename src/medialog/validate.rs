//! Constrained parsing of user-typed integers.
//!
//! Both functions are pure: they either return the parsed value or an
//! [`MediaLogError::InvalidInput`] whose message can be shown to the user as-is.

use crate::error::{MediaLogError, Result};
use std::num::IntErrorKind;

const BELOW_MIN: &str = "Value is below the minimum allowed.";
const ABOVE_MAX: &str = "Value exceeds the maximum allowed.";
const WRONG_DIGITS: &str = "Value does not have the required number of digits.";

/// Optional constraints applied by [`validate_integer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerRule {
    pub min: Option<i64>,
    pub max: Option<i64>,
    /// Exact length of the value written in decimal, a leading `-` included.
    pub digits: Option<usize>,
}

impl IntegerRule {
    pub const fn new() -> Self {
        Self {
            min: None,
            max: None,
            digits: None,
        }
    }

    pub const fn between(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            digits: None,
        }
    }

    pub const fn with_digits(mut self, digits: usize) -> Self {
        self.digits = Some(digits);
        self
    }
}

pub const YEAR_RULE: IntegerRule = IntegerRule::new().with_digits(4);
pub const RATING_RULE: IntegerRule = IntegerRule::between(0, 10);

/// Menu choices for the media type prompt: 1 = TV Show, 2 = Movie.
pub const MEDIA_TYPE_CHOICES: &[i64] = &[1, 2];

pub fn validate_integer(raw: &str, rule: &IntegerRule) -> Result<i64> {
    let value = match parse_integer(raw) {
        Ok(value) => value,
        Err(Unparsed::Overflow(kind)) => {
            return Err(MediaLogError::invalid_input(overflow_message(rule, kind)));
        }
        Err(Unparsed::NotANumber(text)) => return Err(not_a_number(&text)),
    };

    if let Some(min) = rule.min {
        if value < min {
            return Err(MediaLogError::invalid_input(BELOW_MIN));
        }
    }
    if let Some(max) = rule.max {
        if value > max {
            return Err(MediaLogError::invalid_input(ABOVE_MAX));
        }
    }
    if let Some(digits) = rule.digits {
        if decimal_len(value) != digits {
            return Err(MediaLogError::invalid_input(WRONG_DIGITS));
        }
    }

    Ok(value)
}

pub fn validate_choice(raw: &str, allowed: &[i64]) -> Result<i64> {
    let value = match parse_integer(raw) {
        Ok(value) => Some(value),
        Err(Unparsed::Overflow(_)) => None,
        Err(Unparsed::NotANumber(text)) => return Err(not_a_number(&text)),
    };
    match value {
        Some(value) if allowed.contains(&value) => Ok(value),
        _ => Err(MediaLogError::invalid_input(format!(
            "Invalid choice. Please select from {:?}",
            allowed
        ))),
    }
}

enum Unparsed {
    NotANumber(String),
    /// A whole number too large in magnitude for `i64`.
    Overflow(IntErrorKind),
}

fn parse_integer(raw: &str) -> std::result::Result<i64, Unparsed> {
    let trimmed = raw.trim();
    trimmed.parse::<i64>().map_err(|e| match e.kind() {
        kind @ (IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Unparsed::Overflow(kind.clone())
        }
        _ => Unparsed::NotANumber(trimmed.to_string()),
    })
}

fn not_a_number(text: &str) -> MediaLogError {
    MediaLogError::invalid_input(format!("'{}' is not a whole number.", text))
}

/// The first check an out-of-range value fails, taken in the same order as
/// [`validate_integer`]: min, then max, then digit length.
fn overflow_message(rule: &IntegerRule, kind: IntErrorKind) -> &'static str {
    let negative = kind == IntErrorKind::NegOverflow;
    if negative && rule.min.is_some() {
        BELOW_MIN
    } else if !negative && rule.max.is_some() {
        ABOVE_MAX
    } else if rule.digits.is_some() {
        WRONG_DIGITS
    } else if negative {
        BELOW_MIN
    } else {
        ABOVE_MAX
    }
}

fn decimal_len(value: i64) -> usize {
    value.to_string().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: MediaLogError) -> String {
        err.to_string()
    }

    #[test]
    fn accepts_values_inside_every_constraint() {
        let rule = IntegerRule::between(1000, 2100).with_digits(4);
        for v in [1000, 1999, 2024, 2100] {
            assert_eq!(validate_integer(&v.to_string(), &rule).unwrap(), v);
        }
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(validate_integer("  7\n", &RATING_RULE).unwrap(), 7);
    }

    #[test]
    fn rejects_non_integer_text() {
        let err = validate_integer("seven", &RATING_RULE).unwrap_err();
        assert!(matches!(err, MediaLogError::InvalidInput(_)));
        assert_eq!(message(err), "'seven' is not a whole number.");
        assert!(validate_integer("7.5", &RATING_RULE).is_err());
        assert!(validate_integer("", &RATING_RULE).is_err());
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        assert_eq!(validate_integer("0", &RATING_RULE).unwrap(), 0);
        assert_eq!(validate_integer("10", &RATING_RULE).unwrap(), 10);
        assert_eq!(
            message(validate_integer("-1", &RATING_RULE).unwrap_err()),
            "Value is below the minimum allowed."
        );
        assert_eq!(
            message(validate_integer("11", &RATING_RULE).unwrap_err()),
            "Value exceeds the maximum allowed."
        );
    }

    #[test]
    fn year_needs_exactly_four_digits() {
        assert_eq!(validate_integer("1999", &YEAR_RULE).unwrap(), 1999);
        assert_eq!(
            message(validate_integer("0999", &YEAR_RULE).unwrap_err()),
            "Value does not have the required number of digits."
        );
        assert!(validate_integer("999", &YEAR_RULE).is_err());
        assert!(validate_integer("20240", &YEAR_RULE).is_err());
    }

    #[test]
    fn negative_year_is_rejected() {
        assert_eq!(
            message(validate_integer("-1999", &YEAR_RULE).unwrap_err()),
            "Value does not have the required number of digits."
        );
        // "-199" is four characters long, so only the sign makes it pass.
        assert_eq!(validate_integer("-199", &YEAR_RULE).unwrap(), -199);
    }

    #[test]
    fn numbers_beyond_i64_report_a_range_error() {
        let huge = "99999999999999999999";
        assert_eq!(
            message(validate_integer(huge, &RATING_RULE).unwrap_err()),
            "Value exceeds the maximum allowed."
        );
        assert_eq!(
            message(validate_integer(&format!("-{}", huge), &RATING_RULE).unwrap_err()),
            "Value is below the minimum allowed."
        );
        assert_eq!(
            message(validate_integer(huge, &YEAR_RULE).unwrap_err()),
            "Value does not have the required number of digits."
        );
        assert_eq!(
            message(validate_choice(huge, MEDIA_TYPE_CHOICES).unwrap_err()),
            "Invalid choice. Please select from [1, 2]"
        );
    }

    #[test]
    fn unconstrained_rule_only_parses() {
        assert_eq!(validate_integer("-42", &IntegerRule::default()).unwrap(), -42);
    }

    #[test]
    fn choice_must_be_in_allowed_set() {
        assert_eq!(validate_choice("1", MEDIA_TYPE_CHOICES).unwrap(), 1);
        assert_eq!(validate_choice(" 2 ", MEDIA_TYPE_CHOICES).unwrap(), 2);
        assert_eq!(
            message(validate_choice("3", MEDIA_TYPE_CHOICES).unwrap_err()),
            "Invalid choice. Please select from [1, 2]"
        );
        assert!(validate_choice("movie", MEDIA_TYPE_CHOICES).is_err());
    }
}
