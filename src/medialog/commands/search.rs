use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Rating;
use crate::validate::{validate_integer, RATING_RULE};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Genre,
    Rating,
}

impl FromStr for SearchField {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SearchField::Name),
            "genre" => Ok(SearchField::Genre),
            "rating" => Ok(SearchField::Rating),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchField::Name => write!(f, "name"),
            SearchField::Genre => write!(f, "genre"),
            SearchField::Rating => write!(f, "rating"),
        }
    }
}

/// Exact-match search over one field, in collection order.
///
/// Name and genre compare case-insensitively against the trimmed query. A rating
/// query must be a whole number from 0 to 10 and fails with `InvalidInput`
/// otherwise.
pub fn run(catalog: &Catalog, field: SearchField, query: &str) -> Result<CmdResult> {
    let found: Vec<_> = match field {
        SearchField::Name => {
            let needle = query.trim().to_lowercase();
            catalog
                .iter()
                .filter(|e| e.name.to_lowercase() == needle)
                .cloned()
                .collect()
        }
        SearchField::Genre => {
            let needle = query.trim().to_lowercase();
            catalog
                .iter()
                .filter(|e| e.genre.to_lowercase() == needle)
                .cloned()
                .collect()
        }
        SearchField::Rating => {
            let value = validate_integer(query, &RATING_RULE)?;
            let wanted = Rating::Parsed(value as u32);
            catalog
                .iter()
                .filter(|e| e.rating == wanted)
                .cloned()
                .collect()
        }
    };

    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::info("No entries found."));
    }
    Ok(result.with_listed_entries(found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MediaLogError;
    use crate::store::memory::fixtures::StoreFixture;

    fn catalog() -> Catalog {
        let fixture = StoreFixture::new()
            .with_movie("Inception", 2010, "Sci-Fi", 9)
            .with_movie("Inception 2", 2030, "Sci-Fi", 5)
            .with_show("Dark", 2017, "Thriller", 9)
            .with_movie("inception", 1999, "Drama", 3)
            .with_unrated("Oddity", 2001, "09");
        Catalog::from_entries(fixture.entries().to_vec())
    }

    fn names(result: &CmdResult) -> Vec<&str> {
        result
            .listed_entries
            .iter()
            .map(|e| e.name.as_str())
            .collect()
    }

    #[test]
    fn parses_field_names_case_insensitively() {
        assert_eq!("NAME".parse::<SearchField>(), Ok(SearchField::Name));
        assert_eq!(" genre ".parse::<SearchField>(), Ok(SearchField::Genre));
        assert_eq!("Rating".parse::<SearchField>(), Ok(SearchField::Rating));
        assert!("year".parse::<SearchField>().is_err());
    }

    #[test]
    fn name_search_is_exact_and_case_insensitive() {
        let result = run(&catalog(), SearchField::Name, "Inception").unwrap();
        assert_eq!(names(&result), ["Inception", "inception"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn genre_search_matches_whole_genre() {
        let result = run(&catalog(), SearchField::Genre, "sci-fi").unwrap();
        assert_eq!(names(&result), ["Inception", "Inception 2"]);
        let result = run(&catalog(), SearchField::Genre, "Sci").unwrap();
        assert!(result.listed_entries.is_empty());
    }

    #[test]
    fn rating_search_compares_stored_text() {
        let result = run(&catalog(), SearchField::Rating, "9").unwrap();
        assert_eq!(names(&result), ["Inception", "Dark"]);
    }

    #[test]
    fn rating_query_must_be_valid() {
        let err = run(&catalog(), SearchField::Rating, "11").unwrap_err();
        assert!(matches!(err, MediaLogError::InvalidInput(_)));
        assert!(run(&catalog(), SearchField::Rating, "nine").is_err());
    }

    #[test]
    fn no_matches_reports_info() {
        let result = run(&catalog(), SearchField::Name, "Alien").unwrap();
        assert!(result.listed_entries.is_empty());
        assert_eq!(result.messages[0].content, "No entries found.");
    }
}
