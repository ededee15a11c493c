use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Rating;

/// What to do when a new entry matches an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateAction {
    /// Overwrite the existing entry's rating with the new one.
    UpdateRating,
    /// Drop this input and start a fresh entry.
    AddAnother,
    Cancel,
}

impl DuplicateAction {
    /// Only the exact phrases `update rating` and `add another` (any case) mean
    /// something; every other answer cancels.
    pub fn parse(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "update rating" => DuplicateAction::UpdateRating,
            "add another" => DuplicateAction::AddAnother,
            _ => DuplicateAction::Cancel,
        }
    }
}

pub fn update_rating(catalog: &mut Catalog, index: usize, rating: u32) -> Result<CmdResult> {
    let entry = catalog.update_rating(index, Rating::Parsed(rating))?.clone();
    Ok(CmdResult::default()
        .with_affected_entries(vec![entry])
        .with_message(CmdMessage::success("Rating updated.")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Entry, Field, MediaType};

    #[test]
    fn parses_exact_phrases_only() {
        assert_eq!(
            DuplicateAction::parse("update rating"),
            DuplicateAction::UpdateRating
        );
        assert_eq!(
            DuplicateAction::parse("  Update Rating\n"),
            DuplicateAction::UpdateRating
        );
        assert_eq!(
            DuplicateAction::parse("add another"),
            DuplicateAction::AddAnother
        );
        assert_eq!(DuplicateAction::parse("cancel"), DuplicateAction::Cancel);
        assert_eq!(DuplicateAction::parse("update"), DuplicateAction::Cancel);
        assert_eq!(DuplicateAction::parse(""), DuplicateAction::Cancel);
    }

    #[test]
    fn update_rating_keeps_count_and_other_fields() {
        let mut catalog = Catalog::from_entries(vec![
            Entry::new(MediaType::Movie, "Heat", 1995, "Crime", 8),
            Entry::new(MediaType::Movie, "Ronin", 1998, "Action", 7),
        ]);

        let result = update_rating(&mut catalog, 1, 2).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().rating, Field::Parsed(2));
        assert_eq!(catalog.get(1).unwrap().genre, "Action");
        assert_eq!(catalog.get(0).unwrap().rating, Field::Parsed(8));
        assert_eq!(result.messages[0].content, "Rating updated.");
    }
}
