use crate::error::{MediaLogError, Result};
use crate::model::{Entry, Rating, Year};
use tracing::debug;

/// The in-memory entry collection for one session.
///
/// Insertion order is preserved. Entries are only ever appended or have their
/// rating overwritten; nothing is removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Position of the first entry with the same name (any case) and year.
    pub fn find_duplicate(&self, name: &str, year: &Year) -> Option<usize> {
        self.entries.iter().position(|e| e.same_title(name, year))
    }

    pub fn push(&mut self, entry: Entry) {
        debug!(name = %entry.name, year = %entry.year, "appending entry");
        self.entries.push(entry);
    }

    /// Overwrites the rating of the entry at `index`, leaving every other field alone.
    pub fn update_rating(&mut self, index: usize, rating: Rating) -> Result<&Entry> {
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(MediaLogError::EntryNotFound(index))?;
        debug!(name = %entry.name, from = %entry.rating, to = %rating, "updating rating");
        entry.rating = rating;
        Ok(&*entry)
    }
}
