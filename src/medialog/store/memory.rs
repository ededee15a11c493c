use super::EntryStore;
use crate::error::{MediaLogError, Result};
use crate::model::Entry;
use std::io;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    entries: Option<Vec<Entry>>,
    fail_saves: bool,
    save_count: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `entries`, as if a file had been written earlier.
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self {
            entries: Some(entries),
            ..Self::default()
        }
    }

    /// Makes every subsequent `save` fail with an I/O error.
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn stored(&self) -> Option<&[Entry]> {
        self.entries.as_deref()
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl EntryStore for InMemoryStore {
    fn load(&self) -> Result<Option<Vec<Entry>>> {
        Ok(self.entries.clone())
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        if self.fail_saves {
            return Err(MediaLogError::Storage(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "store is read-only",
            )));
        }
        self.entries = Some(entries.to_vec());
        self.save_count += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Field, MediaType};

    pub struct StoreFixture {
        entries: Vec<Entry>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                entries: Vec::new(),
            }
        }

        pub fn with_movie(mut self, name: &str, year: i32, genre: &str, rating: u32) -> Self {
            self.entries
                .push(Entry::new(MediaType::Movie, name, year, genre, rating));
            self
        }

        pub fn with_show(mut self, name: &str, year: i32, genre: &str, rating: u32) -> Self {
            self.entries
                .push(Entry::new(MediaType::TvShow, name, year, genre, rating));
            self
        }

        /// Adds an entry whose rating text is not a number, as a hand-edited file would.
        pub fn with_unrated(mut self, name: &str, year: i32, rating_text: &str) -> Self {
            let mut entry = Entry::new(MediaType::Movie, name, year, "Unknown", 0);
            entry.rating = Field::Raw(rating_text.to_string());
            self.entries.push(entry);
            self
        }

        pub fn entries(&self) -> &[Entry] {
            &self.entries
        }

        pub fn build(self) -> InMemoryStore {
            InMemoryStore::with_entries(self.entries)
        }
    }
}
