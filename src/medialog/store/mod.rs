//! # Storage Layer
//!
//! The [`EntryStore`] trait is the persistence boundary for the entry collection. The
//! whole collection is read in one call and written back in one call; there is no
//! per-entry access.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a single plain text file
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Storage Format
//!
//! One entry per line, five fields joined by `|`, no header, each line newline-terminated:
//!
//! ```text
//! Movie|Inception|2010|Sci-Fi|9
//! TV Show|Dark|2017|Thriller|10
//! ```
//!
//! Fields are not escaped. A `|` typed into a name or genre produces a line with the
//! wrong field count, and that line is dropped the next time the file is loaded.

use crate::error::Result;
use crate::model::Entry;

pub mod fs;
pub mod line;
pub mod memory;

/// Abstract interface for entry storage.
pub trait EntryStore {
    /// Load every stored entry in file order.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet (for `FileStore`, the
    /// file does not exist). Returns `Err` only on real I/O failures.
    fn load(&self) -> Result<Option<Vec<Entry>>>;

    /// Replace the stored collection with `entries`.
    fn save(&mut self, entries: &[Entry]) -> Result<()>;
}
