//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every medialog operation, whatever UI drives it.
//!
//! `MediaLogApi` owns two things for the length of a session: the [`EntryStore`] it was
//! opened from and the in-memory [`Catalog`]. Every operation between [`MediaLogApi::open`]
//! and [`MediaLogApi::save`] works on the catalog only; the store is touched exactly
//! twice.
//!
//! The facade takes raw strings where a UI would naturally have them (the search field
//! and query) and typed values where the UI has already validated them (an
//! [`EntryDraft`]). It never prints anything.
//!
//! ## Generic Over EntryStore
//!
//! - Production: `MediaLogApi<FileStore>`
//! - Testing: `MediaLogApi<InMemoryStore>`

use crate::catalog::Catalog;
use crate::commands::{self, SearchField};
use crate::error::Result;
use crate::model::EntryDraft;
use crate::store::EntryStore;

pub struct MediaLogApi<S: EntryStore> {
    store: S,
    catalog: Catalog,
}

impl<S: EntryStore> MediaLogApi<S> {
    /// Loads the stored collection. Fails only on a real storage error.
    pub fn open(store: S) -> Result<(Self, CmdResult)> {
        let (catalog, result) = commands::open::run(&store)?;
        Ok((Self { store, catalog }, result))
    }

    pub fn add_entry(&mut self, draft: EntryDraft) -> Result<CmdResult> {
        commands::add::run(&mut self.catalog, draft)
    }

    /// Overwrites the rating of the entry at `index` (as reported by `add_entry`).
    pub fn update_rating(&mut self, index: usize, rating: u32) -> Result<CmdResult> {
        commands::resolve::update_rating(&mut self.catalog, index, rating)
    }

    /// Searches by a field named in free text (`name`, `genre` or `rating`).
    ///
    /// An unknown field is not an error: the result is empty and carries an error
    /// message for the user.
    pub fn search_entries(&self, field: &str, query: &str) -> Result<CmdResult> {
        match field.parse::<SearchField>() {
            Ok(field) => commands::search::run(&self.catalog, field, query),
            Err(()) => {
                Ok(CmdResult::default().with_message(CmdMessage::error("Invalid search option.")))
            }
        }
    }

    pub fn list_entries(&self) -> Result<CmdResult> {
        commands::list::run(&self.catalog)
    }

    pub fn statistics(&self) -> Result<CmdResult> {
        commands::stats::run(&self.catalog)
    }

    /// Writes the whole catalog back to the store.
    pub fn save(&mut self) -> Result<CmdResult> {
        commands::save::run(&mut self.store, &self.catalog)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::{
    CmdMessage, CmdResult, DuplicateAction, MessageLevel, Statistics, Summary,
};
