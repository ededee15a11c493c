use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::EntryStore;

/// Loads the stored collection into a fresh catalog.
///
/// A store with nothing in it yet is not an error: the catalog starts empty and an
/// informational message says so.
pub fn run<S: EntryStore>(store: &S) -> Result<(Catalog, CmdResult)> {
    let mut result = CmdResult::default();
    let catalog = match store.load()? {
        Some(entries) => Catalog::from_entries(entries),
        None => {
            result.add_message(CmdMessage::info("No existing data found."));
            Catalog::new()
        }
    };
    Ok((catalog, result))
}
