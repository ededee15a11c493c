use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::EntryStore;

/// Writes the whole catalog back to the store, replacing what was there.
pub fn run<S: EntryStore>(store: &mut S, catalog: &Catalog) -> Result<CmdResult> {
    store.save(catalog.entries())?;
    Ok(CmdResult::default().with_message(CmdMessage::success("Data saved. Exiting program.")))
}
