use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    let listed = catalog.entries().to_vec();
    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No entries found."));
    }
    Ok(result.with_listed_entries(listed))
}
