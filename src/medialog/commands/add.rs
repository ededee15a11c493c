use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{EntryDraft, Year};

/// Appends the draft unless an entry with the same name and year already exists.
///
/// On a match nothing is changed: the result carries the position of the existing
/// entry in `duplicate_of` and the caller decides what to do through
/// [`super::resolve`].
pub fn run(catalog: &mut Catalog, draft: EntryDraft) -> Result<CmdResult> {
    if let Some(index) = catalog.find_duplicate(&draft.name, &Year::Parsed(draft.year)) {
        return Ok(CmdResult::default()
            .with_duplicate_of(index)
            .with_message(CmdMessage::warning("Entry already exists!")));
    }

    let entry = draft.into_entry();
    catalog.push(entry.clone());

    Ok(CmdResult::default()
        .with_affected_entries(vec![entry])
        .with_message(CmdMessage::success("New entry added successfully!")))
}
