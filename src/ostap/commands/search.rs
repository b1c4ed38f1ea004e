//! `search <field> <value>`.
//!
//! `tag` and `text` search the notebook; every other field name is parsed as a
//! [`SearchField`] and searches the address book. Matches come back as a
//! listing so long result sets page like `show all`.

use super::args::{FIELD, VALUE};
use super::{Args, CmdResult, Context, Listing};
use crate::error::Result;
use crate::model::{Contact, Note};
use crate::store::{DataStore, RecordStore, SearchField};

pub fn run<S: DataStore>(ctx: &mut Context<'_, S>, args: &Args) -> Result<CmdResult> {
    let field = args.required(FIELD.key)?.to_lowercase();
    let value = args.required(VALUE.key)?;

    match field.as_str() {
        "tag" | "text" => search_notes(ctx.store, &field, value),
        other => search_contacts(ctx.store, other.parse()?, value),
    }
}

fn search_notes<S: DataStore>(store: &S, field: &str, value: &str) -> Result<CmdResult> {
    let notes = store.load::<Note>()?;
    let found = if field == "tag" {
        notes.find_by_tag(value)
    } else {
        notes.find_by_text(value)
    };
    if found.is_empty() {
        return Ok(CmdResult::info(format!(
            "There are no notes matching '{}'.",
            value
        )));
    }
    let found: RecordStore<Note> = found.into_iter().cloned().collect();
    Ok(CmdResult::default().with_listing(Listing::Notes(found)))
}

fn search_contacts<S: DataStore>(
    store: &S,
    field: SearchField,
    value: &str,
) -> Result<CmdResult> {
    let contacts = store.load::<Contact>()?;
    let found = contacts.search(field, value);
    if found.is_empty() {
        return Ok(CmdResult::info(format!(
            "There are no users matching '{}'.",
            value
        )));
    }
    let found: RecordStore<Contact> = found.into_iter().cloned().collect();
    Ok(CmdResult::default().with_listing(Listing::Contacts(found)))
}
