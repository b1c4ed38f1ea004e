use super::args::{NOTE_ID, TAG, TEXT};
use super::helpers::update_note;
use super::{Args, CmdResult, Context, Listing};
use crate::error::{OstapError, Result};
use crate::model::note::normalize_tag;
use crate::model::Note;
use crate::store::{DataStore, RecordStore};

pub fn add_note<S: DataStore>(ctx: &mut Context<'_, S>, args: &Args) -> Result<CmdResult> {
    let text = args.required(TEXT.key)?;
    let mut notes = ctx.store.load::<Note>()?;
    let id = notes.add_note(text);
    ctx.store.save(&notes)?;
    log::debug!("added note {}", id);
    Ok(CmdResult::success(format!("Note {} added successfully.", id)))
}

pub fn change_note<S: DataStore>(ctx: &mut Context<'_, S>, args: &Args) -> Result<CmdResult> {
    let id = args.required(NOTE_ID.key)?;
    let text = args.required(TEXT.key)?;
    update_note(ctx.store, id, |note| {
        note.edit(text);
        Ok(())
    })?;
    Ok(CmdResult::success(format!("Note {} changed successfully.", id)))
}

pub fn delete_note<S: DataStore>(ctx: &mut Context<'_, S>, args: &Args) -> Result<CmdResult> {
    let id = args.required(NOTE_ID.key)?;
    let mut notes = ctx.store.load::<Note>()?;
    notes
        .remove(id)
        .ok_or_else(|| OstapError::NoteIdNotFound(id.to_string()))?;
    ctx.store.save(&notes)?;
    Ok(CmdResult::success(format!("Note {} deleted successfully.", id)))
}

/// Lists every note, those carrying the tag first.
pub fn sort_notes<S: DataStore>(ctx: &mut Context<'_, S>, args: &Args) -> Result<CmdResult> {
    let tag = normalize_tag(args.required(TAG.key)?);
    if tag.is_empty() {
        return Err(OstapError::MissingArguments(TAG.key.to_string()));
    }

    let notes = ctx.store.load::<Note>()?;
    let Some(sorted) = notes.sort_by_tag(&tag) else {
        return Ok(CmdResult::info(format!(
            "There are no notes with tag #{}.",
            tag
        )));
    };

    let sorted: RecordStore<Note> = sorted.into_iter().cloned().collect();
    Ok(CmdResult::info(format!("Notes sorted by tag #{}:", tag))
        .with_listing(Listing::Notes(sorted)))
}

#[cfg(test)]
mod tests {
    use super::super::helpers::testing::{invoke, invoke_with};
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn listed_texts(result: &CmdResult) -> Vec<String> {
        match &result.listing {
            Some(Listing::Notes(notes)) => notes.iter().map(|n| n.text().to_string()).collect(),
            _ => panic!("expected a note listing"),
        }
    }

    #[test]
    fn add_note_assigns_increasing_ids() {
        let mut store = InMemoryStore::new();
        let first = invoke(&mut store, "add note", "buy milk #errand").unwrap();
        let second = invoke(&mut store, "add note", "call mom").unwrap();
        assert_eq!(first.text(), "Note 1000 added successfully.");
        assert_eq!(second.text(), "Note 1001 added successfully.");

        let notes = store.load::<Note>().unwrap();
        assert_eq!(notes.get("1000").unwrap().tags(), vec!["errand"]);
    }

    #[test]
    fn add_note_requires_text() {
        let mut store = InMemoryStore::new();
        let err = invoke_with(&mut store, "add note", "", &["  "]).unwrap_err();
        assert!(matches!(err, OstapError::MissingArguments(_)));
        assert!(store.load::<Note>().unwrap().is_empty());
    }

    #[test]
    fn next_id_follows_highest_remaining_id() {
        let mut store = StoreFixture::new().with_note("a").with_note("b").store;
        invoke(&mut store, "del note", "1001").unwrap();
        let result = invoke(&mut store, "add note", "c").unwrap();
        assert_eq!(result.text(), "Note 1001 added successfully.");

        invoke(&mut store, "del note", "1000").unwrap();
        let result = invoke(&mut store, "add note", "d").unwrap();
        assert_eq!(result.text(), "Note 1002 added successfully.");
    }

    #[test]
    fn change_note_recomputes_tags() {
        let mut store = StoreFixture::new().with_note("draft #todo").store;
        invoke(&mut store, "change note", "1000 final #Done").unwrap();

        let note = store.load::<Note>().unwrap().get("1000").cloned().unwrap();
        assert_eq!(note.text(), "final #Done");
        assert_eq!(note.tags(), vec!["done"]);
        assert!(!note.has_tag("todo"));
    }

    #[test]
    fn unknown_note_ids() {
        let mut store = InMemoryStore::new();
        let err = invoke(&mut store, "change note", "4242 text").unwrap_err();
        assert!(matches!(err, OstapError::NoteIdNotFound(ref id) if id == "4242"));

        let err = invoke(&mut store, "del note", "4242").unwrap_err();
        assert!(matches!(err, OstapError::NoteIdNotFound(_)));
    }

    #[test]
    fn sort_notes_puts_tagged_first() {
        let mut store = StoreFixture::new()
            .with_note("call mom")
            .with_note("buy milk #errand")
            .with_note("read a book")
            .with_note("post parcel #Errand")
            .store;

        let result = invoke(&mut store, "sort notes", "#ERRAND").unwrap();
        assert_eq!(result.text(), "Notes sorted by tag #errand:");
        assert_eq!(
            listed_texts(&result),
            vec![
                "buy milk #errand",
                "post parcel #Errand",
                "call mom",
                "read a book"
            ]
        );
    }

    #[test]
    fn sort_notes_with_unknown_tag() {
        let mut store = StoreFixture::new().with_note("call mom").store;
        let result = invoke(&mut store, "sort notes", "work").unwrap();
        assert_eq!(result.text(), "There are no notes with tag #work.");
        assert!(result.listing.is_none());
    }
}
