use crate::error::{OstapError, Result};
use crate::model::{Contact, Name, Note};
use crate::store::DataStore;

/// Loads the contact stored under `raw_name`.
pub fn find_contact<S: DataStore>(store: &S, raw_name: &str) -> Result<Contact> {
    let name = Name::new(raw_name)?;
    store
        .load::<Contact>()?
        .get(name.as_str())
        .cloned()
        .ok_or_else(|| OstapError::NameNotFound(name.to_string()))
}

/// Loads the address book, applies `f` to one contact and saves the book back.
///
/// Nothing is written if the contact is missing or `f` fails.
pub fn update_contact<S, T, F>(store: &mut S, raw_name: &str, f: F) -> Result<T>
where
    S: DataStore,
    F: FnOnce(&mut Contact) -> Result<T>,
{
    let name = Name::new(raw_name)?;
    let mut contacts = store.load::<Contact>()?;
    let contact = contacts
        .get_mut(name.as_str())
        .ok_or_else(|| OstapError::NameNotFound(name.to_string()))?;
    let outcome = f(contact)?;
    store.save(&contacts)?;
    Ok(outcome)
}

/// Same as [`update_contact`], for the note stored under `id`.
pub fn update_note<S, T, F>(store: &mut S, id: &str, f: F) -> Result<T>
where
    S: DataStore,
    F: FnOnce(&mut Note) -> Result<T>,
{
    let mut notes = store.load::<Note>()?;
    let note = notes
        .get_mut(id)
        .ok_or_else(|| OstapError::NoteIdNotFound(id.to_string()))?;
    let outcome = f(note)?;
    store.save(&notes)?;
    Ok(outcome)
}
