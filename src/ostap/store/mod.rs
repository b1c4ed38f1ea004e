//! # Storage Layer
//!
//! Contacts and notes each live in one JSON document: an object whose keys are
//! the record keys (contact name, note id) in insertion order. Every command
//! loads the whole document into a [`RecordStore`], mutates it in memory and
//! writes it back in full. There is no incremental persistence and no locking;
//! the last writer wins.
//!
//! ## Backends
//!
//! The [`DataStore`] trait hides where the documents live:
//!
//! - [`fs::FileStore`]: production storage, one file per collection inside a
//!   data directory. Writes go to a temp file that is renamed over the target.
//! - [`memory::InMemoryStore`]: keeps the serialized documents in a map, for tests.
//!
//! Both go through the same JSON encoding, so tests exercise the real format.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── data.json        # contacts, keyed by name
//! ├── notebook.json    # notes, keyed by id
//! └── config.json      # optional settings
//! ```
//!
//! ## Validation on Load
//!
//! Loading goes through the same typed constructors as user input. A document
//! holding an invalid phone, date or email fails to load with a serialization
//! error instead of smuggling an invalid value into memory. Persisted note tags
//! are ignored; tags are recomputed from the text.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod address_book;
pub mod fs;
pub mod memory;
pub mod notebook;
pub mod records;

pub use address_book::SearchField;
pub use records::{RecordStore, DEFAULT_PAGE_SIZE};

/// The two persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Contacts,
    Notes,
}

/// An entity that can live in a [`RecordStore`].
///
/// `Entry` is the persisted value stored under the record's key. The key itself
/// is not repeated inside the entry unless the format asks for it.
pub trait Record: Clone {
    type Entry: Serialize + DeserializeOwned;

    const COLLECTION: Collection;

    fn key(&self) -> &str;

    fn to_entry(&self) -> Self::Entry;

    /// Rebuilds a record from its key and persisted entry, validating every field.
    fn from_entry(key: String, entry: Self::Entry) -> Result<Self>;
}

/// Abstract interface for record persistence.
///
/// Implementations load and save whole collections; callers never see partial state.
pub trait DataStore {
    /// Load a collection. A collection that was never saved is empty.
    fn load<R: Record>(&self) -> Result<RecordStore<R>>;

    /// Replace the persisted collection with `records`.
    fn save<R: Record>(&mut self, records: &RecordStore<R>) -> Result<()>;
}
