use super::{Collection, Record, RecordStore};
use crate::error::Result;
use crate::model::note::normalize_tag;
use crate::model::Note;
use serde::{Deserialize, Serialize};

const FIRST_NOTE_ID: u64 = 1000;

/// Persisted form of a note.
///
/// `tags` is written so the file is readable on its own, but it is never read
/// back: tags always come from the text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteEntry {
    pub text: String,
    pub id: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Record for Note {
    type Entry = NoteEntry;

    const COLLECTION: Collection = Collection::Notes;

    fn key(&self) -> &str {
        self.id()
    }

    fn to_entry(&self) -> NoteEntry {
        NoteEntry {
            text: self.text().to_string(),
            id: self.id().to_string(),
            tags: self.tags(),
        }
    }

    fn from_entry(key: String, entry: NoteEntry) -> Result<Self> {
        // The map key is authoritative when the two disagree.
        Ok(Note::new(key, entry.text))
    }
}

impl RecordStore<Note> {
    /// Adds a note under a fresh id and returns that id.
    pub fn add_note(&mut self, text: impl Into<String>) -> String {
        let id = self.next_id();
        self.insert(Note::new(id.clone(), text));
        id
    }

    /// One past the highest numeric id, never colliding with an existing key.
    ///
    /// When the highest id is `u64::MAX` the search wraps to the first free id
    /// from `FIRST_NOTE_ID` upward.
    pub fn next_id(&self) -> String {
        let start = self
            .iter()
            .filter_map(|n| n.id().parse::<u64>().ok())
            .max()
            .map_or(Some(FIRST_NOTE_ID), |max| max.checked_add(1))
            .map_or(FIRST_NOTE_ID, |next| next.max(FIRST_NOTE_ID));
        (start..=u64::MAX)
            .chain(FIRST_NOTE_ID..start)
            .find(|id| !self.contains(&id.to_string()))
            .unwrap_or(start)
            .to_string()
    }

    pub fn find_by_tag(&self, tag: &str) -> Vec<&Note> {
        self.iter().filter(|n| n.has_tag(tag)).collect()
    }

    /// Notes whose text contains `text`, ignoring case.
    pub fn find_by_text(&self, text: &str) -> Vec<&Note> {
        let needle = text.to_lowercase();
        self.iter()
            .filter(|n| n.text().to_lowercase().contains(&needle))
            .collect()
    }

    /// All notes, those carrying `tag` first. Order inside each group is kept.
    ///
    /// Returns `None` when no note carries the tag.
    pub fn sort_by_tag(&self, tag: &str) -> Option<Vec<&Note>> {
        let tag = normalize_tag(tag);
        let (tagged, rest): (Vec<&Note>, Vec<&Note>) = self.iter().partition(|n| n.has_tag(&tag));
        if tagged.is_empty() {
            return None;
        }
        Some(tagged.into_iter().chain(rest).collect())
    }
}
