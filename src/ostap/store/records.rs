use super::Record;
use crate::error::{OstapError, Result};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Insertion-ordered records with unique keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore<R> {
    records: Vec<R>,
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> RecordStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, replacing one with the same key in place.
    pub fn insert(&mut self, record: R) {
        match self.position(record.key()) {
            Some(pos) => self.records[pos] = record,
            None => self.records.push(record),
        }
    }

    pub fn get(&self, key: &str) -> Option<&R> {
        self.records.iter().find(|r| r.key() == key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut R> {
        self.records.iter_mut().find(|r| r.key() == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<R> {
        self.position(key).map(|pos| self.records.remove(pos))
    }

    pub fn values(&self) -> &[R] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The page at zero-based `index`, or `None` past the last page.
    pub fn page(&self, index: usize, size: usize) -> Option<&[R]> {
        self.records.chunks(size.max(1)).nth(index)
    }

    pub fn page_count(&self, size: usize) -> usize {
        self.records.len().div_ceil(size.max(1))
    }

    /// All pages in order. Each call starts again from the first page.
    pub fn pages(&self, size: usize) -> std::slice::Chunks<'_, R> {
        self.records.chunks(size.max(1))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(OstapError::Serialization)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(OstapError::Serialization)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.records.iter().position(|r| r.key() == key)
    }
}

impl<R: Record> FromIterator<R> for RecordStore<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut store = Self::new();
        for record in iter {
            store.insert(record);
        }
        store
    }
}

impl<'a, R: Record> IntoIterator for &'a RecordStore<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<R: Record> Serialize for RecordStore<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for record in &self.records {
            map.serialize_entry(record.key(), &record.to_entry())?;
        }
        map.end()
    }
}

// Hand-written so that document order survives without an order-preserving map type.
impl<'de, R: Record> Deserialize<'de> for RecordStore<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct RecordsVisitor<R>(PhantomData<R>);

        impl<'de, R: Record> Visitor<'de> for RecordsVisitor<R> {
            type Value = RecordStore<R>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an object of records keyed by name or id")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut store = RecordStore::new();
                while let Some((key, entry)) = access.next_entry::<String, R::Entry>()? {
                    let record = R::from_entry(key, entry)
                        .map_err(<A::Error as serde::de::Error>::custom)?;
                    store.insert(record);
                }
                Ok(store)
            }
        }

        deserializer.deserialize_map(RecordsVisitor(PhantomData))
    }
}
