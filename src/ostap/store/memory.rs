use super::{Collection, DataStore, Record, RecordStore};
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data, but goes through the same JSON encoding as [`super::fs::FileStore`].
#[derive(Default)]
pub struct InMemoryStore {
    documents: HashMap<Collection, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw document last saved for `collection`, if any.
    pub fn document(&self, collection: Collection) -> Option<&str> {
        self.documents.get(&collection).map(String::as_str)
    }
}

impl DataStore for InMemoryStore {
    fn load<R: Record>(&self) -> Result<RecordStore<R>> {
        match self.documents.get(&R::COLLECTION) {
            Some(doc) => RecordStore::from_json(doc),
            None => Ok(RecordStore::new()),
        }
    }

    fn save<R: Record>(&mut self, records: &RecordStore<R>) -> Result<()> {
        self.documents.insert(R::COLLECTION, records.to_json()?);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Address, Birthday, Contact, Email, Name, Note, Phone};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, phone: &str, birthday: &str) -> Self {
            let contact = Contact::new(Name::new(name).unwrap())
                .with_phone(Phone::new(phone).unwrap())
                .with_birthday(Birthday::new(birthday).unwrap());
            self.push_contact(contact);
            self
        }

        pub fn with_full_contact(mut self, name: &str) -> Self {
            let contact = Contact::new(Name::new(name).unwrap())
                .with_phone(Phone::new("380501234567").unwrap())
                .with_birthday(Birthday::new("15.06.1990").unwrap())
                .with_address(Address::new("Main St 1", "Kyiv", "Ukraine", "01001"))
                .with_email(Email::new("someone@example.com").unwrap());
            self.push_contact(contact);
            self
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let contact = Contact::new(Name::new(&format!("Contact {}", i + 1)).unwrap())
                    .with_phone(Phone::new(&format!("3805000{:05}", i)).unwrap());
                self.push_contact(contact);
            }
            self
        }

        pub fn with_note(mut self, text: &str) -> Self {
            let mut notes = self.store.load::<Note>().unwrap();
            notes.add_note(text);
            self.store.save(&notes).unwrap();
            self
        }

        fn push_contact(&mut self, contact: Contact) {
            let mut contacts = self.store.load::<Contact>().unwrap();
            contacts.insert(contact);
            self.store.save(&contacts).unwrap();
        }
    }
}
