use super::{Collection, Record, RecordStore};
use crate::error::{OstapError, Result};
use crate::model::{Address, Birthday, Contact, Email, Name, Phone};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const MAX_BIRTHDAY_WINDOW: i64 = 365;

/// Persisted form of a contact; the name is the key of the entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactEntry {
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub birthday: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub email: String,
}

impl Record for Contact {
    type Entry = ContactEntry;

    const COLLECTION: Collection = Collection::Contacts;

    fn key(&self) -> &str {
        self.name().as_str()
    }

    fn to_entry(&self) -> ContactEntry {
        ContactEntry {
            phones: self.phones().iter().map(|p| p.to_string()).collect(),
            birthday: self.birthday.to_string(),
            address: self.address.clone(),
            email: self.email.to_string(),
        }
    }

    fn from_entry(key: String, entry: ContactEntry) -> Result<Self> {
        let mut contact = Contact::new(Name::new(&key)?)
            .with_birthday(Birthday::new(&entry.birthday)?)
            .with_address(entry.address)
            .with_email(Email::new(&entry.email)?);
        for raw in &entry.phones {
            contact.add_phone(Phone::new(raw)?);
        }
        Ok(contact)
    }
}

/// Contact fields that can be searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Phone,
    Address,
    Email,
}

impl FromStr for SearchField {
    type Err = OstapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "phone" => Ok(Self::Phone),
            "address" => Ok(Self::Address),
            "email" => Ok(Self::Email),
            other => Err(OstapError::UnknownField(other.to_string())),
        }
    }
}

impl RecordStore<Contact> {
    /// Contacts whose `field` contains `text`.
    ///
    /// Names match case-sensitively; address and email ignore case.
    pub fn search(&self, field: SearchField, text: &str) -> Vec<&Contact> {
        let needle = text.to_lowercase();
        self.iter()
            .filter(|c| match field {
                SearchField::Name => c.name().as_str().contains(text),
                SearchField::Phone => c.phones().iter().any(|p| p.as_str().contains(text)),
                SearchField::Address => c.address.to_string().to_lowercase().contains(&needle),
                SearchField::Email => c.email.as_str().to_lowercase().contains(&needle),
            })
            .collect()
    }

    /// Birthdays falling within `[today, today + days]`, earliest first.
    ///
    /// Each birthday is projected to its next occurrence. Callers clamp `days`
    /// to [`MAX_BIRTHDAY_WINDOW`].
    pub fn upcoming_birthdays(&self, today: NaiveDate, days: i64) -> Vec<(NaiveDate, String)> {
        let end = today + Duration::days(days);
        let mut upcoming: Vec<(NaiveDate, String)> = self
            .iter()
            .filter_map(|c| {
                let next = c.birthday.next_occurrence(today)?;
                (next <= end).then(|| (next, c.name().to_string()))
            })
            .collect();
        // stable sort: same-day birthdays stay in insertion order
        upcoming.sort_by_key(|(date, _)| *date);
        upcoming
    }
}
