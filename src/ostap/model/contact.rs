use super::fields::{Address, Birthday, Email, Name, Phone};
use crate::error::{OstapError, Result};
use chrono::NaiveDate;
use std::fmt;

/// Outcome of [`Contact::add_phone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneStatus {
    Added,
    AlreadyPresent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: Name,
    // Ordered set: insertion order is kept, duplicates are never stored.
    phones: Vec<Phone>,
    pub birthday: Birthday,
    pub address: Address,
    pub email: Email,
}

impl Contact {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: Birthday::default(),
            address: Address::default(),
            email: Email::default(),
        }
    }

    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.add_phone(phone);
        self
    }

    pub fn with_birthday(mut self, birthday: Birthday) -> Self {
        self.birthday = birthday;
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = email;
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn add_phone(&mut self, phone: Phone) -> PhoneStatus {
        if self.phones.contains(&phone) {
            return PhoneStatus::AlreadyPresent;
        }
        self.phones.push(phone);
        PhoneStatus::Added
    }

    /// Replaces `old` with `new`, keeping its position in the list.
    pub fn change_phone(&mut self, old: &Phone, new: Phone) -> Result<()> {
        let pos = self.position_of(old)?;
        if self.phones.contains(&new) {
            // `new` is already listed elsewhere; keeping both would duplicate it.
            if self.phones[pos] != new {
                self.phones.remove(pos);
            }
            return Ok(());
        }
        self.phones[pos] = new;
        Ok(())
    }

    pub fn delete_phone(&mut self, phone: &Phone) -> Result<()> {
        let pos = self.position_of(phone)?;
        self.phones.remove(pos);
        Ok(())
    }

    pub fn change_birthday(&mut self, birthday: Birthday) -> String {
        self.birthday = birthday;
        format!(
            "Birthday for user {} changed to {}.",
            self.name,
            display_or_unset(&self.birthday.to_string())
        )
    }

    pub fn change_address(&mut self, address: Address) -> String {
        self.address = address;
        format!(
            "Address for user {} changed to {}.",
            self.name,
            display_or_unset(&self.address.to_string())
        )
    }

    pub fn change_email(&mut self, email: Email) -> String {
        self.email = email;
        format!(
            "Email for user {} changed to {}.",
            self.name,
            display_or_unset(self.email.as_str())
        )
    }

    /// Days from `today` until the next birthday; zero when it is today.
    pub fn days_until_birthday(&self, today: NaiveDate) -> Result<i64> {
        let next = self
            .birthday
            .next_occurrence(today)
            .ok_or_else(|| OstapError::NoBirthday(self.name.to_string()))?;
        Ok((next - today).num_days())
    }

    fn position_of(&self, phone: &Phone) -> Result<usize> {
        self.phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| OstapError::PhoneNotFound {
                name: self.name.to_string(),
                phone: phone.to_string(),
            })
    }
}

fn display_or_unset(value: &str) -> &str {
    if value.is_empty() {
        "<empty>"
    } else {
        value
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.phones.is_empty() {
            let phones = self
                .phones
                .iter()
                .map(Phone::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, ": {}", phones)?;
        }
        if self.birthday.is_set() {
            write!(f, "; Birthday: {}", self.birthday)?;
        }
        if !self.address.is_empty() {
            write!(f, "; Address: {}", self.address)?;
        }
        if self.email.is_set() {
            write!(f, "; Email: {}", self.email)?;
        }
        Ok(())
    }
}
