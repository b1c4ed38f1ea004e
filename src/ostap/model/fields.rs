use crate::error::{OstapError, Result};
use crate::validate::{self, DATE_FORMAT};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact's name. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(OstapError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if !validate::is_valid_phone(trimmed) {
            return Err(OstapError::InvalidPhone(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A birthday in `DD.MM.YYYY`, or unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Birthday(Option<NaiveDate>);

impl Birthday {
    /// Parses a birthday. An empty string yields an unset birthday.
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self(None));
        }
        validate::parse_date(trimmed)
            .map(|date| Self(Some(date)))
            .ok_or_else(|| OstapError::InvalidDate(trimmed.to_string()))
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.0
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// The first occurrence of this month/day on or after `today`.
    ///
    /// A 29 February birthday falls on 28 February in common years.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let date = self.0?;
        let this_year = anniversary(date, today.year())?;
        if this_year >= today {
            Some(this_year)
        } else {
            anniversary(date, today.year() + 1)
        }
    }
}

fn anniversary(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), date.day() - 1))
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            None => Ok(()),
        }
    }
}

/// An email address, or unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if !validate::is_valid_email(trimmed) {
            return Err(OstapError::InvalidEmail(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_set(&self) -> bool {
        !self.0.is_empty()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-text postal address. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub postcode: String,
}

impl Address {
    pub fn new(street: &str, city: &str, country: &str, postcode: &str) -> Self {
        Self {
            street: street.trim().to_string(),
            city: city.trim().to_string(),
            country: country.trim().to_string(),
            postcode: postcode.trim().to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.parts().next().is_none()
    }

    fn parts(&self) -> impl Iterator<Item = &str> {
        [&self.street, &self.city, &self.country, &self.postcode]
            .into_iter()
            .map(String::as_str)
            .filter(|part| !part.is_empty())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self.parts().collect::<Vec<_>>().join(", ");
        f.write_str(&joined)
    }
}
