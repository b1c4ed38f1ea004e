//! Field validators.
//!
//! Pure predicates over raw strings. Each one can be called before a typed
//! field is constructed; the typed constructors in [`crate::model::fields`]
//! use them and turn a rejection into a dedicated error variant.
//!
//! - Phone: optional `+`, a digit 1-9, then exactly 11 more digits.
//! - Date: `DD.MM.YYYY`, calendar-valid. Empty means "unset".
//! - Email: `local@domain.tld`. Empty means "unset".

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

pub const DATE_FORMAT: &str = "%d.%m.%Y";

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[1-9]\d{11}$").unwrap());

static DATE_SHAPE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").unwrap());

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

pub fn is_valid_phone(raw: &str) -> bool {
    PHONE_RE.is_match(raw)
}

pub fn is_valid_date(raw: &str) -> bool {
    raw.is_empty() || parse_date(raw).is_some()
}

pub fn is_valid_email(raw: &str) -> bool {
    raw.is_empty() || EMAIL_RE.is_match(raw)
}

/// Parses a `DD.MM.YYYY` string. Returns `None` for empty or malformed input.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    // chrono alone would accept unpadded days and months
    if !DATE_SHAPE_RE.is_match(raw) {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}
