//! Handler input contract.
//!
//! A command declares the parameters it needs as a static list of [`Param`]s.
//! The dispatcher fills them from the words typed after the command phrase,
//! in order; the last parameter takes whatever words remain. Anything still
//! missing is requested from an [`ArgSource`]: the terminal prompt in the
//! interactive loop, or a scripted source in tests.

use crate::error::{OstapError, Result};
use std::collections::{HashMap, VecDeque};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub key: &'static str,
    pub prompt: &'static str,
}

impl Param {
    pub const fn new(key: &'static str, prompt: &'static str) -> Self {
        Self { key, prompt }
    }
}

pub const NAME: Param = Param::new("name", "Enter name: ");
pub const PHONE: Param = Param::new("phone", "Enter phone number: ");
pub const OLD_PHONE: Param = Param::new("old phone", "Enter old phone: ");
pub const NEW_PHONE: Param = Param::new("new phone", "Enter new phone: ");
pub const BIRTHDAY: Param = Param::new("birthday", "Enter birthday (DD.MM.YYYY, empty to skip): ");
pub const STREET: Param = Param::new("street", "Enter street: ");
pub const CITY: Param = Param::new("city", "Enter city: ");
pub const COUNTRY: Param = Param::new("country", "Enter country: ");
pub const POSTCODE: Param = Param::new("postcode", "Enter postcode: ");
pub const EMAIL: Param = Param::new("email", "Enter email (empty to skip): ");
pub const NOTE_ID: Param = Param::new("note id", "Enter note ID: ");
pub const TEXT: Param = Param::new("text", "Enter text: ");
pub const TAG: Param = Param::new("tag", "Enter tag: ");
pub const DAYS: Param = Param::new("days", "Enter count of days: ");
pub const KIND: Param = Param::new("kind", "Enter type of records (users or notes): ");
pub const FIELD: Param = Param::new(
    "field",
    "Enter field to search by (name/phone/address/email/tag/text): ",
);
pub const VALUE: Param = Param::new("value", "Enter value to search for: ");
pub const FOLDER: Param = Param::new("folder", "Enter path to folder: ");

/// Supplies values for parameters the command line left out.
pub trait ArgSource {
    /// Asks for one value. `None` means the source is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// A fixed list of answers, handed out in order.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, T>(answers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl ArgSource for ScriptedInput {
    fn ask(&mut self, _prompt: &str) -> Result<Option<String>> {
        Ok(self.answers.pop_front())
    }
}

/// Parameter values collected for one invocation.
#[derive(Debug, Default, Clone)]
pub struct Args {
    values: HashMap<&'static str, String>,
}

impl Args {
    pub fn collect(
        params: &[Param],
        positional: &[String],
        source: &mut dyn ArgSource,
    ) -> Result<Self> {
        let mut values = HashMap::with_capacity(params.len());
        let last = params.len().saturating_sub(1);

        for (i, param) in params.iter().enumerate() {
            let value = if i < positional.len() {
                if i == last {
                    positional[i..].join(" ")
                } else {
                    positional[i].clone()
                }
            } else {
                source
                    .ask(param.prompt)?
                    .ok_or_else(|| OstapError::MissingArguments(param.key.to_string()))?
            };
            values.insert(param.key, value.trim().to_string());
        }

        Ok(Self { values })
    }

    /// The value for `key`, empty when the parameter was answered blank.
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// Like [`Args::get`], but a blank value is a `MissingArguments` error.
    pub fn required(&self, key: &str) -> Result<&str> {
        let value = self.get(key);
        if value.is_empty() {
            return Err(OstapError::MissingArguments(key.to_string()));
        }
        Ok(value)
    }
}
