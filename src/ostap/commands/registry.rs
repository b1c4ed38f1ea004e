//! The command table.
//!
//! Built once at startup and never mutated. The same table drives dispatch,
//! the `help` listing, the set of two-word prefixes the resolver recognizes,
//! and the fuzzy suggestions for mistyped phrases.

use super::args::{
    Param, BIRTHDAY, CITY, COUNTRY, DAYS, EMAIL, FIELD, FOLDER, KIND, NAME, NEW_PHONE, NOTE_ID,
    OLD_PHONE, PHONE, POSTCODE, STREET, TAG, TEXT, VALUE,
};
use super::{contacts, notes, search, system, Args, CmdResult, Context};
use crate::error::Result;
use crate::store::DataStore;
use std::collections::{BTreeSet, HashMap};

pub type Handler<S> = fn(&mut Context<'_, S>, &Args) -> Result<CmdResult>;

pub struct CommandSpec<S> {
    pub phrases: &'static [&'static str],
    pub description: &'static str,
    pub params: &'static [Param],
    pub handler: Handler<S>,
}

/// One row of the help table: all aliases of a command and what it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub phrases: String,
    pub description: String,
}

pub struct Registry<S> {
    commands: Vec<CommandSpec<S>>,
    index: HashMap<&'static str, usize>,
}

impl<S> Default for Registry<S> {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<S> Registry<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a command under one or more phrases. A later phrase shadows an earlier one.
    pub fn command(
        mut self,
        phrases: &'static [&'static str],
        description: &'static str,
        params: &'static [Param],
        handler: Handler<S>,
    ) -> Self {
        let slot = self.commands.len();
        for phrase in phrases {
            self.index.insert(*phrase, slot);
        }
        self.commands.push(CommandSpec {
            phrases,
            description,
            params,
            handler,
        });
        self
    }

    pub fn lookup(&self, phrase: &str) -> Option<&CommandSpec<S>> {
        self.index.get(phrase).map(|&slot| &self.commands[slot])
    }

    /// Every registered phrase, in registration order.
    pub fn phrases(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().flat_map(|c| c.phrases.iter().copied())
    }

    /// First words of the registered two-word phrases (`show`, `del`, ...).
    pub fn two_word_prefixes(&self) -> BTreeSet<&'static str> {
        self.phrases()
            .filter_map(|p| p.split_once(' ').map(|(first, _)| first))
            .collect()
    }

    pub fn help_entries(&self) -> Vec<HelpEntry> {
        self.commands
            .iter()
            .map(|c| HelpEntry {
                phrases: c.phrases.join(", "),
                description: c.description.to_string(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<S: DataStore> Registry<S> {
    /// The assistant's full command set.
    pub fn standard() -> Self {
        Registry::new()
            .command(&["help"], "Show all available commands.", &[], system::help)
            .command(
                &["add record"],
                "Add a contact with phone, birthday, address and email. \
                 If the name exists, add the phone to it.",
                &[NAME, PHONE, BIRTHDAY, STREET, CITY, COUNTRY, POSTCODE, EMAIL],
                contacts::add_record,
            )
            .command(
                &["add phone"],
                "Add a phone number to an existing contact.",
                &[NAME, PHONE],
                contacts::add_phone,
            )
            .command(
                &["add note"],
                "Add a note; words starting with # become its tags.",
                &[TEXT],
                notes::add_note,
            )
            .command(
                &["change phone"],
                "Replace one of a contact's phone numbers.",
                &[NAME, OLD_PHONE, NEW_PHONE],
                contacts::change_phone,
            )
            .command(
                &["change birthday"],
                "Change a contact's birthday.",
                &[NAME, BIRTHDAY],
                contacts::change_birthday,
            )
            .command(
                &["change address"],
                "Change a contact's address.",
                &[NAME, STREET, CITY, COUNTRY, POSTCODE],
                contacts::change_address,
            )
            .command(
                &["change email"],
                "Change a contact's email.",
                &[NAME, EMAIL],
                contacts::change_email,
            )
            .command(
                &["change note"],
                "Replace the text of a note.",
                &[NOTE_ID, TEXT],
                notes::change_note,
            )
            .command(
                &["del user"],
                "Delete a contact.",
                &[NAME],
                contacts::delete_user,
            )
            .command(
                &["del phone"],
                "Delete a phone number from a contact.",
                &[NAME, PHONE],
                contacts::delete_phone,
            )
            .command(&["del note"], "Delete a note.", &[NOTE_ID], notes::delete_note)
            .command(
                &["show all"],
                "Show all users or notes, page by page.",
                &[KIND],
                system::show_all,
            )
            .command(
                &["show phone"],
                "Show a contact's phone numbers.",
                &[NAME],
                contacts::show_phone,
            )
            .command(
                &["show address"],
                "Show a contact's address.",
                &[NAME],
                contacts::show_address,
            )
            .command(
                &["show email"],
                "Show a contact's email.",
                &[NAME],
                contacts::show_email,
            )
            .command(
                &["show birthday"],
                "Show a contact's birthday and the days left until it.",
                &[NAME],
                contacts::show_birthday,
            )
            .command(
                &["show nearbday"],
                "Show birthdays within the given number of days (at most 365).",
                &[DAYS],
                contacts::show_near_birthdays,
            )
            .command(
                &["search"],
                "Search users by name, phone, address or email, or notes by tag or text.",
                &[FIELD, VALUE],
                search::run,
            )
            .command(
                &["sort notes"],
                "List notes carrying a tag first.",
                &[TAG],
                notes::sort_notes,
            )
            .command(
                &["sort files"],
                "Sort the files of a folder into subfolders by type.",
                &[FOLDER],
                system::sort_files,
            )
            .command(&["clear"], "Clear the console.", &[], system::clear)
            .command(
                &["exit", "close", "good bye", "quit"],
                "Leave the assistant.",
                &[],
                system::exit,
            )
    }
}
