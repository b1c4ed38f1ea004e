use crate::config::AssistantConfig;
use crate::model::{Contact, Note};
use crate::store::RecordStore;
use chrono::NaiveDate;

pub mod args;
pub mod contacts;
pub mod helpers;
pub mod notes;
pub mod registry;
pub mod resolver;
pub mod search;
pub mod similarity;
pub mod system;

pub use args::{ArgSource, Args, Param, ScriptedInput};
pub use registry::{CommandSpec, Handler, HelpEntry, Registry};
pub use resolver::{Resolved, Resolver};

/// Everything a handler may touch while it runs.
pub struct Context<'a, S> {
    pub store: &'a mut S,
    pub config: &'a AssistantConfig,
    pub registry: &'a Registry<S>,
    pub today: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A whole store handed back for page-by-page display.
#[derive(Debug, Clone)]
pub enum Listing {
    Contacts(RecordStore<Contact>),
    Notes(RecordStore<Note>),
}

impl Listing {
    pub fn page_count(&self, page_size: usize) -> usize {
        match self {
            Listing::Contacts(store) => store.page_count(page_size),
            Listing::Notes(store) => store.page_count(page_size),
        }
    }

    /// Rendered lines of the page at zero-based `index`.
    pub fn page_lines(&self, index: usize, page_size: usize) -> Option<Vec<String>> {
        match self {
            Listing::Contacts(store) => store
                .page(index, page_size)
                .map(|page| page.iter().map(|c| c.to_string()).collect()),
            Listing::Notes(store) => store
                .page(index, page_size)
                .map(|page| page.iter().map(|n| n.to_string()).collect()),
        }
    }
}

/// What the interactive loop should do after rendering a result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Control {
    #[default]
    Continue,
    ClearScreen,
    Exit,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub listing: Option<Listing>,
    pub help: Vec<HelpEntry>,
    pub control: Control,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listing(mut self, listing: Listing) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn with_help(mut self, help: Vec<HelpEntry>) -> Self {
        self.help = help;
        self
    }

    pub fn with_control(mut self, control: Control) -> Self {
        self.control = control;
        self
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::default().with_message(CmdMessage::success(content))
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::default().with_message(CmdMessage::info(content))
    }

    /// All message texts, one per line.
    pub fn text(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
