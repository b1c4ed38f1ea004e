//! # API Facade
//!
//! [`Assistant`] is the single entry point for running a command line. It owns
//! the store, the configuration and the command registry, and turns one raw
//! input line into a [`CmdResult`]:
//!
//! 1. resolve the phrase against the registry,
//! 2. collect the handler's parameters from the line, asking an [`ArgSource`]
//!    for anything missing,
//! 3. run the handler.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Terminal I/O**: no stdout, prompts or colors; see the CLI layer
//!
//! ## Generic Over DataStore
//!
//! `Assistant<S: DataStore>` runs on `FileStore` in production and on
//! `InMemoryStore` in tests.

use crate::commands::{ArgSource, Args, CmdMessage, CmdResult, Context, Registry, Resolver};
use crate::config::AssistantConfig;
use crate::error::{user_message, Result};
use crate::store::DataStore;
use chrono::{Local, NaiveDate};

pub struct Assistant<S: DataStore> {
    registry: Registry<S>,
    store: S,
    config: AssistantConfig,
    today: Option<NaiveDate>,
}

impl<S: DataStore> Assistant<S> {
    pub fn new(store: S, config: AssistantConfig) -> Self {
        Self {
            registry: Registry::standard(),
            store,
            config,
            today: None,
        }
    }

    /// Pins the date used for birthday calculations.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn registry(&self) -> &Registry<S> {
        &self.registry
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolves and runs one input line.
    pub fn execute(&mut self, line: &str, source: &mut dyn ArgSource) -> Result<CmdResult> {
        let resolver =
            Resolver::new(&self.registry).with_threshold(self.config.suggestion_threshold);
        let resolved = resolver.resolve(line)?;
        let args = Args::collect(resolved.spec.params, &resolved.args, source)?;

        let mut ctx = Context {
            store: &mut self.store,
            config: &self.config,
            registry: &self.registry,
            today: self.today.unwrap_or_else(|| Local::now().date_naive()),
        };
        log::debug!("running '{}'", resolved.phrase);
        (resolved.spec.handler)(&mut ctx, &args)
    }

    /// Like [`Assistant::execute`], but a failure becomes an error message.
    pub fn run_line(&mut self, line: &str, source: &mut dyn ArgSource) -> CmdResult {
        match self.execute(line, source) {
            Ok(result) => result,
            Err(e) => CmdResult::default().with_message(CmdMessage::error(user_message(&e))),
        }
    }
}
