//! # Ostap Architecture
//!
//! Ostap is a console assistant that keeps an address book and a notebook.
//! The library does all the work; the binary is a small read-eval-print loop
//! around it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Prompt loop, colored output, paging, screen clearing     │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Resolves a line to a command, collects its arguments     │
//! │  - Turns every error into an operator message               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/)                                  │
//! │  - Registry, resolver with "did you mean" suggestions       │
//! │  - One handler per command, returning a CmdResult           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model + Storage (model/, store/)                           │
//! │  - Validated fields, Contact, Note                          │
//! │  - RecordStore with pagination, DataStore backends          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the Core
//!
//! From `api.rs` inward, code never writes to stdout or reads from stdin.
//! Arguments a command needs but the line did not carry are requested through
//! the [`commands::ArgSource`] trait, which the CLI implements with a terminal
//! prompt and tests implement with a scripted list of answers.
//!
//! ## Testing Strategy
//!
//! 1. **Model, store, validators**: unit tests next to the code.
//! 2. **Commands**: handler tests against `InMemoryStore` with a fixed date.
//! 3. **API**: dispatch, prompting and error translation.
//! 4. **Binary**: `tests/` drives the real executable over stdin.
//!
//! ## Module Overview
//!
//! - **[`api`]**: The [`api::Assistant`] facade
//! - **[`commands`]**: Registry, resolver, argument collection, handlers
//! - **[`config`]**: `config.json` settings and the data directory
//! - **[`error`]**: [`error::OstapError`] and the operator message mapping
//! - **[`model`]**: Contact, Note and their validated fields
//! - **[`sorter`]**: The `sort files` folder sorter
//! - **[`store`]**: Record collections and their persistence
//! - **[`validate`]**: Phone, date and email predicates

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod sorter;
pub mod store;
pub mod validate;
