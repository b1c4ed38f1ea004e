//! # CLI Layer
//!
//! The terminal client around [`ostap::api::Assistant`]. This is the only
//! place that reads stdin, writes stdout, clears the screen or pages output.
//!
//! - `repl`: the prompt loop and the terminal [`ArgSource`](ostap::commands::ArgSource)
//! - `print`: turns a `CmdResult` into colored text

pub mod print;
pub mod repl;

pub use repl::Console;
