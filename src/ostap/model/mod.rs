//! Core data types: typed, validated fields and the two entities built from them.
//!
//! A [`Contact`] is keyed by its [`Name`]; a [`Note`] by its id. Both are only
//! ever constructed from already-validated parts, so a value held in memory is
//! always syntactically valid.

pub mod contact;
pub mod fields;
pub mod note;

pub use contact::{Contact, PhoneStatus};
pub use fields::{Address, Birthday, Email, Name, Phone};
pub use note::Note;
