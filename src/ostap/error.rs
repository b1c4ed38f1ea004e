use thiserror::Error;

#[derive(Error, Debug)]
pub enum OstapError {
    #[error("Empty command")]
    EmptyCommand,

    #[error("Unknown command: {phrase}")]
    UnknownCommand {
        phrase: String,
        suggestion: Option<String>,
    },

    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Name is empty")]
    EmptyName,

    #[error("Phone {phone} not found for {name}")]
    PhoneNotFound { name: String, phone: String },

    #[error("Name not found: {0}")]
    NameNotFound(String),

    #[error("Note id not found: {0}")]
    NoteIdNotFound(String),

    #[error("Missing argument: {0}")]
    MissingArguments(String),

    #[error("No birthday set for {0}")]
    NoBirthday(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Not a valid number: {0}")]
    InvalidNumber(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, OstapError>;

/// Maps an error to the one-line message shown to the operator.
///
/// Every variant is handled here so that no raw error text or backtrace ever
/// reaches the prompt. Infrastructure failures collapse into a generic hint.
pub fn user_message(err: &OstapError) -> String {
    match err {
        OstapError::EmptyCommand => "Please enter a command name.".to_string(),
        OstapError::UnknownCommand {
            suggestion: Some(best),
            ..
        } => format!("Command not found.\nPerhaps you meant '{}'.", best),
        OstapError::UnknownCommand {
            suggestion: None, ..
        } => "Command not found.\nTo view all available commands, enter 'help'.".to_string(),
        OstapError::InvalidPhone(_) => {
            "You tried to enter an invalid phone number. Please check the value and try again."
                .to_string()
        }
        OstapError::InvalidDate(_) => {
            "Invalid date. Please enter birthday in format 'DD.MM.YYYY'.".to_string()
        }
        OstapError::InvalidEmail(_) => {
            "Invalid email address. Please enter a correct email address.".to_string()
        }
        OstapError::EmptyName => "Name is empty. Please try again.".to_string(),
        OstapError::PhoneNotFound { name, phone } => {
            format!("Phone number {} for user {} not found.", phone, name)
        }
        OstapError::NameNotFound(name) => format!(
            "Name {} doesn't exist. If you want to add it, please use 'add record'.",
            name
        ),
        OstapError::NoteIdNotFound(id) => {
            format!("Note {} not found. Please check the value and try again.", id)
        }
        OstapError::MissingArguments(what) => format!(
            "Enter all required arguments please ({} is missing).\nTo see more info type 'help'.",
            what
        ),
        OstapError::NoBirthday(name) => format!("No birthday for user {}.", name),
        OstapError::UnknownField(field) => {
            format!("Unknown field '{}'.\nTo see more info enter 'help'.", field)
        }
        OstapError::InvalidNumber(raw) => {
            format!("'{}' is not a valid number. Please input a positive number.", raw)
        }
        OstapError::Io(_) | OstapError::Serialization(_) | OstapError::Store(_) => {
            log::warn!("command failed: {}", err);
            "Something went wrong. Please check your input and try again.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_names_best_match() {
        let err = OstapError::UnknownCommand {
            phrase: "chagne".into(),
            suggestion: Some("change".into()),
        };
        assert!(user_message(&err).contains("Perhaps you meant 'change'"));
    }

    #[test]
    fn unknown_command_without_suggestion_points_at_help() {
        let err = OstapError::UnknownCommand {
            phrase: "zq".into(),
            suggestion: None,
        };
        assert!(user_message(&err).contains("'help'"));
    }

    #[test]
    fn infrastructure_errors_are_generic() {
        let err = OstapError::Store("disk on fire".into());
        let msg = user_message(&err);
        assert!(msg.contains("check your input"));
        assert!(!msg.contains("disk on fire"));
    }
}
