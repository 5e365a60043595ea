//! Error types for the assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while operating on records and the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A supplied value failed domain validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The referenced phone number is not stored on the record
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),
}

/// Errors that can occur while executing a user command.
///
/// These are the three kinds the dispatch layer translates into fixed
/// user-facing messages; the original detail is logged, never shown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A record or book operation failed
    #[error(transparent)]
    Book(#[from] BookError),

    /// Too few arguments were supplied for the command
    #[error("Missing arguments: expected {0}")]
    MissingArguments(&'static str),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Book(BookError::Validation(err))
    }
}

impl CommandError {
    /// The fixed message shown to the user for this kind of error.
    ///
    /// Deliberately generic: validation detail is not surfaced, so the UI
    /// stays forgiving regardless of what exactly went wrong.
    pub fn user_message(&self) -> &'static str {
        match self {
            CommandError::Book(BookError::Validation(_)) => {
                "Enter correct arguments for this command please."
            }
            CommandError::Book(BookError::PhoneNotFound(_)) => {
                "Enter correct key for this command please."
            }
            CommandError::MissingArguments(_) => {
                "Enter correct index for this function please."
            }
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::PhoneNotFound("0501234567".to_string());
        assert_eq!(err.to_string(), "Phone number not found: 0501234567");

        let err = CommandError::MissingArguments("name phone");
        assert_eq!(err.to_string(), "Missing arguments: expected name phone");

        let err = ConfigError::InvalidValue {
            var: "ABOOK_BIRTHDAY_WINDOW_DAYS".to_string(),
            reason: "Must be a positive number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for ABOOK_BIRTHDAY_WINDOW_DAYS: Must be a positive number"
        );
    }

    #[test]
    fn test_validation_passes_through_transparently() {
        let err: CommandError = ValidationError::InvalidPhone("123".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Invalid phone number (must be 10 digits): 123"
        );
    }

    #[test]
    fn test_user_messages_are_the_three_fixed_strings() {
        let validation: CommandError = ValidationError::EmptyName.into();
        assert_eq!(
            validation.user_message(),
            "Enter correct arguments for this command please."
        );

        let not_found: CommandError = BookError::PhoneNotFound("0000000000".into()).into();
        assert_eq!(
            not_found.user_message(),
            "Enter correct key for this command please."
        );

        let missing = CommandError::MissingArguments("name");
        assert_eq!(
            missing.user_message(),
            "Enter correct index for this function please."
        );
    }
}
