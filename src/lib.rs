//! Assistant bot - an interactive command-line address book.
//!
//! This library implements a small contact manager driven by typed
//! commands: validated names, phone numbers and birthdays, an in-memory
//! address book, and an upcoming-birthdays report that shifts weekend
//! anniversaries to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value types (name, phone, birthday)
//! - **models**: The contact record aggregate
//! - **book**: The address book collection and birthday report
//! - **commands**: Command vocabulary, handlers, and dispatch
//! - **error**: Custom error types and user-facing message translation
//! - **config**: Configuration management from environment variables
//! - **repl**: The interactive read-eval-print loop

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use book::{AddressBook, UpcomingBirthday};
pub use commands::Command;
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError};
pub use models::Record;
