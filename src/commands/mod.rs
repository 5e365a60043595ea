//! Command vocabulary and dispatch.
//!
//! [`Command`] names every verb the bot understands; [`execute`] runs one
//! against the book and always produces a printable reply. Handler errors
//! are translated to their generic user-facing message here, in one place,
//! so individual handlers stay free of presentation concerns.

pub mod birthday;
pub mod contact;

use crate::book::AddressBook;
use chrono::NaiveDate;
use std::str::FromStr;

/// A recognized user command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "close" | "exit" => Ok(Command::Exit),
            other => Err(format!("Unknown command: {}", other)),
        }
    }
}

/// Run `command` with `args` against `book` and return the reply text.
///
/// `window_days` bounds the `birthdays` report and `today` is its
/// reference date; both are passed in so callers control them (the REPL
/// uses the configured window and the current local date).
///
/// Never fails: handler errors are logged and collapsed to their generic
/// user message.
pub fn execute(
    command: Command,
    args: &[&str],
    book: &mut AddressBook,
    window_days: i64,
    today: NaiveDate,
) -> String {
    tracing::debug!("Executing {:?} with {} args", command, args.len());

    let result = match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add => contact::add_contact(args, book),
        Command::Change => contact::change_contact(args, book),
        Command::Phone => contact::show_phone(args, book),
        Command::All => contact::all_contacts(book),
        Command::AddBirthday => birthday::add_birthday(args, book),
        Command::ShowBirthday => birthday::show_birthday(args, book),
        Command::Birthdays => birthday::upcoming_birthdays(book, window_days, today),
        Command::Exit => Ok("Good bye!".to_string()),
    };
    match result {
        Ok(message) => message,
        Err(err) => {
            tracing::debug!("Command {:?} failed: {}", command, err);
            err.user_message().to_string()
        }
    }
}
