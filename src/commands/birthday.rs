//! Handlers for the birthday commands: `add-birthday`, `show-birthday`,
//! `birthdays`.

use crate::book::AddressBook;
use crate::error::{CommandError, CommandResult};
use chrono::NaiveDate;

/// `add-birthday NAME DD.MM.YYYY` — set (or replace) a contact's birthday.
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, date, ..] = args else {
        return Err(CommandError::MissingArguments("a name and a date"));
    };
    match book.find_mut(name) {
        Some(record) => {
            record.set_birthday(*date)?;
            Ok("Birthday is added".to_string())
        }
        None => Ok("Contact is not found".to_string()),
    }
}

/// `show-birthday NAME` — the contact's birthday as `DD.MM.YYYY`.
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::MissingArguments("a name"));
    };
    match book.find(name) {
        Some(record) => match record.birthday() {
            Some(birthday) => Ok(birthday.to_string()),
            None => Ok("Birthday for this contact is not added.".to_string()),
        },
        None => Ok("Contact is not found".to_string()),
    }
}

/// `birthdays` — one line per contact to congratulate within the window,
/// in book order.
pub fn upcoming_birthdays(
    book: &AddressBook,
    window_days: i64,
    today: NaiveDate,
) -> CommandResult<String> {
    let upcoming = book.upcoming_birthdays(window_days, today);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }
    Ok(upcoming
        .iter()
        .map(|row| row.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}
