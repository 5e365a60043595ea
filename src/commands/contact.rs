//! Handlers for the contact commands: `add`, `change`, `phone`, `all`.

use crate::book::AddressBook;
use crate::domain::ContactName;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;

/// `add NAME PHONE` — find-or-create the record for `NAME`, then append
/// `PHONE` to it.
///
/// Returns "Contact is added" when the record was created and
/// "Record is updated" when it already existed. The record is stored
/// before the phone is validated, so a malformed phone on a fresh name
/// still leaves the (phoneless) record in the book.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone, ..] = args else {
        return Err(CommandError::MissingArguments("a name and a phone"));
    };
    let message = if book.find(name).is_some() {
        "Record is updated"
    } else {
        book.add_record(Record::new(ContactName::new(*name)?));
        "Contact is added"
    };
    if let Some(record) = book.find_mut(name) {
        record.add_phone(*phone)?;
    }
    Ok(message.to_string())
}

/// `change NAME OLD NEW` — replace one phone on an existing contact.
///
/// An unknown name answers "Contact is not found"; an unknown old phone
/// propagates as a not-found error.
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old_phone, new_phone, ..] = args else {
        return Err(CommandError::MissingArguments("a name and two phones"));
    };
    match book.find_mut(name) {
        Some(record) => {
            record.edit_phone(old_phone, new_phone)?;
            Ok("Contact is changed.".to_string())
        }
        None => Ok("Contact is not found".to_string()),
    }
}

/// `phone NAME` — list the contact's phones, comma separated.
pub fn show_phone(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::MissingArguments("a name"));
    };
    match book.find(name) {
        Some(record) => Ok(record
            .phones()
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")),
        None => Ok("Contact is not found".to_string()),
    }
}

/// `all` — the full book rendering.
pub fn all_contacts(book: &AddressBook) -> CommandResult<String> {
    Ok(book.to_string())
}
