//! Record model representing one stored contact.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, an ordered list of phone numbers, and an
/// optional birthday.
///
/// Phones keep insertion order and may contain duplicates; no uniqueness
/// is enforced. The name is fixed at construction because the address
/// book uses it as the record's key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// The stored phone numbers, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The stored birthday, if one has been set.
    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Validate `raw` and append it to the phone list.
    ///
    /// Duplicates are allowed.
    ///
    /// # Errors
    ///
    /// Fails with a validation error when `raw` is not a 10-digit number.
    pub fn add_phone(&mut self, raw: impl Into<String>) -> BookResult<()> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Find the first stored phone whose digits match exactly.
    pub fn find_phone(&self, digits: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == digits)
    }

    /// Remove the first stored occurrence of `digits`, if any.
    ///
    /// Removing an absent phone is a no-op, not an error.
    pub fn remove_phone(&mut self, digits: &str) {
        if let Some(index) = self.phones.iter().position(|p| p.as_str() == digits) {
            self.phones.remove(index);
        }
    }

    /// Replace the phone `old` with `new`.
    ///
    /// The new number is validated and appended first, then one occurrence
    /// of the old number is removed, so `old == new` nets out unchanged.
    ///
    /// # Errors
    ///
    /// Fails with `BookError::PhoneNotFound` when `old` is not stored, and
    /// with a validation error when `new` is malformed (the phone list is
    /// left untouched in both cases).
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        if self.find_phone(old).is_none() {
            return Err(BookError::PhoneNotFound(old.to_string()));
        }
        self.add_phone(new)?;
        self.remove_phone(old);
        Ok(())
    }

    /// Parse `raw` as `DD.MM.YYYY` and store it, replacing any existing
    /// birthday — a record has at most one.
    ///
    /// # Errors
    ///
    /// Fails with a validation error when `raw` does not parse.
    pub fn set_birthday(&mut self, raw: impl Into<String>) -> BookResult<()> {
        let birthday = Birthday::new(raw)?;
        self.birthday = Some(birthday);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = match self.birthday {
            Some(b) => b.to_string(),
            None => "not added".to_string(),
        };
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}
