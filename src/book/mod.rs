//! Address book storage and the upcoming birthdays report.
//!
//! [`AddressBook`] owns every [`Record`] and is the only way to reach one.
//! Records are kept in insertion order and looked up by exact name.

pub mod upcoming;

use crate::models::Record;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use upcoming::{adjust_for_weekend, anchor_in_year};
pub use upcoming::UpcomingBirthday;

/// An in-memory collection of contact records keyed by name.
///
/// Names are unique: storing a record under an existing name replaces the
/// old record in place, so listing order never changes on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Store `record` under its name.
    ///
    /// A record with the same name is replaced in place; a new name is
    /// appended at the end.
    pub fn add_record(&mut self, record: Record) {
        match self.records.iter_mut().find(|r| r.name() == record.name()) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Look up a record by exact name, mutably.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove the record stored under `name`.
    ///
    /// Deleting an absent name is a no-op. Later records shift up, so a
    /// re-added name lands at the end of the listing.
    pub fn delete(&mut self, name: &str) {
        self.records.retain(|r| r.name().as_str() != name);
    }

    /// Collect the contacts whose next birthday falls within `window_days`
    /// of `today`, inclusive on both ends.
    ///
    /// Each hit's congratulation date is the anniversary itself, or the
    /// following Monday when the anniversary lands on a weekend. Results
    /// keep the book's insertion order. `today` is passed in rather than
    /// read from the clock so callers (and tests) control the reference
    /// date.
    pub fn upcoming_birthdays(&self, window_days: i64, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();
        for record in &self.records {
            let Some(birthday) = record.birthday() else {
                continue;
            };
            let mut next = anchor_in_year(birthday, today.year());
            if next < today {
                next = anchor_in_year(birthday, today.year() + 1);
            }
            let days_until = (next - today).num_days();
            if (0..=window_days).contains(&days_until) {
                upcoming.push(UpcomingBirthday {
                    name: record.name().clone(),
                    congratulation_date: adjust_for_weekend(next),
                });
            }
        }
        upcoming
    }
}

impl fmt::Display for AddressBook {
    /// One block per record, `Name:` and comma-separated `Phones:` lines,
    /// blocks separated by a blank line. An empty book prints
    /// `AddressBook is empty.`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return write!(f, "AddressBook is empty.");
        }
        let blocks = self
            .records
            .iter()
            .map(|record| {
                let phones = record
                    .phones()
                    .iter()
                    .map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("Name: {}\nPhones: {}", record.name(), phones)
            })
            .collect::<Vec<_>>()
            .join("\n\n");
        write!(f, "{}", blocks)
    }
}
