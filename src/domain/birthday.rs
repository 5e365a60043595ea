//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual format birthdays are parsed from and rendered to.
pub(crate) const DATE_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for a contact's birthday.
///
/// Parsed from the fixed `DD.MM.YYYY` format and stored as a structured
/// calendar date, so leap years and month lengths are handled by real
/// calendar semantics rather than string checks.
///
/// # Example
///
/// ```
/// use abook_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("24.06.1998").unwrap();
/// assert_eq!(birthday.to_string(), "24.06.1998");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a Birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when the input does not
    /// match the format or names a date that does not exist (month 13,
    /// Feb 30, and so on).
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
            Ok(date) => Ok(Self(date)),
            Err(_) => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

// Serde support - serialize as the canonical DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("13.01.2024").unwrap();
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(2024, 1, 13).unwrap()
        );
    }

    #[test]
    fn test_birthday_round_trip() {
        for raw in ["01.01.2000", "13.01.2024", "31.12.1987", "29.02.2024"] {
            let birthday = Birthday::new(raw).unwrap();
            assert_eq!(birthday.to_string(), raw);
        }
    }

    #[test]
    fn test_birthday_rejects_malformed() {
        // Wrong separators
        assert!(Birthday::new("13/01/2024").is_err());
        assert!(Birthday::new("13-01-2024").is_err());
        assert!(Birthday::new("1301.2024").is_err());
        // Wrong field order for this format (no 13th month)
        assert!(Birthday::new("2024.01.13").is_err());
        // Out-of-range components
        assert!(Birthday::new("32.01.2024").is_err());
        assert!(Birthday::new("13.13.2024").is_err());
        assert!(Birthday::new("31.02.2000").is_err());
        // Non-numeric and junk
        assert!(Birthday::new("xx.01.2024").is_err());
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("13.01.2024 extra").is_err());
    }

    #[test]
    fn test_birthday_leap_day() {
        // Feb 29 exists only in leap years
        assert!(Birthday::new("29.02.2024").is_ok());
        assert!(Birthday::new("29.02.2023").is_err());
    }

    #[test]
    fn test_birthday_error_carries_input() {
        let err = Birthday::new("bogus").unwrap_err();
        assert_eq!(err, ValidationError::InvalidBirthday("bogus".to_string()));
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("05.03.1990").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"05.03.1990\"");
    }

    #[test]
    fn test_birthday_deserialization() {
        let birthday: Birthday = serde_json::from_str("\"05.03.1990\"").unwrap();
        assert_eq!(birthday.to_string(), "05.03.1990");
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"1990-03-05\"");
        assert!(result.is_err());
    }
}
