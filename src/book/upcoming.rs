//! Congratulation-date math for the upcoming birthdays report.

use crate::domain::birthday::DATE_FORMAT;
use crate::domain::{Birthday, ContactName};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::fmt;

/// One row of the upcoming birthdays report: who to congratulate and on
/// which date, after weekend adjustment.
#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingBirthday {
    pub name: ContactName,
    pub congratulation_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - congratulate on {}",
            self.name,
            self.congratulation_date.format(DATE_FORMAT)
        )
    }
}

/// Project `birthday` into `year`, keeping its day and month.
///
/// Feb 29 birthdays fall back to Feb 28 in non-leap years.
pub(crate) fn anchor_in_year(birthday: Birthday, year: i32) -> NaiveDate {
    let date = birthday.date();
    NaiveDate::from_ymd_opt(year, date.month(), date.day()).unwrap_or_else(|| {
        // Only Feb 29 can fail to land in another year.
        NaiveDate::from_ymd_opt(year, 2, 28).expect("Feb 28 exists in every year")
    })
}

/// Shift Saturday and Sunday dates to the following Monday; weekdays pass
/// through unchanged.
pub(crate) fn adjust_for_weekend(date: NaiveDate) -> NaiveDate {
    if date.weekday().num_days_from_monday() >= 5 {
        next_weekday(date, Weekday::Mon)
    } else {
        date
    }
}

/// The next occurrence of `target` strictly after `date`.
fn next_weekday(date: NaiveDate, target: Weekday) -> NaiveDate {
    let current = date.weekday().num_days_from_monday() as i64;
    let target = target.num_days_from_monday() as i64;
    let mut days_ahead = target - current;
    if days_ahead <= 0 {
        days_ahead += 7;
    }
    date + Duration::days(days_ahead)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_anchor_in_year_keeps_day_and_month() {
        let birthday = Birthday::new("12.01.1985").unwrap();
        assert_eq!(anchor_in_year(birthday, 2024), date(2024, 1, 12));
    }

    #[test]
    fn test_anchor_feb_29_in_leap_year() {
        let birthday = Birthday::new("29.02.2000").unwrap();
        assert_eq!(anchor_in_year(birthday, 2024), date(2024, 2, 29));
    }

    #[test]
    fn test_anchor_feb_29_falls_back_in_common_year() {
        let birthday = Birthday::new("29.02.2000").unwrap();
        assert_eq!(anchor_in_year(birthday, 2023), date(2023, 2, 28));
    }

    #[test]
    fn test_weekday_passes_through() {
        // 2024-01-12 is a Friday.
        assert_eq!(adjust_for_weekend(date(2024, 1, 12)), date(2024, 1, 12));
    }

    #[test]
    fn test_saturday_shifts_to_monday() {
        // 2024-01-13 is a Saturday.
        assert_eq!(adjust_for_weekend(date(2024, 1, 13)), date(2024, 1, 15));
    }

    #[test]
    fn test_sunday_shifts_to_monday() {
        // 2024-01-14 is a Sunday.
        assert_eq!(adjust_for_weekend(date(2024, 1, 14)), date(2024, 1, 15));
    }

    #[test]
    fn test_next_weekday_skips_a_full_week_from_same_day() {
        // 2024-01-15 is a Monday; the next Monday is a week out.
        assert_eq!(
            next_weekday(date(2024, 1, 15), Weekday::Mon),
            date(2024, 1, 22)
        );
    }

    #[test]
    fn test_display_format() {
        let row = UpcomingBirthday {
            name: ContactName::new("John").unwrap(),
            congratulation_date: date(2024, 1, 15),
        };
        assert_eq!(row.to_string(), "John - congratulate on 15.01.2024");
    }
}
