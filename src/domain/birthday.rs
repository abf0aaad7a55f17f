//! Birthday field kind.

use super::errors::ValidationError;
use super::field::{Field, FieldKind};
use crate::error::{BookError, BookResult};
use chrono::{Datelike, NaiveDate};
use std::str::FromStr;

/// Marker kind for birthdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayKind;

/// A contact's date of birth.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday: Birthday = "1990-05-17".parse().unwrap();
/// assert_eq!(birthday.month(), 5);
/// assert_eq!(birthday.day(), 17);
/// ```
pub type Birthday = Field<BirthdayKind>;

impl FieldKind for BirthdayKind {
    type Value = NaiveDate;
    const LABEL: &'static str = "birthday";

    fn validate(birthday: &NaiveDate) -> Result<(), ValidationError> {
        if !is_valid(birthday) {
            return Err(ValidationError::InvalidBirthday(birthday.to_string()));
        }
        Ok(())
    }
}

/// Birthday range rule. All dates are accepted for now.
fn is_valid(_birthday: &NaiveDate) -> bool {
    true
}

impl Field<BirthdayKind> {
    /// Month of the stored date, 1-based.
    pub fn month(&self) -> u32 {
        self.value().month()
    }

    /// Day of month of the stored date, 1-based.
    pub fn day(&self) -> u32 {
        self.value().day()
    }

    /// The date this birthday falls on in `year`.
    ///
    /// February 29 falls on February 28 in non-leap years. Returns `None`
    /// only when `year` is outside chrono's supported range.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month(), self.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }

    /// Days from `today` until the next occurrence on or after `today`.
    ///
    /// Returns 0 when `today` is the birthday.
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        let mut next = self.occurrence_in(today.year())?;
        if next < today {
            next = self.occurrence_in(today.year() + 1)?;
        }
        Some((next - today).num_days())
    }
}

impl FromStr for Field<BirthdayKind> {
    type Err = BookError;

    /// Parse a `YYYY-MM-DD` date and run the birthday hook on it.
    fn from_str(s: &str) -> BookResult<Self> {
        let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| {
            BookError::InvalidArgument(format!("birthday must be YYYY-MM-DD, got '{}': {}", s, e))
        })?;
        Ok(Self::new(date)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_month_and_day() {
        let birthday = Birthday::new(date(1990, 5, 17)).unwrap();
        assert_eq!(birthday.month(), 5);
        assert_eq!(birthday.day(), 17);
    }

    #[test]
    fn test_days_until_today_is_zero() {
        let birthday = Birthday::new(date(1990, 5, 17)).unwrap();
        assert_eq!(birthday.days_until(date(2024, 5, 17)), Some(0));
    }

    #[test]
    fn test_days_until_later_this_year() {
        let birthday = Birthday::new(date(1990, 5, 17)).unwrap();
        assert_eq!(birthday.days_until(date(2024, 5, 10)), Some(7));
    }

    #[test]
    fn test_days_until_rolls_to_next_year() {
        let birthday = Birthday::new(date(1990, 5, 17)).unwrap();
        assert_eq!(birthday.days_until(date(2024, 5, 18)), Some(364));

        let new_years_eve = Birthday::new(date(1985, 12, 31)).unwrap();
        assert_eq!(new_years_eve.days_until(date(2023, 1, 1)), Some(364));
    }

    #[test]
    fn test_leap_day_birthday() {
        let birthday = Birthday::new(date(2000, 2, 29)).unwrap();
        assert_eq!(birthday.occurrence_in(2023), Some(date(2023, 2, 28)));
        assert_eq!(birthday.occurrence_in(2024), Some(date(2024, 2, 29)));

        assert_eq!(birthday.days_until(date(2023, 2, 1)), Some(27));
        assert_eq!(birthday.days_until(date(2023, 2, 28)), Some(0));
        assert_eq!(birthday.days_until(date(2023, 3, 1)), Some(365));
    }

    #[test]
    fn test_birthday_from_str() {
        let birthday: Birthday = "1990-05-17".parse().unwrap();
        assert_eq!(*birthday.value(), date(1990, 5, 17));
    }

    #[test]
    fn test_birthday_from_str_malformed() {
        let result = "17/05/1990".parse::<Birthday>();
        assert!(matches!(result, Err(BookError::InvalidArgument(_))));
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new(date(1990, 5, 17)).unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"1990-05-17\"");

        let back: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);
    }
}
