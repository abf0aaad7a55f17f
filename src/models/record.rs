//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: one name, an ordered list of phones and an optional birthday.
///
/// Phones may repeat; lookups by value always act on the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with an optional first phone and birthday.
    ///
    /// An empty `phone` is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the name, phone or birthday is rejected.
    pub fn new(
        name: impl Into<String>,
        phone: Option<&str>,
        birthday: Option<NaiveDate>,
    ) -> Result<Self, ValidationError> {
        let mut record = Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: birthday.map(Birthday::new).transpose()?,
        };

        if let Some(phone) = phone.filter(|p| !p.is_empty()) {
            record.add_phone(phone)?;
        }

        Ok(record)
    }

    /// The record's name field.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The birthday field, if one is set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Overwrite the name in place.
    pub fn rename(&mut self, new_name: impl Into<String>) -> Result<(), ValidationError> {
        self.name.set_value(new_name)
    }

    /// Set or replace the birthday.
    pub fn set_birthday(&mut self, date: NaiveDate) -> Result<(), ValidationError> {
        match self.birthday.as_mut() {
            Some(birthday) => birthday.set_value(date),
            None => {
                self.birthday = Some(Birthday::new(date)?);
                Ok(())
            }
        }
    }

    /// Drop the birthday.
    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    /// Validate `phone` and append it.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Append an already validated phone.
    pub fn add_phone_field(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Remove the first phone equal to `phone` and return it.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if no phone matches.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<Phone> {
        let index = self
            .index_of_phone(phone)
            .ok_or_else(|| BookError::NotFound(format!("phone {}", phone)))?;
        Ok(self.phones.remove(index))
    }

    /// Remove the first phone whose value equals `phone`'s.
    pub fn remove_phone_field(&mut self, phone: &Phone) -> BookResult<Phone> {
        self.remove_phone(phone.as_str())
    }

    /// Position of the first phone equal to `phone`.
    pub fn index_of_phone(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }

    /// Whether any phone equals `phone`.
    pub fn has_phone(&self, phone: &str) -> bool {
        self.index_of_phone(phone).is_some()
    }

    /// Overwrite the first phone equal to `old_phone` with `new_phone`.
    ///
    /// Does nothing when no phone matches.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `new_phone` is rejected; the old value
    /// stays in place.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> Result<(), ValidationError> {
        if let Some(phone) = self.phones.iter_mut().find(|p| p.as_str() == old_phone) {
            phone.set_value(new_phone)?;
        }
        Ok(())
    }

    /// Replace every phone with `phones`.
    ///
    /// All new phones are validated before any old one is dropped.
    pub fn replace_phones<I, S>(&mut self, phones: I) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phones = phones
            .into_iter()
            .map(|p| Phone::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        self.phones = phones;
        Ok(())
    }

    /// Days until the next birthday, counted from the local date.
    ///
    /// `None` when no birthday is set.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday; 0 when `today` is the birthday.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref()?.days_until(today)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
