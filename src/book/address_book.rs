//! Keyed collection of contact records.

use super::iter::{Paged, Records};
use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::NaiveDate;
use indexmap::IndexMap;
use std::fmt;
use tracing::{debug, trace};

/// Result of [`AddressBook::edit_record`].
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The record existed and the edits were applied.
    Updated,
    /// No record is stored under the given name; nothing changed.
    NotFound(String),
}

impl fmt::Display for EditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Updated => write!(f, "Record updated"),
            Self::NotFound(name) => write!(f, "{} Name not found", name),
        }
    }
}

/// An in-memory address book mapping contact names to records.
///
/// Keys keep their insertion order. Storing a record under an existing name
/// replaces the old record, which keeps the original position.
///
/// The book does no locking of its own; share it across threads behind a
/// single lock around the whole book.
///
/// # Example
///
/// ```
/// use contact_book::AddressBook;
///
/// let mut book = AddressBook::new();
/// book.add_record("Ann", &["111", "222"], None).unwrap();
///
/// let found = book.find_records_by_phone("222");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].name().as_str(), "Ann");
/// ```
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
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

    /// Whether a record is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Record stored under `name`.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable access to the record stored under `name`.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Build a record and store it under `name`.
    ///
    /// Any record already stored under `name` is replaced and lost.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` if any field is rejected; the book is
    /// left unchanged.
    pub fn add_record(
        &mut self,
        name: &str,
        phones: &[&str],
        birthday: Option<NaiveDate>,
    ) -> BookResult<()> {
        let mut record = Record::new(name, None, birthday)?;
        for phone in phones {
            record.add_phone(phone)?;
        }
        self.insert(name.to_string(), record);
        Ok(())
    }

    /// Store an existing record under its own name, replacing any previous one.
    pub fn add(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        self.insert(key, record);
    }

    fn insert(&mut self, key: String, record: Record) {
        // An existing key keeps its position.
        let (index, replaced) = self.records.insert_full(key.clone(), record);
        if replaced.is_some() {
            debug!(name = %key, index, "Replaced existing record");
        } else {
            debug!(name = %key, index, "Added record");
        }
    }

    /// Remove and return the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if no record is stored under `name`.
    pub fn delete_record(&mut self, name: &str) -> BookResult<Record> {
        let record = self
            .records
            .shift_remove(name)
            .ok_or_else(|| BookError::NotFound(format!("record {}", name)))?;
        debug!(name = %name, "Deleted record");
        Ok(record)
    }

    /// Rename a record and/or replace its phones.
    ///
    /// A missing `name` is reported as [`EditOutcome::NotFound`] rather than
    /// an error. The record stays stored under `name` after a rename. Empty
    /// `new_name` or `new_phones` leave that part untouched.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` if the new name or any new phone is
    /// rejected; the record is left unchanged.
    pub fn edit_record(
        &mut self,
        name: &str,
        new_name: Option<&str>,
        new_phones: Option<&[&str]>,
    ) -> BookResult<EditOutcome> {
        let Some(record) = self.records.get_mut(name) else {
            debug!(name = %name, "Edit skipped, no such record");
            return Ok(EditOutcome::NotFound(name.to_string()));
        };

        let mut edited = record.clone();
        if let Some(new_name) = new_name.filter(|n| !n.is_empty()) {
            edited.rename(new_name)?;
        }
        if let Some(new_phones) = new_phones.filter(|p| !p.is_empty()) {
            edited.replace_phones(new_phones)?;
        }
        *record = edited;

        debug!(
            name = %name,
            renamed = new_name.is_some_and(|n| !n.is_empty()),
            "Edited record"
        );
        Ok(EditOutcome::Updated)
    }

    /// Records whose name equals `name`, in key order.
    pub fn find_records_by_name(&self, name: &str) -> Vec<&Record> {
        let results: Vec<&Record> = self
            .iter()
            .filter(|record| record.name().as_str() == name)
            .collect();
        trace!(name = %name, result_count = results.len(), "Searched by name");
        results
    }

    /// Records holding `phone` among their phones, each listed once.
    pub fn find_records_by_phone(&self, phone: &str) -> Vec<&Record> {
        let results: Vec<&Record> = self
            .iter()
            .filter(|record| record.has_phone(phone))
            .collect();
        trace!(phone = %phone, result_count = results.len(), "Searched by phone");
        results
    }

    /// Iterate over all records in key insertion order.
    pub fn iter(&self) -> Records<'_> {
        Records::new(self.records.values())
    }

    /// Iterate over all records for pages of `page_size`.
    ///
    /// Records are still yielded one at a time.
    pub fn iter_paged(&self, page_size: usize) -> Paged<'_> {
        Paged::new(self.iter(), page_size)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = Records<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
