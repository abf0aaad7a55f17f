//! Test fixtures and sample data for address book tests.

use chrono::NaiveDate;
use contact_book::{AddressBook, Phone, Record};

/// Build a date, panicking on an invalid one.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// A book holding "Ann" with phones ["111", "222"].
#[allow(dead_code)]
pub fn book_with_ann() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record("Ann", &["111", "222"], None)
        .expect("fixture record is valid");
    book
}

/// A book with `count` records named "Contact 0", "Contact 1", ...
#[allow(dead_code)]
pub fn book_with_contacts(count: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..count {
        let name = format!("Contact {}", i);
        let phone = format!("555-{:04}", i);
        book.add_record(&name, &[phone.as_str()], None)
            .expect("fixture record is valid");
    }
    book
}

/// Phone values of a record, in order.
#[allow(dead_code)]
pub fn phone_values(record: &Record) -> Vec<&str> {
    record.phones().iter().map(Phone::as_str).collect()
}
