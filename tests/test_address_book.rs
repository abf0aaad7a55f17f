//! Address book behavior: storage, edits, searches and iteration.

mod fixtures;

use contact_book::{AddressBook, BookError, EditOutcome};
use fixtures::*;

#[test]
fn test_edit_phone_scenario() {
    let mut book = book_with_ann();

    let ann = book.get_mut("Ann").unwrap();
    ann.edit_phone("111", "999").unwrap();
    assert_eq!(phone_values(ann), vec!["999", "222"]);

    // Editing a phone the record does not hold changes nothing and is not an error
    ann.edit_phone("000", "123").unwrap();
    assert_eq!(phone_values(ann), vec!["999", "222"]);
}

#[test]
fn test_duplicate_name_overwrites() {
    let mut book = AddressBook::new();
    book.add_record("Ann", &["111"], None).unwrap();
    book.add_record("Ann", &["222"], Some(date(1990, 5, 17))).unwrap();

    assert_eq!(book.len(), 1);
    let ann = book.get("Ann").unwrap();
    assert_eq!(phone_values(ann), vec!["222"]);
    assert!(book.find_records_by_phone("111").is_empty());
}

#[test]
fn test_delete_missing_record_fails() {
    let mut book = book_with_ann();
    let err = book.delete_record("Bob").unwrap_err();
    assert_eq!(err, BookError::NotFound("record Bob".to_string()));
    assert_eq!(book.len(), 1);
}

#[test]
fn test_edit_missing_record_reports_not_found() {
    let mut book = book_with_ann();

    let outcome = book
        .edit_record("Bob", Some("Robert"), Some(&["333"][..]))
        .unwrap();
    assert_eq!(outcome, EditOutcome::NotFound("Bob".to_string()));
    assert_eq!(outcome.to_string(), "Bob Name not found");

    assert_eq!(book.len(), 1);
    assert!(!book.contains("Bob"));
    assert!(book.find_records_by_name("Robert").is_empty());
}

#[test]
fn test_edit_record_rename_keeps_old_key() {
    let mut book = book_with_ann();

    let outcome = book.edit_record("Ann", Some("Anna"), None).unwrap();
    assert_eq!(outcome, EditOutcome::Updated);

    // Still stored under the old key, but the record now carries the new name
    let record = book.get("Ann").unwrap();
    assert_eq!(record.name().as_str(), "Anna");
    assert!(book.get("Anna").is_none());

    assert_eq!(book.find_records_by_name("Anna").len(), 1);
    assert!(book.find_records_by_name("Ann").is_empty());
}

#[test]
fn test_edit_record_replaces_phones() {
    let mut book = book_with_ann();

    let outcome = book.edit_record("Ann", None, Some(&["333"][..])).unwrap();
    assert_eq!(outcome, EditOutcome::Updated);
    assert_eq!(phone_values(book.get("Ann").unwrap()), vec!["333"]);
}

#[test]
fn test_edit_record_empty_inputs_change_nothing() {
    let mut book = book_with_ann();

    let outcome = book.edit_record("Ann", Some(""), Some(&[][..])).unwrap();
    assert_eq!(outcome, EditOutcome::Updated);

    let ann = book.get("Ann").unwrap();
    assert_eq!(ann.name().as_str(), "Ann");
    assert_eq!(phone_values(ann), vec!["111", "222"]);
}

#[test]
fn test_find_records_by_phone_no_match() {
    let book = book_with_ann();
    assert!(book.find_records_by_phone("555").is_empty());
}

#[test]
fn test_find_records_by_phone_lists_each_record_once() {
    let mut book = book_with_ann();
    book.add_record("Bob", &["555", "555"], None).unwrap();
    book.add_record("Cid", &["555"], None).unwrap();

    let names: Vec<&str> = book
        .find_records_by_phone("555")
        .into_iter()
        .map(|r| r.name().as_str())
        .collect();
    assert_eq!(names, vec!["Bob", "Cid"]);
}

#[test]
fn test_find_records_by_name_is_exact() {
    let mut book = book_with_ann();
    book.add_record("Annabel", &[], None).unwrap();

    let found = book.find_records_by_name("Ann");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name().as_str(), "Ann");
    assert!(book.find_records_by_name("ann").is_empty());
}

#[test]
fn test_iteration_follows_insertion_order() {
    let mut book = AddressBook::new();
    for name in ["Zed", "Ann", "Mia"] {
        book.add_record(name, &[], None).unwrap();
    }

    let names: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
    assert_eq!(names, vec!["Zed", "Ann", "Mia"]);
}

#[test]
fn test_iteration_is_restartable_and_independent() {
    let book = book_with_contacts(3);

    let mut first = book.iter();
    let mut second = book.iter();
    assert_eq!(first.next().unwrap().name().as_str(), "Contact 0");
    assert_eq!(first.next().unwrap().name().as_str(), "Contact 1");

    // A second iterator starts from the beginning regardless of the first
    assert_eq!(second.next().unwrap().name().as_str(), "Contact 0");
    assert_eq!(first.next().unwrap().name().as_str(), "Contact 2");
    assert!(first.next().is_none());
    assert!(first.next().is_none());

    assert_eq!(book.iter().count(), 3);
}

#[test]
fn test_paged_iteration_yields_single_records() {
    let book = book_with_contacts(5);

    let paged = book.iter_paged(2);
    assert_eq!(paged.page_size(), 2);

    let names: Vec<&str> = paged.map(|r| r.name().as_str()).collect();
    assert_eq!(
        names,
        vec!["Contact 0", "Contact 1", "Contact 2", "Contact 3", "Contact 4"]
    );
}

#[test]
fn test_days_to_birthday_through_book() {
    let mut book = AddressBook::new();
    book.add_record("Ann", &[], Some(date(1990, 5, 17))).unwrap();
    book.add_record("Bob", &[], None).unwrap();

    let today = date(2024, 5, 17);
    assert_eq!(book.get("Ann").unwrap().days_to_birthday_from(today), Some(0));
    assert_eq!(book.get("Bob").unwrap().days_to_birthday_from(today), None);
}
