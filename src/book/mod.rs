//! The address book collection and its iterators.

mod address_book;
mod iter;

pub use address_book::{AddressBook, EditOutcome};
pub use iter::{Paged, Records};
