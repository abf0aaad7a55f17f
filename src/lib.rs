//! Contact Book - an in-memory address book of validated contact records.
//!
//! Records hold a display name, an ordered list of phone numbers and an
//! optional birthday. The [`AddressBook`] keys records by name and supports
//! lookup, search by name or phone, and iteration in insertion order.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (name, phone, birthday)
//! - **models**: The contact record
//! - **book**: The keyed address book and its iterators
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use book::{AddressBook, EditOutcome, Paged, Records};
pub use config::Config;
pub use domain::{Birthday, Field, FieldKind, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::Record;
