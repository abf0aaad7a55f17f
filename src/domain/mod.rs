//! Domain value objects.
//!
//! Validated field types that make up a contact record. Every field runs its
//! kind's validation hook on construction and on every write, so an invalid
//! value can never be stored.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BirthdayKind};
pub use errors::ValidationError;
pub use field::{
    Date, DateField, Field, FieldKind, Integer, IntegerField, Text, TextField,
};
pub use name::{Name, NameKind};
pub use phone::{Phone, PhoneKind};
