//! Phone field kind.

use super::errors::ValidationError;
use super::field::{Field, FieldKind};

/// Marker kind for phone numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneKind;

/// A phone number attached to a record.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new("+1-555-1234").unwrap();
/// assert_eq!(phone.as_str(), "+1-555-1234");
/// ```
pub type Phone = Field<PhoneKind>;

impl FieldKind for PhoneKind {
    type Value = String;
    const LABEL: &'static str = "phone";

    fn validate(phone: &String) -> Result<(), ValidationError> {
        if !is_valid(phone) {
            return Err(ValidationError::InvalidPhone(phone.clone()));
        }
        Ok(())
    }
}

/// Phone format rule.
///
/// Every number is accepted for now; format checks belong here.
fn is_valid(_phone: &str) -> bool {
    true
}

impl Field<PhoneKind> {
    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        self.value()
    }
}
