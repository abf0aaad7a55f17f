//! Name field kind.

use super::errors::ValidationError;
use super::field::{Field, FieldKind};

/// Marker kind for contact display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameKind;

/// The display name of a record.
pub type Name = Field<NameKind>;

impl FieldKind for NameKind {
    type Value = String;
    const LABEL: &'static str = "name";

    fn validate(_name: &String) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Field<NameKind> {
    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        self.value()
    }
}
