//! Validated single-value holders.
//!
//! A [`Field`] stores exactly one value and runs its kind's validation hook on
//! every write. Kinds are zero-sized markers implementing [`FieldKind`]; the
//! contact attributes ([`Name`](super::Name), [`Phone`](super::Phone),
//! [`Birthday`](super::Birthday)) are aliases over their own kinds, and the
//! plain [`TextField`], [`IntegerField`] and [`DateField`] accept anything.

use super::errors::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// A kind of field: the value type it stores and the hook gating writes.
pub trait FieldKind {
    /// The stored value type.
    type Value: Clone + PartialEq + Eq + fmt::Debug + fmt::Display;

    /// Short label used in debug output and error messages.
    const LABEL: &'static str;

    /// Validation hook, consulted on construction and on every `set_value`.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` when `value` must not be stored.
    fn validate(value: &Self::Value) -> Result<(), ValidationError>;
}

/// A validated value of kind `K`.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let mut phone = Phone::new("111").unwrap();
/// phone.set_value("999").unwrap();
/// assert_eq!(phone.value(), "999");
/// ```
pub struct Field<K: FieldKind> {
    value: K::Value,
    kind: PhantomData<K>,
}

impl<K: FieldKind> Field<K> {
    /// Create a field, running the kind's validation hook.
    ///
    /// # Errors
    ///
    /// Returns the hook's `ValidationError` if the value is rejected.
    pub fn new(value: impl Into<K::Value>) -> Result<Self, ValidationError> {
        let value = value.into();
        K::validate(&value)?;
        Ok(Self {
            value,
            kind: PhantomData,
        })
    }

    /// Get the stored value.
    pub fn value(&self) -> &K::Value {
        &self.value
    }

    /// Validate and overwrite the stored value.
    ///
    /// On rejection the previous value is kept.
    ///
    /// # Errors
    ///
    /// Returns the hook's `ValidationError` if the value is rejected.
    pub fn set_value(&mut self, value: impl Into<K::Value>) -> Result<(), ValidationError> {
        let value = value.into();
        K::validate(&value)?;
        self.value = value;
        Ok(())
    }

    /// Convert into the underlying value.
    pub fn into_value(self) -> K::Value {
        self.value
    }
}

impl<K: FieldKind> Clone for Field<K> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            kind: PhantomData,
        }
    }
}

impl<K: FieldKind> PartialEq for Field<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K: FieldKind> Eq for Field<K> {}

impl<K: FieldKind> fmt::Debug for Field<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", K::LABEL, self.value)
    }
}

// Display support
impl<K: FieldKind> fmt::Display for Field<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// Serde support - serialize as the bare value
impl<K> Serialize for Field<K>
where
    K: FieldKind,
    K::Value: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

// Serde support - deserialize through the validation hook
impl<'de, K> Deserialize<'de> for Field<K>
where
    K: FieldKind,
    K::Value: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = <K::Value as Deserialize<'de>>::deserialize(deserializer)?;
        Field::new(value).map_err(serde::de::Error::custom)
    }
}

/// Unvalidated text kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text;

impl FieldKind for Text {
    type Value = String;
    const LABEL: &'static str = "text";

    fn validate(_value: &String) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Unvalidated integer kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Integer;

impl FieldKind for Integer {
    type Value = i64;
    const LABEL: &'static str = "integer";

    fn validate(_value: &i64) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Unvalidated calendar date kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date;

impl FieldKind for Date {
    type Value = NaiveDate;
    const LABEL: &'static str = "date";

    fn validate(_value: &NaiveDate) -> Result<(), ValidationError> {
        Ok(())
    }
}

pub type TextField = Field<Text>;
pub type IntegerField = Field<Integer>;
pub type DateField = Field<Date>;
