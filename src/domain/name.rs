//! Name value object.

use super::errors::ValidationError;
use super::{string_field_serde, Field};

/// A contact's name, used as the address book key.
///
/// # Example
///
/// ```
/// use contact_book::domain::{Field, Name};
///
/// let name = Name::parse("Alice").unwrap();
/// assert_eq!(name.as_str(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Field for Name {
    /// Any non-empty string is a valid name.
    fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(raw))
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

string_field_serde!(Name);
