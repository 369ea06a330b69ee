//! Phone value object.

use super::errors::ValidationError;
use super::{string_field_serde, Field};

/// A type-safe wrapper for phone numbers.
///
/// A phone number is exactly ten decimal digits. No formatting characters
/// are accepted and nothing is normalized: the stored value is the raw input.
///
/// # Example
///
/// ```
/// use contact_book::domain::{Field, Phone};
///
/// let phone = Phone::parse("1234567890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// assert!(Phone::parse("123-456-7890").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Number of digits a phone number must have.
    pub const LENGTH: usize = 10;

    fn is_valid(phone: &str) -> bool {
        phone.len() == Self::LENGTH && phone.bytes().all(|b| b.is_ascii_digit())
    }
}

impl Field for Phone {
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless `raw` is exactly ten digits.
    fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if !Self::is_valid(&raw) {
            return Err(ValidationError::InvalidPhone(raw));
        }
        Ok(Self(raw))
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

string_field_serde!(Phone);
