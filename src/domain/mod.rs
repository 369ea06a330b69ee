//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields a contact record
//! holds: its name, its phone numbers and its birthday. Each wrapper validates
//! at construction time so invalid data can never be represented in a record.

/// Serialize/deserialize a field as its raw string, re-validating on the way in.
macro_rules! string_field_serde {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize($crate::domain::Field::as_str(self), serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                <$ty as $crate::domain::Field>::parse(s).map_err(serde::de::Error::custom)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::domain::Field::as_str(self))
            }
        }
    };
}

pub(crate) use string_field_serde;

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Name {}
    impl Sealed for super::Phone {}
    impl Sealed for super::Birthday {}
}

/// A single validated scalar value held by a record.
///
/// Implemented only by [`Name`], [`Phone`] and [`Birthday`].
pub trait Field: sealed::Sealed + Sized {
    /// Validate `raw` and wrap it, or report which rule it broke.
    fn parse(raw: impl Into<String>) -> Result<Self, ValidationError>;

    /// The raw value exactly as it was entered.
    fn as_str(&self) -> &str;
}
