//! Record model representing one person in the address book.

use crate::domain::{Birthday, Field, Name, Phone};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact: a name, an ordered list of phones and an optional birthday.
///
/// Phones are not deduplicated; adding the same number twice stores it twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for `name`.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Parse `name` and create an empty record for it.
    pub fn with_name(name: &str) -> BookResult<Self> {
        Ok(Self::new(Name::parse(name)?))
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list.
    pub fn add_phone(&mut self, raw: &str) -> BookResult<()> {
        let phone = Phone::parse(raw)?;
        tracing::debug!(name = %self.name, phone = %phone, "Phone added");
        self.phones.push(phone);
        Ok(())
    }

    /// First phone whose value equals `raw`, if any.
    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    fn position_of(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == raw)
    }

    /// Remove the first phone equal to `raw`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if no phone matches.
    pub fn remove_phone(&mut self, raw: &str) -> BookResult<Phone> {
        let index = self
            .position_of(raw)
            .ok_or_else(|| BookError::phone_not_found(raw))?;
        tracing::debug!(name = %self.name, phone = raw, "Phone removed");
        Ok(self.phones.remove(index))
    }

    /// Replace `old_raw` with `new_raw` in place, keeping its position.
    ///
    /// Either both lookups and validation succeed and the phone is replaced,
    /// or the record is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if `old_raw` is absent, or
    /// `BookError::Validation` if `new_raw` is not a valid phone.
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> BookResult<()> {
        let index = self
            .position_of(old_raw)
            .ok_or_else(|| BookError::phone_not_found(old_raw))?;
        let replacement = Phone::parse(new_raw)?;
        tracing::debug!(
            name = %self.name,
            old = old_raw,
            new = %replacement,
            "Phone edited"
        );
        self.phones[index] = replacement;
        Ok(())
    }

    /// Validate `raw` and make it this record's birthday, replacing any previous one.
    pub fn add_birthday(&mut self, raw: &str) -> BookResult<()> {
        let birthday = Birthday::parse(raw)?;
        tracing::debug!(name = %self.name, birthday = %birthday, "Birthday set");
        self.birthday = Some(birthday);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let birthday = self.birthday.as_ref().map_or("No birthday", Birthday::as_str);
        write!(
            f,
            "Name: {}, Phones: {}, Birthday: {}",
            self.name, phones, birthday
        )
    }
}
