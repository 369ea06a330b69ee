//! Birthday value object.

use super::errors::ValidationError;
use super::{string_field_serde, Field};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Display and parse format for birthdays and greeting dates.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

static DATE_SHAPE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("Failed to compile date regex"));

/// A birthday in `DD.MM.YYYY` form.
///
/// The raw string is kept verbatim for display; the parsed date is kept
/// alongside it for the upcoming-birthdays query.
///
/// # Example
///
/// ```
/// use contact_book::domain::{Birthday, Field};
///
/// let birthday = Birthday::parse("15.03.2020").unwrap();
/// assert_eq!(birthday.as_str(), "15.03.2020");
/// assert!(Birthday::parse("31.02.2024").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// The calendar date this birthday denotes.
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Field for Birthday {
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if `raw` is not two-digit day,
    /// two-digit month and four-digit year separated by dots, or if it names
    /// a day that does not exist (e.g. `31.02.2024`).
    fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if !DATE_SHAPE_REGEX.is_match(&raw) {
            return Err(ValidationError::InvalidBirthday(raw));
        }
        match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
            Ok(date) => Ok(Self { raw, date }),
            Err(_) => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    fn as_str(&self) -> &str {
        &self.raw
    }
}

string_field_serde!(Birthday);
