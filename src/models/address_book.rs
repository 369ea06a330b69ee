//! The address book: every record, keyed by name.

use super::record::Record;
use crate::domain::birthday::DATE_FORMAT;
use crate::domain::Field;
use crate::error::{BookError, BookResult};
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Number of days after today (inclusive) that count as "upcoming".
pub const LOOKAHEAD_DAYS: i64 = 7;

/// Mapping from name to record that remembers insertion order.
///
/// Lookups go through the map; "list all" and the birthday query walk the
/// insertion order. A record is always stored under its own name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

/// One entry of the upcoming-birthdays report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// Day to send greetings, already moved off the weekend
    pub greeting_date: NaiveDate,
}

impl UpcomingBirthday {
    /// Greeting date as `DD.MM.YYYY`.
    pub fn formatted_date(&self) -> String {
        self.greeting_date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.formatted_date())
    }
}

/// Result of the upcoming-birthdays query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BirthdayReport {
    /// At least one birthday falls in the window, in address book order
    Upcoming(Vec<UpcomingBirthday>),

    /// Nobody has a birthday in the window
    NoneUpcoming,
}

impl fmt::Display for BirthdayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BirthdayReport::NoneUpcoming => write!(f, "No upcoming birthdays."),
            BirthdayReport::Upcoming(entries) => {
                write!(f, "Birthdays in next {} days:", LOOKAHEAD_DAYS)?;
                for entry in entries {
                    write!(f, "\n{}", entry)?;
                }
                Ok(())
            }
        }
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Store `record` under its name, replacing any record with the same name.
    ///
    /// A replaced record keeps its original position in the listing order.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_some() {
            tracing::debug!(name = %key, "Record replaced");
        } else {
            tracing::debug!(name = %key, "Record added");
            self.order.push(key);
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if there is no such record.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| BookError::record_not_found(name))?;
        self.order.retain(|key| key != name);
        tracing::debug!(name = %name, "Record deleted");
        Ok(record)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Birthdays in the next week, counted from the local calendar date.
    pub fn birthdays(&self) -> BirthdayReport {
        self.upcoming_birthdays(local_today())
    }

    /// Birthdays falling between `today` and `today + 7 days`, both inclusive.
    ///
    /// Each birthday is projected onto the current year, or onto next year if
    /// that day has already passed. Saturday and Sunday birthdays are greeted
    /// on the following Monday.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> BirthdayReport {
        let upcoming: Vec<UpcomingBirthday> = self
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?.date();
                let mut next = anniversary_in(birthday, today.year())?;
                if next < today {
                    next = anniversary_in(birthday, today.year() + 1)?;
                }

                let days_until = (next - today).num_days();
                if !(0..=LOOKAHEAD_DAYS).contains(&days_until) {
                    return None;
                }

                Some(UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    greeting_date: move_off_weekend(next),
                })
            })
            .collect();

        tracing::debug!(
            today = %today,
            count = upcoming.len(),
            "Upcoming birthdays computed"
        );

        if upcoming.is_empty() {
            BirthdayReport::NoneUpcoming
        } else {
            BirthdayReport::Upcoming(upcoming)
        }
    }
}

/// The current calendar date in the local time zone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// `date`'s month and day in `year`. 29 February becomes 1 March in common years.
fn anniversary_in(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

fn move_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Address book is empty.");
        }
        let lines = self.iter().map(Record::to_string).collect::<Vec<_>>();
        write!(f, "{}", lines.join("\n"))
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

// Serde support - an ordered list of records
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in records {
            if book.find(record.name().as_str()).is_some() {
                return Err(serde::de::Error::custom(format!(
                    "duplicate record for {}",
                    record.name()
                )));
            }
            book.add_record(record);
        }
        Ok(book)
    }
}
