//! Data models for the contact book.
//!
//! This module contains the record representing one person and the address
//! book that holds every record keyed by name.

pub mod address_book;
pub mod record;

pub use address_book::{
    local_today, AddressBook, BirthdayReport, UpcomingBirthday, LOOKAHEAD_DAYS,
};
pub use record::Record;
