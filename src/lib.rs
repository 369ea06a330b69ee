//! Contact Book - a console contact manager.
//!
//! Stores named records (a person's name, zero or more phone numbers and an
//! optional birthday), validates every change, and reports whose birthday
//! falls within the next week, moving weekend dates to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated field value objects (name, phone, birthday)
//! - **models**: The record and the address book, including the birthday query
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Loading and saving the address book
//! - **commands**: Parsing user input and dispatching it to the address book
//! - **session**: The interactive read-reply loop

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod session;

pub use commands::{Assistant, Command, Reply};
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use models::{AddressBook, BirthdayReport, Record, UpcomingBirthday};
pub use repositories::{AddressBookRepository, JsonFileRepository};
