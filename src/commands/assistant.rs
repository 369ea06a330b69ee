//! The assistant: routes parsed commands to the address book and renders replies.

use super::command::Command;
use crate::domain::Field;
use crate::error::CommandResult;
use crate::models::{local_today, AddressBook, Record};
use chrono::NaiveDate;

/// What the session loop should do after a line was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep reading
    Text(String),
    /// Print the text, persist the book and stop
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Text(text) | Reply::Exit(text) => text,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Reply::Exit(_))
    }
}

fn text(s: impl Into<String>) -> CommandResult<Reply> {
    Ok(Reply::Text(s.into()))
}

const CONTACT_NOT_FOUND: &str = "Contact not found.";

/// Owns the address book for one session and answers commands against it.
pub struct Assistant {
    book: AddressBook,
    today: fn() -> NaiveDate,
}

impl Assistant {
    pub fn new(book: AddressBook) -> Self {
        Self {
            book,
            today: local_today,
        }
    }

    /// Use `today` instead of the local date for the `birthdays` command.
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// Parse and execute one line. Every failure becomes a one-line text reply.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match line.parse::<Command>().and_then(|cmd| self.execute(cmd)) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::debug!(error = %e, "Command failed");
                Reply::Text(e.to_string())
            }
        }
    }

    /// Run a parsed command against the address book.
    pub fn execute(&mut self, command: Command) -> CommandResult<Reply> {
        tracing::trace!(?command, "Executing command");
        match command {
            Command::Hello => text("How can I help you?"),
            Command::Add { name, phone } => self.add_contact(&name, &phone),
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => match self.book.find_mut(&name) {
                Some(record) => {
                    record.edit_phone(&old_phone, &new_phone)?;
                    text(format!("Contact updated {}.", name))
                }
                None => text(CONTACT_NOT_FOUND),
            },
            Command::Phone { name } => match self.book.find(&name) {
                Some(record) if record.phones().is_empty() => text("No phone numbers."),
                Some(record) => text(
                    record
                        .phones()
                        .iter()
                        .map(|p| p.as_str())
                        .collect::<Vec<_>>()
                        .join("\n"),
                ),
                None => text(CONTACT_NOT_FOUND),
            },
            Command::All => text(self.book.to_string()),
            Command::AddBirthday { name, birthday } => match self.book.find_mut(&name) {
                Some(record) => {
                    record.add_birthday(&birthday)?;
                    text(format!("Birthday added for {}: {}.", name, birthday))
                }
                None => text(CONTACT_NOT_FOUND),
            },
            Command::ShowBirthday { name } => match self.book.find(&name) {
                Some(record) => match record.birthday() {
                    Some(birthday) => text(birthday.as_str()),
                    None => text("Birthday not set."),
                },
                None => text(CONTACT_NOT_FOUND),
            },
            Command::Birthdays => {
                let report = self.book.upcoming_birthdays((self.today)());
                text(report.to_string())
            }
            Command::Delete { name } => {
                self.book.delete(&name)?;
                text("Contact deleted.")
            }
            Command::RemovePhone { name, phone } => match self.book.find_mut(&name) {
                Some(record) => {
                    record.remove_phone(&phone)?;
                    text("Phone removed.")
                }
                None => text(CONTACT_NOT_FOUND),
            },
            Command::Exit => Ok(Reply::Exit("Good bye!".to_string())),
        }
    }

    /// Add `phone` to the existing record for `name`, or create the record.
    ///
    /// `AddressBook::add_record` replaces same-named records, so an existing
    /// record must be looked up first and extended in place.
    fn add_contact(&mut self, name: &str, phone: &str) -> CommandResult<Reply> {
        if let Some(record) = self.book.find_mut(name) {
            record.add_phone(phone)?;
            return text("Contact updated.");
        }

        let mut record = Record::with_name(name)?;
        record.add_phone(phone)?;
        self.book.add_record(record);
        text("Contact added.")
    }
}
