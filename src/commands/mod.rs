//! Command dispatcher.
//!
//! Turns a line of user text into a [`Command`] and runs it against the
//! address book through an [`Assistant`], which renders every outcome
//! (success or error) as a single reply string.

mod assistant;
mod command;

pub use assistant::{Assistant, Reply};
pub use command::Command;
