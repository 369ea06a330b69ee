//! The interactive session loop.
//!
//! Reads commands line by line, prints each reply, and saves the address book
//! when the user exits or input ends.

use crate::commands::Assistant;
use crate::error::CommandError;
use crate::repositories::AddressBookRepository;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

const PROMPT: &str = "Enter a command: ";

/// Run one session against `repository`, reading from `input` and writing to `output`.
///
/// End of input is treated like `exit`. The book is saved exactly once, after
/// the loop ends, even when the loop stopped on an I/O error. The loop error
/// takes precedence over a save error in the returned result.
pub fn run<R, W>(repository: &dyn AddressBookRepository, input: R, output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let book = repository
        .load()
        .context("Failed to load address book")?;
    let mut assistant = Assistant::new(book);

    let loop_result = converse(&mut assistant, input, output);
    if let Err(e) = &loop_result {
        tracing::error!(error = %format!("{:#}", e), "Session interrupted, saving before exit");
    }

    let save_result = repository
        .save(assistant.book())
        .context("Failed to save address book");

    loop_result.and(save_result)
}

/// Prompt, read and reply until `exit` or end of input.
fn converse<R, W>(assistant: &mut Assistant, mut input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Welcome to the assistant bot!")?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("Failed to read command")?;
        if read == 0 {
            tracing::info!("Input closed, ending session");
            writeln!(output)?;
            writeln!(output, "Good bye!")?;
            return Ok(());
        }

        let Ok(line) = std::str::from_utf8(&buf) else {
            tracing::warn!(bytes = buf.len(), "Input line is not valid UTF-8");
            writeln!(output, "{}", CommandError::InvalidCommand)?;
            continue;
        };
        if line.trim().is_empty() {
            continue;
        }

        let reply = assistant.handle_line(line);
        writeln!(output, "{}", reply.text())?;
        if reply.is_exit() {
            return Ok(());
        }
    }
}
