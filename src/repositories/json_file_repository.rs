use crate::error::StorageResult;
use crate::models::AddressBook;
use crate::repositories::traits::AddressBookRepository;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Address book repository backed by a single JSON file.
///
/// Saves go to a temporary file in the same directory that is then renamed
/// over the target, so readers only ever see a complete snapshot. A failed
/// save leaves no temporary file behind.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository storing its snapshot at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the snapshot; the temporary file must live there too.
    fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl AddressBookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "No saved address book, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let book: AddressBook = serde_json::from_str(&contents)?;
        tracing::info!(
            path = %self.path.display(),
            records = book.len(),
            "Address book loaded"
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let directory = self.directory();
        fs::create_dir_all(directory)?;

        let json = serde_json::to_string_pretty(book)?;

        // Dropping the temporary file on any error path deletes it.
        let mut file = NamedTempFile::new_in(directory)?;
        file.write_all(json.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;

        tracing::info!(
            path = %self.path.display(),
            records = book.len(),
            "Address book saved"
        );
        Ok(())
    }
}
