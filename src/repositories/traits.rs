use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the whole address book.
///
/// Provides abstraction over where the snapshot lives, enabling different
/// implementations (JSON file, in-memory mock).
pub trait AddressBookRepository {
    /// Load the saved address book, or an empty one if nothing was saved yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the saved snapshot with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
