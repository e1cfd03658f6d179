use crate::error::Result;
use std::path::PathBuf;

/// Raw I/O behind the address book's append-only log.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`super::AddressBook`] handles the "what" (keys, duplicates, formatting).
pub trait LogBackend {
    /// Append an already formatted entry to the end of the log.
    /// Creates the log (and its parent directory) when missing.
    fn append(&self, entry: &str) -> Result<()>;

    /// Read the log line by line, in stored order.
    /// Returns Ok(None) if the log does not exist yet.
    fn read_lines(&self) -> Result<Option<Vec<String>>>;

    /// Location of the log. A virtual path for non-file backends.
    fn path(&self) -> PathBuf;
}
