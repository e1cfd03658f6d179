use super::backend::LogBackend;
use crate::error::{ContactsError, Result};
use std::cell::RefCell;
use std::io;
use std::path::PathBuf;

/// In-memory log backend for testing.
///
/// Uses `RefCell` for interior mutability since the address book is
/// single-threaded. `None` content stands for a log that was never written.
#[derive(Default)]
pub struct MemBackend {
    content: RefCell<Option<String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Everything appended so far, or `None` if nothing ever was.
    pub fn contents(&self) -> Option<String> {
        self.content.borrow().clone()
    }
}

impl LogBackend for MemBackend {
    fn append(&self, entry: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ContactsError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "Simulated write error",
            )));
        }

        self.content
            .borrow_mut()
            .get_or_insert_with(String::new)
            .push_str(entry);
        Ok(())
    }

    fn read_lines(&self) -> Result<Option<Vec<String>>> {
        Ok(self
            .content
            .borrow()
            .as_ref()
            .map(|text| text.lines().map(str::to_string).collect()))
    }

    fn path(&self) -> PathBuf {
        PathBuf::from("memory://AddressBook.txt")
    }
}
