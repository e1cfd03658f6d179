//! # Storage Layer
//!
//! The address book keeps two things apart:
//! 1. **Memory**: the live set of contacts, keyed by (first name, last name).
//! 2. **Log**: a plain text file that every *added* contact is appended to.
//!
//! The log is a history of additions, not a database. Edits and deletes only
//! touch memory, and the log is never read back into memory: reading it just
//! echoes its lines.
//!
//! ## Ordering of an Add
//!
//! An add writes the log entry first and only then inserts into memory. A
//! failed write therefore leaves the book exactly as it was, and the error is
//! returned to the caller instead of ending the session.
//!
//! ## Log Format
//!
//! ```text
//! First Name: John
//! Last Name: Doe
//! Address: 1 Main St
//! City: Austin
//! State: Texas
//! Zip: 73301
//! Phone Number: 5123456789
//! Email: john@gmail.com
//! --------------------------------------------------
//! ```
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: appends to a real file, creating its directory on demand.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.

use crate::model::Contact;

pub mod address_book;
pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use address_book::{AddOutcome, AddressBook, EditOutcome};
pub use backend::LogBackend;

pub const SEPARATOR_WIDTH: usize = 50;

/// The dashed line closing every log entry.
pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Formats one contact as a log entry: eight labeled lines plus the separator.
pub fn format_entry(contact: &Contact) -> String {
    let mut entry = String::new();
    for (field, value) in contact.fields() {
        entry.push_str(field.label());
        entry.push_str(": ");
        entry.push_str(value);
        entry.push('\n');
    }
    entry.push_str(&separator());
    entry.push('\n');
    entry
}
