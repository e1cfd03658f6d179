//! # API Facade
//!
//! A **thin facade** over the command layer and the single entry point for
//! every address book operation, whatever UI drives it.
//!
//! The facade:
//! - **Owns** the one [`AddressBook`] of the session (no global state)
//! - **Dispatches** to the command functions
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no business logic and does no I/O of its own.
//!
//! ## Generic Over LogBackend
//!
//! `ContactsApi<B: LogBackend>` is generic over where the log goes:
//! - Production: `ContactsApi<FsBackend>`
//! - Testing: `ContactsApi<MemBackend>`

use crate::commands;
use crate::error::Result;
use crate::model::Contact;
use crate::store::{AddressBook, LogBackend};
use std::path::PathBuf;

pub struct ContactsApi<B: LogBackend> {
    book: AddressBook<B>,
}

impl<B: LogBackend> ContactsApi<B> {
    pub fn new(backend: B) -> Self {
        Self {
            book: AddressBook::new(backend),
        }
    }

    /// Validates and adds a contact. Invalid details fail with
    /// [`ContactsError::InvalidContact`](crate::error::ContactsError::InvalidContact).
    pub fn add_contact(&mut self, contact: Contact) -> Result<CmdResult> {
        commands::add::run(&mut self.book, contact)
    }

    pub fn contains(&self, first_name: &str, last_name: &str) -> bool {
        self.book.contains(first_name, last_name)
    }

    pub fn edit_contact(
        &mut self,
        first_name: &str,
        last_name: &str,
        updated: Contact,
    ) -> Result<CmdResult> {
        commands::edit::run(&mut self.book, first_name, last_name, updated)
    }

    pub fn delete_contact(&mut self, first_name: &str, last_name: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.book, first_name, last_name)
    }

    pub fn list_contacts(&self) -> Result<CmdResult> {
        commands::list::run(&self.book)
    }

    pub fn contacts_by_city(&self, city: &str) -> Result<CmdResult> {
        commands::filter::by_city(&self.book, city)
    }

    pub fn contacts_by_state(&self, state: &str) -> Result<CmdResult> {
        commands::filter::by_state(&self.book, state)
    }

    pub fn read_log(&self) -> Result<CmdResult> {
        commands::read_log::run(&self.book)
    }

    pub fn log_path(&self) -> PathBuf {
        self.book.log_path()
    }

    pub fn book(&self) -> &AddressBook<B> {
        &self.book
    }
}

pub use commands::{not_found, CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContactsError;
    use crate::store::mem_backend::MemBackend;

    fn john() -> Contact {
        Contact::new(
            "John",
            "Doe",
            "1 Main St",
            "Austin",
            "Texas",
            "73301",
            "5123456789",
            "john@gmail.com",
        )
    }

    #[test]
    fn add_dispatches_and_logs() {
        let mut api = ContactsApi::new(MemBackend::new());
        let result = api.add_contact(john()).unwrap();

        assert_eq!(result.affected_contacts.len(), 1);
        assert!(api.contains("John", "Doe"));
        assert!(api.book().backend().contents().is_some());
    }

    #[test]
    fn add_rejects_invalid_details() {
        let mut api = ContactsApi::new(MemBackend::new());
        let mut contact = john();
        contact.first_name = "john".into();

        assert!(matches!(
            api.add_contact(contact),
            Err(ContactsError::InvalidContact(_))
        ));
        assert!(!api.contains("john", "Doe"));
    }

    #[test]
    fn queries_dispatch() {
        let mut api = ContactsApi::new(MemBackend::new());
        api.add_contact(john()).unwrap();

        assert_eq!(api.list_contacts().unwrap().display_lines.len(), 1);
        assert_eq!(api.contacts_by_city("austin").unwrap().listed_contacts.len(), 1);
        assert_eq!(api.contacts_by_state("TEXAS").unwrap().listed_contacts.len(), 1);
        assert_eq!(api.read_log().unwrap().log_lines.len(), 9);
    }

    #[test]
    fn edit_and_delete_dispatch() {
        let mut api = ContactsApi::new(MemBackend::new());
        api.add_contact(john()).unwrap();

        let mut moved = john();
        moved.city = "Dallas".into();
        api.edit_contact("John", "Doe", moved).unwrap();
        assert_eq!(api.book().get("John", "Doe").unwrap().city, "Dallas");

        api.delete_contact("John", "Doe").unwrap();
        assert!(!api.contains("John", "Doe"));
    }

    #[test]
    fn log_path_comes_from_backend() {
        let api = ContactsApi::new(MemBackend::new());
        assert_eq!(api.log_path(), PathBuf::from("memory://AddressBook.txt"));
    }
}
