use super::backend::LogBackend;
use super::format_entry;
use crate::error::Result;
use crate::model::{Contact, ContactKey};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// A contact with the same name pair is already stored; nothing was written.
    Duplicate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Updated,
    NotFound,
    /// The new name pair belongs to another stored contact.
    NameTaken,
}

/// In-memory contacts keyed by name pair, plus the append-only log they are written to.
///
/// Iteration follows key order (first name, then last name).
pub struct AddressBook<B: LogBackend> {
    contacts: BTreeMap<ContactKey, Contact>,
    backend: B,
}

impl<B: LogBackend> AddressBook<B> {
    pub fn new(backend: B) -> Self {
        Self {
            contacts: BTreeMap::new(),
            backend,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn log_path(&self) -> PathBuf {
        self.backend.path()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn contacts(&self) -> impl Iterator<Item = &Contact> + '_ {
        self.contacts.values()
    }

    pub fn get(&self, first_name: &str, last_name: &str) -> Option<&Contact> {
        self.contacts.get(&ContactKey::new(first_name, last_name))
    }

    pub fn contains(&self, first_name: &str, last_name: &str) -> bool {
        self.contacts
            .contains_key(&ContactKey::new(first_name, last_name))
    }

    /// Logs and stores a new contact. Duplicates by name are neither stored nor logged.
    pub fn add_contact(&mut self, contact: Contact) -> Result<AddOutcome> {
        let key = contact.key();
        if self.contacts.contains_key(&key) {
            log::debug!("skipping duplicate contact {}", key);
            return Ok(AddOutcome::Duplicate);
        }

        if let Err(e) = self.backend.append(&format_entry(&contact)) {
            log::debug!(
                "failed to append {} to {}: {}",
                key,
                self.backend.path().display(),
                e
            );
            return Err(e);
        }
        log::debug!("appended {} to {}", key, self.backend.path().display());

        self.contacts.insert(key, contact);
        Ok(AddOutcome::Added)
    }

    /// Replaces all eight fields of the contact stored under the given names.
    pub fn edit_contact(
        &mut self,
        first_name: &str,
        last_name: &str,
        updated: Contact,
    ) -> EditOutcome {
        let key = ContactKey::new(first_name, last_name);
        if !self.contacts.contains_key(&key) {
            return EditOutcome::NotFound;
        }

        let new_key = updated.key();
        if new_key != key && self.contacts.contains_key(&new_key) {
            return EditOutcome::NameTaken;
        }

        self.contacts.remove(&key);
        self.contacts.insert(new_key, updated);
        EditOutcome::Updated
    }

    /// Removes the contact from memory. Its log entry stays.
    pub fn delete_contact(&mut self, first_name: &str, last_name: &str) -> Option<Contact> {
        self.contacts
            .remove(&ContactKey::new(first_name, last_name))
    }

    /// One listing line per contact.
    pub fn display_contacts(&self) -> impl Iterator<Item = String> + '_ {
        self.contacts.values().map(Contact::summary_line)
    }

    pub fn contacts_by_city<'a>(&'a self, city: &'a str) -> impl Iterator<Item = &'a Contact> + 'a {
        self.contacts
            .values()
            .filter(move |c| eq_ignore_case(&c.city, city))
    }

    pub fn contacts_by_state<'a>(
        &'a self,
        state: &'a str,
    ) -> impl Iterator<Item = &'a Contact> + 'a {
        self.contacts
            .values()
            .filter(move |c| eq_ignore_case(&c.state, state))
    }

    /// Raw lines of the log, or `None` when it has not been created yet.
    pub fn read_from_file(&self) -> Result<Option<Vec<String>>> {
        let lines = self.backend.read_lines()?;
        match &lines {
            Some(lines) => log::debug!(
                "read {} lines from {}",
                lines.len(),
                self.backend.path().display()
            ),
            None => log::debug!("{} does not exist", self.backend.path().display()),
        }
        Ok(lines)
    }
}

/// Case-insensitive comparison independent of locale.
///
/// Folds to uppercase, so `σ` and final `ς` both meet `Σ`.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_uppercase)
        .eq(b.chars().flat_map(char::to_uppercase))
}
