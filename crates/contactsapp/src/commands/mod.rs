//! # Command Layer
//!
//! The business logic behind each menu action. Every command is a plain
//! function over an [`AddressBook`](crate::store::AddressBook) that returns a
//! structured [`CmdResult`].
//!
//! Commands never print, prompt, or exit. "Not found" and "already exists"
//! are not errors here: they come back as warning messages and leave the book
//! untouched. Only invalid contact details and I/O failures are `Err`.
//!
//! ## Testing Strategy
//!
//! Command tests run against [`MemBackend`](crate::store::mem_backend::MemBackend),
//! so they cover every branch without touching the filesystem.
//!
//! ## Command Modules
//!
//! - [`add`]: Validate and add a contact
//! - [`list`]: List every contact
//! - [`filter`]: Contacts in a city or state
//! - [`edit`]: Replace a contact's details
//! - [`delete`]: Remove a contact
//! - [`read_log`]: Echo the backing file

use crate::model::{Contact, ContactKey};
use serde::Serialize;

pub mod add;
pub mod delete;
pub mod edit;
pub mod filter;
pub mod list;
pub mod read_log;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Warning shared by every lookup by name that comes up empty.
pub fn not_found(key: &ContactKey) -> CmdMessage {
    CmdMessage::warning(format!("Contact not found: {}", key))
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Contacts created, changed or removed by the command
    pub affected_contacts: Vec<Contact>,
    /// Contacts to display
    pub listed_contacts: Vec<Contact>,
    /// Full listing, one summary line per contact (`list` only)
    pub display_lines: Vec<String>,
    /// Raw lines of the backing file (`read_log` only)
    pub log_lines: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    pub fn with_display_lines(mut self, lines: Vec<String>) -> Self {
        self.display_lines = lines;
        self
    }

    pub fn with_log_lines(mut self, lines: Vec<String>) -> Self {
        self.log_lines = lines;
        self
    }

    /// True when any message is a warning or an error.
    pub fn has_problems(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}
