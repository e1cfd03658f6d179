use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Contact;
use crate::store::{AddressBook, LogBackend};

pub fn by_city<B: LogBackend>(book: &AddressBook<B>, city: &str) -> Result<CmdResult> {
    Ok(listing(book.contacts_by_city(city).cloned().collect(), city))
}

pub fn by_state<B: LogBackend>(book: &AddressBook<B>, state: &str) -> Result<CmdResult> {
    Ok(listing(book.contacts_by_state(state).cloned().collect(), state))
}

fn listing(contacts: Vec<Contact>, place: &str) -> CmdResult {
    let mut result = CmdResult::default();
    if contacts.is_empty() {
        result.add_message(CmdMessage::info(format!("No contacts found in {}.", place)));
    }
    result.with_listed_contacts(contacts)
}
