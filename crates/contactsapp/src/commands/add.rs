use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Contact;
use crate::store::{AddOutcome, AddressBook, LogBackend};
use crate::validation::validate_contact;

pub fn run<B: LogBackend>(book: &mut AddressBook<B>, contact: Contact) -> Result<CmdResult> {
    validate_contact(&contact)?;

    let mut result = CmdResult::default();
    if book.contains(&contact.first_name, &contact.last_name) {
        result.add_message(name_taken(&contact));
        return Ok(result);
    }

    match book.add_contact(contact.clone())? {
        AddOutcome::Added => {
            result.add_message(CmdMessage::success("Contact added successfully."));
            result.affected_contacts.push(contact);
        }
        AddOutcome::Duplicate => result.add_message(name_taken(&contact)),
    }
    Ok(result)
}

fn name_taken(contact: &Contact) -> CmdMessage {
    CmdMessage::warning(format!("Name already exists: {}", contact.key()))
}
