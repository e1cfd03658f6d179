use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Contact, ContactKey};
use crate::store::{AddressBook, EditOutcome, LogBackend};

/// Replaces every field of the named contact. The backing file is not touched.
pub fn run<B: LogBackend>(
    book: &mut AddressBook<B>,
    first_name: &str,
    last_name: &str,
    updated: Contact,
) -> Result<CmdResult> {
    let key = ContactKey::new(first_name, last_name);
    let mut result = CmdResult::default();

    match book.edit_contact(first_name, last_name, updated.clone()) {
        EditOutcome::Updated => {
            result.add_message(CmdMessage::success(format!("Contact updated: {}", key)));
            result.affected_contacts.push(updated);
        }
        EditOutcome::NotFound => {
            result.add_message(not_found(&key));
        }
        EditOutcome::NameTaken => {
            result.add_message(CmdMessage::warning(format!(
                "Name already exists: {}",
                updated.key()
            )));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::commands::fixtures::{jane, john};
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn updates_all_fields() {
        let mut book = AddressBook::new(MemBackend::new());
        add::run(&mut book, john()).unwrap();

        let mut updated = jane();
        updated.first_name = "John".into();
        updated.last_name = "Doe".into();
        let result = run(&mut book, "John", "Doe", updated.clone()).unwrap();

        assert_eq!(book.get("John", "Doe"), Some(&updated));
        assert_eq!(result.affected_contacts, vec![updated]);
        assert_eq!(
            result.messages,
            vec![CmdMessage::success("Contact updated: John Doe")]
        );
    }

    #[test]
    fn rename_moves_the_key() {
        let mut book = AddressBook::new(MemBackend::new());
        add::run(&mut book, john()).unwrap();

        run(&mut book, "John", "Doe", jane()).unwrap();

        assert!(!book.contains("John", "Doe"));
        assert!(book.contains("Jane", "Roe"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn missing_contact_is_reported() {
        let mut book = AddressBook::new(MemBackend::new());
        add::run(&mut book, john()).unwrap();

        let result = run(&mut book, "John", "Smith", jane()).unwrap();

        assert!(result.affected_contacts.is_empty());
        assert_eq!(
            result.messages,
            vec![CmdMessage::warning("Contact not found: John Smith")]
        );
        assert_eq!(book.get("John", "Doe"), Some(&john()));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut book = AddressBook::new(MemBackend::new());
        add::run(&mut book, john()).unwrap();

        let result = run(&mut book, "john", "doe", jane()).unwrap();

        assert!(result.has_problems());
        assert_eq!(book.get("John", "Doe"), Some(&john()));
    }

    #[test]
    fn renaming_onto_another_contact_is_rejected() {
        let mut book = AddressBook::new(MemBackend::new());
        add::run(&mut book, john()).unwrap();
        add::run(&mut book, jane()).unwrap();

        let result = run(&mut book, "John", "Doe", jane()).unwrap();

        assert_eq!(
            result.messages,
            vec![CmdMessage::warning("Name already exists: Jane Roe")]
        );
        assert_eq!(book.get("John", "Doe"), Some(&john()));
        assert_eq!(book.len(), 2);
    }
}
