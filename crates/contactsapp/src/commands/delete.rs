use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ContactKey;
use crate::store::{AddressBook, LogBackend};

pub fn run<B: LogBackend>(
    book: &mut AddressBook<B>,
    first_name: &str,
    last_name: &str,
) -> Result<CmdResult> {
    let key = ContactKey::new(first_name, last_name);
    let mut result = CmdResult::default();

    match book.delete_contact(first_name, last_name) {
        Some(contact) => {
            result.add_message(CmdMessage::success(format!("Contact deleted: {}", key)));
            result.affected_contacts.push(contact);
        }
        None => {
            result.add_message(not_found(&key));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{jane, john};
    use crate::commands::{add, list, read_log};
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn removes_one_contact() {
        let mut book = AddressBook::new(MemBackend::new());
        add::run(&mut book, john()).unwrap();
        add::run(&mut book, jane()).unwrap();

        let result = run(&mut book, "John", "Doe").unwrap();

        assert_eq!(result.affected_contacts, vec![john()]);
        assert_eq!(
            result.messages,
            vec![CmdMessage::success("Contact deleted: John Doe")]
        );
        assert_eq!(
            list::run(&book).unwrap().display_lines,
            vec![jane().summary_line()]
        );
    }

    #[test]
    fn missing_contact_is_reported() {
        let mut book = AddressBook::new(MemBackend::new());
        add::run(&mut book, john()).unwrap();

        let result = run(&mut book, "Jane", "Doe").unwrap();

        assert!(result.affected_contacts.is_empty());
        assert_eq!(
            result.messages,
            vec![CmdMessage::warning("Contact not found: Jane Doe")]
        );
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn deleted_contact_stays_in_the_log() {
        let mut book = AddressBook::new(MemBackend::new());
        add::run(&mut book, john()).unwrap();

        run(&mut book, "John", "Doe").unwrap();

        let lines = read_log::run(&book).unwrap().log_lines;
        assert_eq!(lines[0], "First Name: John");
    }
}
