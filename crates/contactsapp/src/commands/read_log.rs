use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{AddressBook, LogBackend};

/// Echoes the backing file. Independent of what is currently in memory.
pub fn run<B: LogBackend>(book: &AddressBook<B>) -> Result<CmdResult> {
    match book.read_from_file()? {
        Some(lines) => Ok(CmdResult::default().with_log_lines(lines)),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info("Address book file does not exist."));
            Ok(result)
        }
    }
}
