use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{AddressBook, LogBackend};

pub fn run<B: LogBackend>(book: &AddressBook<B>) -> Result<CmdResult> {
    let lines = book.display_contacts().collect();
    Ok(CmdResult::default().with_display_lines(lines))
}
