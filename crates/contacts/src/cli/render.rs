//! # Rendering
//!
//! Everything the session writes goes through here, so handlers only decide
//! *what* to show. Output goes to any `Write`, which keeps the session
//! testable with an in-memory buffer.
//!
//! Styling uses `console`, which turns itself off when stdout is not a
//! terminal, so piped output and test transcripts are plain text.

use super::setup::MenuChoice;
use super::styles::{ERROR, HEADING, INFO, SUCCESS, WARNING};
use contactsapp::api::{CmdMessage, MessageLevel};
use contactsapp::model::Contact;
use std::io::{self, Write};

const MENU_COLUMN_WIDTH: usize = 22;

/// The two-column menu: 1-4 on the left, 5-8 on the right.
pub fn render_menu() -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(&format!("{}\n", HEADING.apply_to("Select an option:")));

    let all = MenuChoice::ALL;
    let (left, right) = all.split_at(all.len() / 2);
    for (l, r) in left.iter().zip(right) {
        let left_cell = format!("{}. {}", l.number(), l.label());
        output.push_str(&format!(
            "{:<width$}{}. {}\n",
            left_cell,
            r.number(),
            r.label(),
            width = MENU_COLUMN_WIDTH
        ));
    }
    output
}

pub fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{}", render_menu())
}

pub fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        let style = match message.level {
            MessageLevel::Info => &*INFO,
            MessageLevel::Success => &*SUCCESS,
            MessageLevel::Warning => &*WARNING,
            MessageLevel::Error => &*ERROR,
        };
        writeln!(out, "{}", style.apply_to(&message.content))?;
    }
    Ok(())
}

pub fn print_error<W: Write>(out: &mut W, content: impl Into<String>) -> io::Result<()> {
    print_messages(out, &[CmdMessage::error(content)])
}

/// City or state view: a heading plus brief lines, or the "none found" messages.
pub fn print_place_listing<W: Write>(
    out: &mut W,
    place: &str,
    contacts: &[Contact],
    messages: &[CmdMessage],
) -> io::Result<()> {
    if !contacts.is_empty() {
        writeln!(out, "{}", HEADING.apply_to(format!("Contacts in {}:", place)))?;
        for contact in contacts {
            writeln!(out, "{}", contact.brief_line())?;
        }
    }
    print_messages(out, messages)
}

/// Lines echoed as they are, unstyled: the full listing or the backing file.
pub fn print_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        console::strip_ansi_codes(&String::from_utf8(buf).unwrap()).into_owned()
    }

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
    fn menu_has_two_columns() {
        let menu = console::strip_ansi_codes(&render_menu()).into_owned();
        let lines: Vec<&str> = menu.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "Select an option:");
        assert_eq!(lines[2], "1. Add Contact        5. Edit Contact");
        assert_eq!(lines[5], "4. View by State      8. Exit");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn messages_one_per_line() {
        let out = render(|buf| {
            print_messages(
                buf,
                &[
                    CmdMessage::success("Contact added successfully."),
                    CmdMessage::warning("Contact not found: Jane Doe"),
                ],
            )
        });
        assert_eq!(
            out,
            "Contact added successfully.\nContact not found: Jane Doe\n"
        );
    }

    #[test]
    fn empty_listing_prints_nothing() {
        assert_eq!(render(|buf| print_lines(buf, &[])), "");
    }

    #[test]
    fn place_listing_with_matches() {
        let out = render(|buf| print_place_listing(buf, "Austin", &[john()], &[]));
        assert_eq!(
            out,
            "Contacts in Austin:\nName: John Doe, Phone: 5123456789, Email: john@gmail.com\n"
        );
    }

    #[test]
    fn place_listing_without_matches() {
        let out = render(|buf| {
            print_place_listing(
                buf,
                "Paris",
                &[],
                &[CmdMessage::info("No contacts found in Paris.")],
            )
        });
        assert_eq!(out, "No contacts found in Paris.\n");
    }
}
