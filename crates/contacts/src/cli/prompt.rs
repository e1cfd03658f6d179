use super::render::print_error;
use contactsapp::model::{Contact, Field};
use contactsapp::validation::validate_field;
use std::io::{self, BufRead, Write};

/// Line-oriented prompting over any reader/writer pair.
///
/// Every `ask*` method returns `Ok(None)` once input is exhausted, which the
/// session treats as the end of the conversation.
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints the question (no newline) and reads one answer line.
    /// Only the line terminator is stripped; other whitespace is kept.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.trim_end_matches(&['\r', '\n'][..]).to_string();
        Ok(Some(answer))
    }

    /// Asks for one field until the answer passes validation.
    pub fn ask_field(&mut self, field: Field) -> io::Result<Option<String>> {
        let question = format!("{}: ", field.label());
        loop {
            let Some(answer) = self.ask(&question)? else {
                return Ok(None);
            };
            match validate_field(field, &answer) {
                Ok(()) => return Ok(Some(answer)),
                Err(e) => print_error(&mut self.output, e.to_string())?,
            }
        }
    }

    /// Asks for all eight fields in order.
    pub fn ask_contact(&mut self) -> io::Result<Option<Contact>> {
        let mut contact = Contact::default();
        for field in Field::ALL {
            let Some(value) = self.ask_field(field)? else {
                return Ok(None);
            };
            contact.set(field, value);
        }
        Ok(Some(contact))
    }
}
