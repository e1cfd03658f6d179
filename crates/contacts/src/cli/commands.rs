//! # Session
//!
//! `run()` parses arguments, sets up logging and the library context, then
//! hands stdin/stdout to a [`Session`]. The session owns the one
//! `ContactsApi` for the whole run and passes it to each handler.
//!
//! Handlers return [`Flow`]: whether to show the menu again or stop.
//! Library errors are printed and the loop continues; only failures to read
//! input or write output end the session with an error.

use super::prompt::Prompter;
use super::render::{print_error, print_lines, print_menu, print_messages, print_place_listing};
use super::setup::{Cli, MenuChoice};
use clap::Parser;
use contactsapp::api::{not_found, CmdMessage, CmdResult, ContactsApi};
use contactsapp::init::initialize;
use contactsapp::model::ContactKey;
use contactsapp::store::LogBackend;
use std::io::{self, BufRead, Write};

const INVALID_CHOICE: &str = "Invalid choice. Please enter a number between 1 and 8.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = initialize(cli.data_dir, cli.file)?;
    log::info!("using backing file {}", ctx.log_path.display());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(ctx.api, stdin.lock(), stdout.lock());
    session.run()
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
}

pub struct Session<B: LogBackend, R: BufRead, W: Write> {
    api: ContactsApi<B>,
    prompter: Prompter<R, W>,
}

impl<B: LogBackend, R: BufRead, W: Write> Session<B, R, W> {
    pub fn new(api: ContactsApi<B>, input: R, output: W) -> Self {
        Self {
            api,
            prompter: Prompter::new(input, output),
        }
    }

    /// Shows the menu and dispatches choices until Exit or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            print_menu(self.prompter.out())?;
            let Some(answer) = self.prompter.ask("Enter your choice (1-8): ")? else {
                log::debug!("input closed at menu");
                return Ok(());
            };

            let flow = match MenuChoice::from_input(&answer) {
                Some(choice) => self.dispatch(choice)?,
                None => {
                    print_error(self.prompter.out(), INVALID_CHOICE)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> anyhow::Result<Flow> {
        log::debug!("menu choice {}", choice.label());
        match choice {
            MenuChoice::Add => self.handle_add(),
            MenuChoice::Display => self.handle_display(),
            MenuChoice::ByCity => self.handle_by_place(Place::City),
            MenuChoice::ByState => self.handle_by_place(Place::State),
            MenuChoice::Edit => self.handle_edit(),
            MenuChoice::Delete => self.handle_delete(),
            MenuChoice::ReadFile => self.handle_read_file(),
            MenuChoice::Exit => {
                print_messages(
                    self.prompter.out(),
                    &[CmdMessage::info("Exiting the program.")],
                )?;
                Ok(Flow::Exit)
            }
        }
    }

    fn handle_add(&mut self) -> anyhow::Result<Flow> {
        writeln!(self.prompter.out(), "Enter details for the new Contact:")?;
        let Some(contact) = self.prompter.ask_contact()? else {
            return Ok(Flow::Exit);
        };

        let result = self.api.add_contact(contact);
        self.report(result)?;
        Ok(Flow::Continue)
    }

    fn handle_display(&mut self) -> anyhow::Result<Flow> {
        let result = self.api.list_contacts();
        if let Some(result) = self.report(result)? {
            print_lines(self.prompter.out(), &result.display_lines)?;
        }
        Ok(Flow::Continue)
    }

    fn handle_by_place(&mut self, place: Place) -> anyhow::Result<Flow> {
        let question = match place {
            Place::City => "Enter city name to view contacts: ",
            Place::State => "Enter state name to view contacts: ",
        };
        let Some(name) = self.prompter.ask(question)? else {
            return Ok(Flow::Exit);
        };

        let result = match place {
            Place::City => self.api.contacts_by_city(&name),
            Place::State => self.api.contacts_by_state(&name),
        };
        match result {
            Ok(result) => print_place_listing(
                self.prompter.out(),
                &name,
                &result.listed_contacts,
                &result.messages,
            )?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn handle_edit(&mut self) -> anyhow::Result<Flow> {
        writeln!(self.prompter.out(), "Enter details for editing a Contact:")?;
        let Some(key) = self.ask_key("edit")? else {
            return Ok(Flow::Exit);
        };

        if !self.api.contains(&key.first_name, &key.last_name) {
            print_messages(self.prompter.out(), &[not_found(&key)])?;
            return Ok(Flow::Continue);
        }

        writeln!(self.prompter.out(), "Enter updated details:")?;
        let Some(updated) = self.prompter.ask_contact()? else {
            return Ok(Flow::Exit);
        };

        let result = self
            .api
            .edit_contact(&key.first_name, &key.last_name, updated);
        self.report(result)?;
        Ok(Flow::Continue)
    }

    fn handle_delete(&mut self) -> anyhow::Result<Flow> {
        writeln!(self.prompter.out(), "Enter details for deleting a Contact:")?;
        let Some(key) = self.ask_key("delete")? else {
            return Ok(Flow::Exit);
        };

        let result = self.api.delete_contact(&key.first_name, &key.last_name);
        self.report(result)?;
        Ok(Flow::Continue)
    }

    fn handle_read_file(&mut self) -> anyhow::Result<Flow> {
        let result = self.api.read_log();
        if let Ok(result) = &result {
            print_lines(self.prompter.out(), &result.log_lines)?;
        }
        self.report(result)?;
        Ok(Flow::Continue)
    }

    /// Reads the current name pair of the contact to act on. Not validated.
    fn ask_key(&mut self, action: &str) -> io::Result<Option<ContactKey>> {
        let Some(first_name) = self
            .prompter
            .ask(&format!("Enter First Name of the contact to {}: ", action))?
        else {
            return Ok(None);
        };
        let Some(last_name) = self
            .prompter
            .ask(&format!("Enter Last Name of the contact to {}: ", action))?
        else {
            return Ok(None);
        };
        Ok(Some(ContactKey::new(first_name, last_name)))
    }

    /// Prints the result's messages, or the error, and hands the result back.
    fn report(
        &mut self,
        result: contactsapp::error::Result<CmdResult>,
    ) -> io::Result<Option<CmdResult>> {
        match result {
            Ok(result) => {
                print_messages(self.prompter.out(), &result.messages)?;
                Ok(Some(result))
            }
            Err(e) => {
                self.report_error(&e)?;
                Ok(None)
            }
        }
    }

    fn report_error(&mut self, error: &contactsapp::error::ContactsError) -> io::Result<()> {
        log::debug!("command failed: {}", error);
        print_error(self.prompter.out(), format!("Error: {}", error))
    }

    #[cfg(test)]
    fn into_parts(self) -> (ContactsApi<B>, W) {
        (self.api, self.prompter.into_output())
    }
}

#[derive(Debug, Clone, Copy)]
enum Place {
    City,
    State,
}
