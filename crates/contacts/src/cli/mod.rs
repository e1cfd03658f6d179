//! # CLI Behavior
//!
//! This is **one possible UI client** for contacts, not the application itself.
//! It is the only place that knows about stdin/stdout, exit codes and colors.
//!
//! ## The Menu Loop
//!
//! `contacts` takes no subcommands. It shows a numbered menu, reads a choice,
//! runs the action and shows the menu again until `8` (Exit) or end of input.
//!
//! - A choice outside `1..=8` prints an error and re-shows the menu.
//! - Adding and editing prompt for every field. A field with a format rule
//!   (names, zip, phone, email) is asked again until it is valid; there is no
//!   retry cap.
//! - Errors from the library (such as an unwritable backing file) are printed
//!   and the session carries on.
//! - End of input at any prompt ends the session with exit code 0.
//!
//! ## Module Structure
//!
//! - `commands`: `run()`, the session loop and per-action handlers
//! - `prompt`: line reading and validated field prompts
//! - `render`: output formatting
//! - `setup`: argument parsing and the menu definition
//! - `styles`: terminal styles

mod commands;
mod prompt;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
