//! # Contacts CLI
//!
//! The binary is intentionally thin: the interactive client lives in
//! `src/cli/`, and this file only invokes `cli::run()` and handles process
//! termination.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/contacts/src/cli/)                       │
//! │  - clap argument parsing + menu definition (setup.rs)       │
//! │  - Menu loop and per-action handlers (commands.rs)          │
//! │  - Line prompts with per-field re-prompting (prompt.rs)     │
//! │  - Terminal rendering (render.rs, styles.rs)                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  contactsapp: API → Commands → Store                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - **Library**: business logic is tested in `contactsapp`.
//! - **Session**: handlers run against in-memory input/output and a
//!   `MemBackend` store, asserting on the transcript.
//! - **Binary**: `tests/` drives the real executable over stdin with
//!   `assert_cmd`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
