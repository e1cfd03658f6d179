//! # Contacts Architecture
//!
//! Contacts is a **UI-agnostic address book library**. The interactive menu
//! in the `contacts` binary is one client of it; nothing in here knows about
//! terminals.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (contacts crate)                                       │
//! │  - Menu loop, prompting, field re-prompts, rendering        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session's AddressBook                           │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, duplicate checks, leveled messages           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - AddressBook keyed by (first name, last name)             │
//! │  - LogBackend trait: FsBackend, MemBackend                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never prompts,
//! and never exits the process. "Not found" and "already exists" are
//! messages in a [`commands::CmdResult`]; only invalid details and I/O
//! failures are errors.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic per menu action
//! - [`store`]: The address book and its log backends
//! - [`model`]: `Contact`, `ContactKey`, `Field`
//! - [`validation`]: Field format rules
//! - [`config`]: Configuration
//! - [`init`]: Data directory resolution and startup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
pub mod validation;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
