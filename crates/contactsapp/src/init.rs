//! # Startup
//!
//! [`initialize`] builds everything a session needs: the data directory, the
//! configuration, and a [`ContactsApi`] bound to the backing file.
//!
//! ## Data Directory Resolution
//!
//! 1. `data_override` (the `--data-dir` flag), used as given.
//! 2. The `CONTACTS_DATA` environment variable, primarily for tests.
//! 3. The OS-appropriate data directory (via the `directories` crate).
//!
//! The directory is created if it does not exist yet.
//!
//! ## Backing File
//!
//! `file_override` (the `--file` flag) wins over everything. Otherwise the
//! file is `<data dir>/<file_name>` with `file_name` from [`ContactsConfig`].

use crate::api::ContactsApi;
use crate::config::{ContactsConfig, CONFIG_FILE_NAME};
use crate::error::{ContactsError, Result};
use crate::store::fs_backend::{ensure_dir, FsBackend};
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "CONTACTS_DATA";

pub struct ContactsContext {
    pub api: ContactsApi<FsBackend>,
    pub config: ContactsConfig,
    pub data_dir: PathBuf,
    pub log_path: PathBuf,
}

/// Picks the data directory without touching the filesystem.
pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }

    if let Some(path) = std::env::var_os(DATA_DIR_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    ProjectDirs::from("com", "contacts", "contacts")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ContactsError::Config("Could not determine data directory".to_string()))
}

pub fn load_config(data_dir: &Path) -> ContactsConfig {
    Clapfig::builder()
        .app_name("contacts")
        .file_name(CONFIG_FILE_NAME)
        .search_paths(vec![SearchPath::Path(data_dir.to_path_buf())])
        .search_mode(SearchMode::Merge)
        .load()
        .unwrap_or_else(|e| {
            log::warn!("ignoring unreadable configuration: {}", e);
            ContactsConfig::default()
        })
}

/// Initialize the contacts context: directories, configuration and store.
pub fn initialize(
    data_override: Option<PathBuf>,
    file_override: Option<PathBuf>,
) -> Result<ContactsContext> {
    let data_dir = resolve_data_dir(data_override)?;
    ensure_dir(&data_dir)?;

    let config = load_config(&data_dir);
    let log_path = file_override.unwrap_or_else(|| config.log_path(&data_dir));
    if let Some(parent) = log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    log::debug!(
        "data dir {}, backing file {}",
        data_dir.display(),
        log_path.display()
    );

    let api = ContactsApi::new(FsBackend::new(log_path.clone()));

    Ok(ContactsContext {
        api,
        config,
        data_dir,
        log_path,
    })
}
