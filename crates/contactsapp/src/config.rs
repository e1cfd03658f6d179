//! # Configuration
//!
//! Configuration is managed by [`clapfig`], which handles layered loading
//! from TOML files and environment variables.
//!
//! ## Resolution Order
//!
//! 1. **Command line**: `--file` replaces the whole backing file path.
//! 2. **Environment variables**: `CONTACTS__FILE_NAME`.
//! 3. **Config file**: `contacts.toml` in the data directory.
//! 4. **Compiled Defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `file_name` | `AddressBook.txt` | Name of the backing file inside the data directory |

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "contacts.toml";
const DEFAULT_FILE_NAME: &str = "AddressBook.txt";

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

/// Configuration for contacts, stored in `contacts.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ContactsConfig {
    /// Name of the backing file that added contacts are appended to
    #[config(default = "AddressBook.txt")]
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
        }
    }
}

impl ContactsConfig {
    /// Full path of the backing file inside `data_dir`.
    /// A blank `file_name` falls back to the default name.
    pub fn log_path(&self, data_dir: &Path) -> PathBuf {
        let name = self.file_name.trim();
        if name.is_empty() {
            data_dir.join(DEFAULT_FILE_NAME)
        } else {
            data_dir.join(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ContactsConfig::default();
        assert_eq!(config.file_name, "AddressBook.txt");
    }

    #[test]
    fn test_log_path_joins_data_dir() {
        let config = ContactsConfig {
            file_name: "people.txt".to_string(),
        };
        assert_eq!(
            config.log_path(Path::new("/data")),
            PathBuf::from("/data/people.txt")
        );
    }

    #[test]
    fn test_blank_file_name_uses_default() {
        let config = ContactsConfig {
            file_name: "  ".to_string(),
        };
        assert_eq!(
            config.log_path(Path::new("/data")),
            PathBuf::from("/data/AddressBook.txt")
        );
    }

    #[test]
    fn test_parse_from_toml() {
        let config: ContactsConfig = toml::from_str("file_name = \"friends.txt\"").unwrap();
        assert_eq!(config.file_name, "friends.txt");
    }

    #[test]
    fn test_parse_empty_toml_uses_default() {
        let config: ContactsConfig = toml::from_str("").unwrap();
        assert_eq!(config, ContactsConfig::default());
    }
}
