use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactsError {
    #[error("Invalid contact details: {0}")]
    InvalidContact(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ContactsError>;
