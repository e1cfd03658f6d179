//! Contact detail validation.
//!
//! Rules:
//! - First and last names: one uppercase ASCII letter followed by one or more
//!   lowercase ASCII letters (`John`, not `john`, `JOHN` or `Mary-Ann`)
//! - Zip: exactly five ASCII digits
//! - Phone number: ten ASCII digits, the first one in `5..=8`
//! - Email: letters, digits and `_.+-` before the `@`, domain `gmail.com`
//! - Address, city and state are free text, including the empty string

use crate::model::{Contact, Field};
use once_cell::sync::Lazy;
use regex::Regex;

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][a-z]+$").unwrap());
static ZIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{5}$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[5-8][0-9]{9}$").unwrap());
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_.+-]+@gmail\.com$").unwrap());

/// Validates a single field value.
///
/// # Examples
/// ```
/// use contactsapp::model::Field;
/// use contactsapp::validation::validate_field;
///
/// assert!(validate_field(Field::FirstName, "John").is_ok());
/// assert!(validate_field(Field::FirstName, "john").is_err());
/// assert!(validate_field(Field::Zip, "12345").is_ok());
/// assert!(validate_field(Field::Zip, "1234").is_err());
/// assert!(validate_field(Field::City, "").is_ok());
/// ```
pub fn validate_field(field: Field, value: &str) -> Result<(), ValidationError> {
    let valid = match field {
        Field::FirstName | Field::LastName => NAME_RE.is_match(value),
        Field::Zip => ZIP_RE.is_match(value),
        Field::PhoneNumber => PHONE_RE.is_match(value),
        Field::Email => EMAIL_RE.is_match(value),
        Field::Address | Field::City | Field::State => true,
    };

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new(field))
    }
}

/// Validates every field of a contact, reporting the first failure in field order.
pub fn validate_contact(contact: &Contact) -> Result<(), ValidationError> {
    contact
        .fields()
        .try_for_each(|(field, value)| validate_field(field, value))
}

/// A contact field that does not match its format rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
}

impl ValidationError {
    pub fn new(field: Field) -> Self {
        Self { field }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.field {
            Field::FirstName => write!(
                f,
                "Invalid first name. Please enter a valid first name starting with a capital letter."
            ),
            Field::LastName => write!(
                f,
                "Invalid last name. Please enter a valid last name starting with a capital letter."
            ),
            Field::Zip => write!(f, "Invalid zip code. Please enter a 5-digit number."),
            Field::PhoneNumber => write!(
                f,
                "Invalid phone number. Please enter a 10-digit number starting with 5-8."
            ),
            Field::Email => write!(
                f,
                "Invalid email address. Please enter a valid email address."
            ),
            other => write!(f, "Invalid {}.", other.label().to_lowercase()),
        }
    }
}

impl std::error::Error for ValidationError {}
