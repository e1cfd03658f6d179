use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight fields of a contact, in the order they are prompted for and logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FirstName,
    LastName,
    Address,
    City,
    State,
    Zip,
    PhoneNumber,
    Email,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::FirstName,
        Field::LastName,
        Field::Address,
        Field::City,
        Field::State,
        Field::Zip,
        Field::PhoneNumber,
        Field::Email,
    ];

    /// Human label, shared by prompts and the backing file.
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Address => "Address",
            Field::City => "City",
            Field::State => "State",
            Field::Zip => "Zip",
            Field::PhoneNumber => "Phone Number",
            Field::Email => "Email",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lookup identity of a contact: the exact (first name, last name) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContactKey {
    pub first_name: String,
    pub last_name: String,
}

impl ContactKey {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl fmt::Display for ContactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone_number: String,
    pub email: String,
}

impl Contact {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            city: city.into(),
            state: state.into(),
            zip: zip.into(),
            phone_number: phone_number.into(),
            email: email.into(),
        }
    }

    pub fn key(&self) -> ContactKey {
        ContactKey::new(self.first_name.clone(), self.last_name.clone())
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Address => &self.address,
            Field::City => &self.city,
            Field::State => &self.state,
            Field::Zip => &self.zip,
            Field::PhoneNumber => &self.phone_number,
            Field::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Address => self.address = value,
            Field::City => self.city = value,
            Field::State => self.state = value,
            Field::Zip => self.zip = value,
            Field::PhoneNumber => self.phone_number = value,
            Field::Email => self.email = value,
        }
    }

    /// Field values paired with their field, in canonical order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// Full one-line listing used by "Display Contacts".
    pub fn summary_line(&self) -> String {
        format!(
            "Name: {} {}, Phone: {}, Email: {}, Address: {}, City: {}, State: {}",
            self.first_name,
            self.last_name,
            self.phone_number,
            self.email,
            self.address,
            self.city,
            self.state
        )
    }

    /// Short listing used by the city and state views.
    pub fn brief_line(&self) -> String {
        format!(
            "Name: {} {}, Phone: {}, Email: {}",
            self.first_name, self.last_name, self.phone_number, self.email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Contact {
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
    fn fields_follow_canonical_order() {
        let contact = sample();
        let labels: Vec<&str> = contact.fields().map(|(f, _)| f.label()).collect();
        assert_eq!(
            labels,
            vec![
                "First Name",
                "Last Name",
                "Address",
                "City",
                "State",
                "Zip",
                "Phone Number",
                "Email"
            ]
        );
        assert_eq!(contact.get(Field::Zip), "73301");
    }

    #[test]
    fn set_then_get() {
        let mut contact = sample();
        contact.set(Field::City, "Dallas");
        assert_eq!(contact.city, "Dallas");
    }

    #[test]
    fn key_is_name_pair() {
        let contact = sample();
        assert_eq!(contact.key(), ContactKey::new("John", "Doe"));
        assert_ne!(contact.key(), ContactKey::new("john", "Doe"));
    }

    #[test]
    fn listing_lines() {
        let contact = sample();
        assert_eq!(
            contact.summary_line(),
            "Name: John Doe, Phone: 5123456789, Email: john@gmail.com, Address: 1 Main St, City: Austin, State: Texas"
        );
        assert_eq!(
            contact.brief_line(),
            "Name: John Doe, Phone: 5123456789, Email: john@gmail.com"
        );
    }
}
