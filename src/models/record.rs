//! Record model: one contact and its phone numbers.

use crate::domain::{ContactName, PhoneNumber, ValidationError};
use std::fmt;

/// A single contact in the address book.
///
/// The name is fixed at creation. Phone numbers keep the order they were
/// added in, and the same number may appear more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
}

impl Record {
    /// Create a record with no phone numbers.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
        }
    }

    /// The contact name this record is keyed by.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Validate `phone` and append it.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// Returns `true` if a number was removed.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        match self.position(phone) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// Returns `Ok(false)` when `old` is not on the record; `new` is only
    /// validated once a match is found.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `new` is malformed. The
    /// record is left unchanged in that case.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let Some(index) = self.position(old) else {
            return Ok(false);
        };

        self.phones[index] = PhoneNumber::new(new)?;
        Ok(true)
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}
