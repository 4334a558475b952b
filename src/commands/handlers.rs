//! One handler per command verb.
//!
//! Handlers validate their arguments, read or mutate the address book, and
//! return the response text or a `CommandError`. They never print.

use crate::domain::ContactName;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use tracing::debug;

pub const GREETING: &str = "How can I help you?";
pub const EMPTY_BOOK_MESSAGE: &str = "No contacts saved.";

/// `add <name> <phone>`: append to an existing contact or create a new one.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult {
    let [name, phone, ..] = args else {
        return Err(CommandError::MissingArguments("name or phone number"));
    };

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        debug!(name = %name, "Phone appended to existing contact");
        return Ok("Phone number added to the existing contact.".to_string());
    }

    // Validate the phone before inserting so a bad number leaves no empty record.
    let mut record = Record::new(ContactName::new(name.as_str())?);
    record.add_phone(phone)?;
    book.add_record(record);

    debug!(name = %name, "Contact created");
    Ok("Contact added.".to_string())
}

/// `change <name> <old> <new>`: replace one phone number on a contact.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult {
    let [name, old_phone, new_phone, ..] = args else {
        return Err(CommandError::MissingArguments(
            "name, old phone, or new phone number",
        ));
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;

    if record.edit_phone(old_phone, new_phone)? {
        Ok("Contact phone updated.".to_string())
    } else {
        Err(CommandError::PhoneNotFound(old_phone.clone()))
    }
}

/// `phone <name>`: render one contact.
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult {
    let name = args
        .first()
        .ok_or(CommandError::MissingArguments("name"))?;

    book.find(name)
        .map(Record::to_string)
        .ok_or_else(|| CommandError::ContactNotFound(name.clone()))
}

/// `all`: render every contact, one per line.
pub fn show_all(book: &AddressBook) -> CommandResult {
    if book.is_empty() {
        return Ok(EMPTY_BOOK_MESSAGE.to_string());
    }

    Ok(book
        .iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `hello`: fixed greeting.
pub fn greet() -> CommandResult {
    Ok(GREETING.to_string())
}
