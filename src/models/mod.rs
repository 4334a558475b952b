//! Data models for the address book.
//!
//! A `Record` holds one contact's phone numbers; the `AddressBook` holds
//! every record of the running session.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::Record;
