//! Domain value objects and field validators.
//!
//! Contact names and phone numbers are validated once, at construction, so a
//! `Record` can never hold a malformed value.

pub mod contact_name;
pub mod errors;
pub mod phone;

pub use contact_name::ContactName;
pub use errors::ValidationError;
pub use phone::{validate_phone, PhoneNumber};
