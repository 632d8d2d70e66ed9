//! Contact command handlers.

use crate::commands::Out;
use crate::error::{typed, ErrorType};
use crate::model::{Contact, Record};
use crate::{Config, Result};

/// Adds a contact. Names, phones and emails are not required to be unique.
pub fn add_contact(config: &Config, name: &str, phone: &str, email: &str) -> Result<Out<Contact>> {
    let contact = config
        .store::<Contact>()
        .create_with(|id| Contact::new(id, name, phone, email))?;
    Ok(Out::new(
        format!("Contact added with ID {}", contact.id),
        contact,
    ))
}

/// Finds the first contact whose name or phone number is exactly `query`.
///
/// # Errors
/// - `ErrorType::NotFound` if no contact matches.
pub fn search_contacts(config: &Config, query: &str) -> Result<Out<Contact>> {
    let found = config
        .store::<Contact>()
        .find_first(|c| c.matches(query))?;
    match found {
        Some(contact) => Ok(Out::new(contact.line(), contact)),
        None => Err(typed(
            ErrorType::NotFound,
            format!("No contact named or numbered '{query}'"),
        )),
    }
}
