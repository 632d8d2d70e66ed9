use crate::model::{Id, Kind, Record};
use serde::{Deserialize, Serialize};

/// A person's name with a phone number and an email address.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub(crate) id: Id,
    pub(crate) name: String,
    pub(crate) phone: String,
    pub(crate) email: String,
}

impl Contact {
    pub fn new(
        id: Id,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// True if `query` is exactly this contact's name or phone number.
    pub fn matches(&self, query: &str) -> bool {
        self.name == query || self.phone == query
    }
}

impl Record for Contact {
    const KIND: Kind = Kind::Contacts;
    const HEADERS: &'static [&'static str] = &["id", "name", "phone", "email"];

    fn id(&self) -> Option<Id> {
        Some(self.id)
    }

    fn line(&self) -> String {
        format!(
            "ID: {} | Name: {} | Phone: {} | Email: {}",
            self.id, self.name, self.phone, self.email
        )
    }
}
