//! Types that represent the core data model: `Note`, `Task`, `Contact` and `Transaction`, plus the
//! `Record` trait that lets one generic store persist all of them.
mod amount;
mod contact;
mod note;
mod task;
mod transaction;

pub use amount::{Amount, AmountError};
pub use contact::Contact;
pub use note::Note;
pub use task::{Status, Task};
pub use transaction::Transaction;

use crate::error::{typed, ErrorType};
use crate::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};
use std::num::ParseIntError;
use std::str::FromStr;

/// The four kinds of collection the assistant manages. Each is persisted to its own file.
#[derive(
    Debug,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Notes,
    Tasks,
    Contacts,
    Finance,
}

serde_plain::derive_display_from_serialize!(Kind);
serde_plain::derive_fromstr_from_deserialize!(Kind);

impl Kind {
    /// The file name used when the configuration does not say otherwise.
    pub fn default_file(&self) -> &'static str {
        match self {
            Kind::Notes => "notes.json",
            Kind::Tasks => "tasks.json",
            Kind::Contacts => "contacts.json",
            Kind::Finance => "finance.json",
        }
    }

    /// A human word for the records of this kind, e.g. "notes" or "transactions".
    pub fn noun(&self) -> &'static str {
        match self {
            Kind::Notes => "notes",
            Kind::Tasks => "tasks",
            Kind::Contacts => "contacts",
            Kind::Finance => "transactions",
        }
    }
}

/// The identity of a note, task or contact.
///
/// Identities are assigned from a counter over the existing collection (see [`next_id`]) rather
/// than from the clock, so records created in quick succession never share one.
#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Id(u64);

impl Id {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for Id {
    type Err = ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

impl From<u64> for Id {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A flat record that can be stored in a JSON collection and written as a CSV row.
///
/// The serde field order of the implementing struct is the persisted key order and must match
/// `HEADERS`.
pub trait Record: Serialize + DeserializeOwned + Clone + Debug {
    /// Which collection this record belongs to.
    const KIND: Kind;

    /// The CSV header row, in column order.
    const HEADERS: &'static [&'static str];

    /// The identity used for delete and update. `None` for records that have no identity.
    fn id(&self) -> Option<Id> {
        None
    }

    /// A single line describing this record for listings.
    fn line(&self) -> String;

    /// Checks the fields that carry a format. Called after construction and before persisting.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Compares the identity with an identity typed by the user, as strings.
    fn has_id(&self, id: &str) -> bool {
        match self.id() {
            Some(own) => own.to_string() == id.trim(),
            None => false,
        }
    }
}

/// Returns the identity that follows the largest identity found in `records`, starting from 1.
///
/// # Errors
/// - `ErrorType::Validation` if the largest identity is already `u64::MAX`.
pub fn next_id<R: Record>(records: &[R]) -> Result<Id> {
    let max = records
        .iter()
        .filter_map(Record::id)
        .map(|id| id.value())
        .max();
    match max {
        None => Ok(Id(1)),
        Some(max) => max.checked_add(1).map(Id).ok_or_else(|| {
            typed(
                ErrorType::Validation,
                format!("No identity is left after {max} for new {}", R::KIND.noun()),
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display_and_parse() {
        assert_eq!(Kind::Finance.to_string(), "finance");
        assert_eq!(Kind::from_str("tasks").unwrap(), Kind::Tasks);
        assert!(Kind::from_str("widgets").is_err());
    }

    #[test]
    fn test_id_parse() {
        assert_eq!(Id::from_str(" 42 ").unwrap(), Id::new(42));
        assert!(Id::from_str("forty-two").is_err());
    }

    #[test]
    fn test_next_id_empty() {
        let notes: Vec<Note> = Vec::new();
        assert_eq!(next_id(&notes).unwrap(), Id::new(1));
    }

    #[test]
    fn test_next_id_follows_max() {
        let notes = vec![
            Note::new(Id::new(1709510400), "a", "b"),
            Note::new(Id::new(3), "c", "d"),
        ];
        assert_eq!(next_id(&notes).unwrap(), Id::new(1709510401));
    }

    #[test]
    fn test_next_id_ignores_records_without_identity() {
        let txns = vec![Transaction::new("x", Amount::default(), "01-01-2024", "y")];
        assert_eq!(next_id(&txns).unwrap(), Id::new(1));
    }

    #[test]
    fn test_next_id_exhausted() {
        let notes = vec![Note::new(Id::new(u64::MAX), "last", "")];
        let err = next_id(&notes).unwrap_err();
        assert_eq!(
            crate::error::error_type(&err),
            Some(ErrorType::Validation)
        );
        let notes = vec![Note::new(Id::new(u64::MAX - 1), "almost", "")];
        assert_eq!(next_id(&notes).unwrap(), Id::new(u64::MAX));
    }

    #[test]
    fn test_has_id_string_compare() {
        let note = Note::new(Id::new(17), "t", "c");
        assert!(note.has_id("17"));
        assert!(note.has_id(" 17\n"));
        assert!(!note.has_id("017"));
        assert!(!note.has_id("18"));
    }
}
