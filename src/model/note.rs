use crate::date;
use crate::model::{Id, Kind, Record};
use serde::{Deserialize, Serialize};

/// A free-form note with a title.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub(crate) id: Id,
    pub(crate) title: String,
    pub(crate) content: String,
    /// When the note was created, in `DD-MM-YYYY HH:MM:SS` form.
    pub(crate) timestamp: String,
}

impl Note {
    pub fn new(id: Id, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            timestamp: date::now_timestamp(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

impl Record for Note {
    const KIND: Kind = Kind::Notes;
    const HEADERS: &'static [&'static str] = &["id", "title", "content", "timestamp"];

    fn id(&self) -> Option<Id> {
        Some(self.id)
    }

    fn line(&self) -> String {
        format!(
            "ID: {} | Title: {} | Content: {} | Date: {}",
            self.id, self.title, self.content, self.timestamp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_note() {
        let note = Note::new(Id::new(5), "Groceries", "milk, eggs");
        assert_eq!(note.id(), Some(Id::new(5)));
        assert_eq!(note.title(), "Groceries");
        assert!(date::is_valid(&note.timestamp()[..10]));
    }

    #[test]
    fn test_json_key_order() {
        let mut note = Note::new(Id::new(1), "t", "c");
        note.timestamp = "01-02-2024 10:00:00".to_string();
        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"title":"t","content":"c","timestamp":"01-02-2024 10:00:00"}"#
        );
    }

    #[test]
    fn test_line() {
        let mut note = Note::new(Id::new(3), "Заголовок", "Текст");
        note.timestamp = "01-02-2024 10:00:00".to_string();
        assert_eq!(
            note.line(),
            "ID: 3 | Title: Заголовок | Content: Текст | Date: 01-02-2024 10:00:00"
        );
    }
}
