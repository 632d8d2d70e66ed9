//! Note command handlers.

use crate::commands::Out;
use crate::model::Note;
use crate::{Config, Result};

/// Adds a note. Its identity is the next free one and its timestamp is the current local time.
pub fn add_note(config: &Config, title: &str, content: &str) -> Result<Out<Note>> {
    let note = config
        .store::<Note>()
        .create_with(|id| Note::new(id, title, content))?;
    Ok(Out::new(
        format!("Note added with ID {}", note.id),
        note,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::test::TestEnv;

    #[test]
    fn test_add_note() {
        let env = TestEnv::new();
        let out = add_note(env.config(), "Идея", "написать письмо").unwrap();
        assert_eq!(out.message(), "Note added with ID 1");
        let listing = list::<Note>(env.config()).unwrap();
        assert!(listing.message().contains("Title: Идея"));
        assert!(env.read("notes.json").unwrap().contains("написать письмо"));
    }
}
