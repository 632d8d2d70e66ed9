use crate::error::{typed, ErrorType};
use crate::model::{Id, Kind, Record};
use crate::{date, Result};
use serde::{Deserialize, Serialize};

/// Whether a task has been completed. Persisted as `"not done"` or `"done"`.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    #[serde(rename = "not done")]
    NotDone,
    #[serde(rename = "done")]
    Done,
}

serde_plain::derive_display_from_serialize!(Status);
serde_plain::derive_fromstr_from_deserialize!(Status);

/// Something to do, with a free-form priority and a due date.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub(crate) id: Id,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) done: Status,
    pub(crate) priority: String,
    /// Expected in `DD-MM-YYYY` form, but not guaranteed until `validate` has been called.
    pub(crate) due_date: String,
    pub(crate) created_at: String,
}

impl Task {
    /// Creates a task that is not done yet.
    pub fn new(
        id: Id,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            done: Status::NotDone,
            priority: priority.into(),
            due_date: due_date.into(),
            created_at: date::now_timestamp(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn status(&self) -> Status {
        self.done
    }

    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    pub fn mark_done(&mut self) {
        self.done = Status::Done;
    }
}

impl Record for Task {
    const KIND: Kind = Kind::Tasks;
    const HEADERS: &'static [&'static str] = &[
        "id",
        "title",
        "description",
        "done",
        "priority",
        "due_date",
        "created_at",
    ];

    fn id(&self) -> Option<Id> {
        Some(self.id)
    }

    fn line(&self) -> String {
        format!(
            "ID: {} | Title: {} | Status: {} | Priority: {} | Description: {} | Due: {} | Created: {}",
            self.id,
            self.title,
            self.done,
            self.priority,
            self.description,
            self.due_date,
            self.created_at
        )
    }

    fn validate(&self) -> Result<()> {
        if !date::is_valid(&self.due_date) {
            return Err(typed(
                ErrorType::Validation,
                format!(
                    "Invalid due date '{}', expected DD-MM-YYYY. The task was not added",
                    self.due_date
                ),
            ));
        }
        Ok(())
    }
}
