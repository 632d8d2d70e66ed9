//! Task command handlers.

use crate::commands::Out;
use crate::error::{typed, ErrorType};
use crate::model::Task;
use crate::{Config, Result};
use anyhow::Context;

/// The user-supplied fields of a new task.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: String,
    /// Must be a `DD-MM-YYYY` date.
    pub due_date: String,
}

/// Adds a task that is not done yet.
///
/// # Errors
/// - `ErrorType::Validation` if the due date is not a valid `DD-MM-YYYY` date. The task file is
///   not touched.
pub fn add_task(config: &Config, args: NewTask) -> Result<Out<Task>> {
    let task = config.store::<Task>().create_with(|id| {
        Task::new(
            id,
            args.title,
            args.description,
            args.priority,
            args.due_date,
        )
    })?;
    Ok(Out::new(format!("Task added with ID {}", task.id), task))
}

/// Marks the first task with identity `id` as done.
///
/// # Errors
/// - `ErrorType::NotFound` if there is no such task. The task file is not touched.
pub fn mark_task_done(config: &Config, id: &str) -> Result<Out<Task>> {
    let updated = config
        .store::<Task>()
        .update_first(id, Task::mark_done)
        .context("Unable to update tasks")?;
    match updated {
        Some(task) => Ok(Out::new(
            format!("Task {} marked as done", task.id),
            task,
        )),
        None => Err(typed(
            ErrorType::NotFound,
            format!("No task with ID '{}'", id.trim()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{delete, list};
    use crate::error::error_type;
    use crate::model::Status;
    use crate::test::TestEnv;

    fn buy_milk(due_date: &str) -> NewTask {
        NewTask {
            title: "Buy milk".to_string(),
            description: "2 litres".to_string(),
            priority: "High".to_string(),
            due_date: due_date.to_string(),
        }
    }

    #[test]
    fn test_task_lifecycle() {
        let env = TestEnv::new();
        let out = add_task(env.config(), buy_milk("01-01-2099")).unwrap();
        let id = out.structure().unwrap().id.to_string();

        let listing = list::<Task>(env.config()).unwrap();
        assert!(listing.message().contains("Title: Buy milk"));
        assert!(listing.message().contains("Status: not done"));

        let done = mark_task_done(env.config(), &id).unwrap();
        assert_eq!(done.structure().unwrap().status(), Status::Done);
        let listing = list::<Task>(env.config()).unwrap();
        assert!(listing.message().contains("Status: done"));

        delete::<Task>(env.config(), &id).unwrap();
        let listing = list::<Task>(env.config()).unwrap();
        assert_eq!(listing.message(), "No tasks found");
    }

    #[test]
    fn test_invalid_due_date_is_rejected() {
        let env = TestEnv::new();
        add_task(env.config(), buy_milk("01-01-2099")).unwrap();
        let before = env.read("tasks.json").unwrap();

        let err = add_task(env.config(), buy_milk("31-13-2024")).unwrap_err();
        assert_eq!(error_type(&err), Some(ErrorType::Validation));
        assert_eq!(env.read("tasks.json").unwrap(), before);
    }

    #[test]
    fn test_invalid_due_date_on_empty_store() {
        let env = TestEnv::new();
        assert!(add_task(env.config(), buy_milk("2099-01-01")).is_err());
        assert!(env.read("tasks.json").is_none());
    }

    #[test]
    fn test_mark_done_missing() {
        let env = TestEnv::new();
        add_task(env.config(), buy_milk("01-01-2099")).unwrap();
        let before = env.read("tasks.json").unwrap();
        let err = mark_task_done(env.config(), "7").unwrap_err();
        assert_eq!(error_type(&err), Some(ErrorType::NotFound));
        assert_eq!(env.read("tasks.json").unwrap(), before);
    }

    #[test]
    fn test_mark_done_first_match_only() {
        let env = TestEnv::new();
        let store = env.config().store::<Task>();
        let a = Task::new(crate::model::Id::new(4), "a", "", "", "01-01-2099");
        let b = Task::new(crate::model::Id::new(4), "b", "", "", "01-01-2099");
        store.save(&[a, b]).unwrap();
        mark_task_done(env.config(), "4").unwrap();
        let tasks = store.load().unwrap();
        assert_eq!(tasks[0].status(), Status::Done);
        assert_eq!(tasks[1].status(), Status::NotDone);
    }
}
