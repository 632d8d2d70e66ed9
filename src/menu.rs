//! The interactive numbered menu.
//!
//! The menu reads one line per prompt from `input` and writes everything meant for the user to
//! `output`. Running out of input at any prompt ends the session cleanly. Failures the user can fix
//! by trying again (bad dates, missing identities, malformed expressions) are printed and the menu
//! keeps going; anything else is returned to the caller.

use crate::commands::{self, NewTask, Out};
use crate::error::{error_type, ErrorType, IntoResult};
use crate::model::{Contact, Note, Record, Task, Transaction};
use crate::{Config, Result};
use serde::Serialize;
use std::fmt::Debug;
use std::io::{BufRead, Write};
use tracing::debug;

const ROOT: &str = "\
Personal assistant
1. Notes
2. Tasks
3. Contacts
4. Finance
5. Calculator
6. Exit";

const NOTES: &str = "\
Notes
1. Add a note
2. View notes
3. Delete a note
4. Export notes to CSV
5. Import notes from CSV
6. Back";

const TASKS: &str = "\
Tasks
1. Add a task
2. View tasks
3. Mark a task as done
4. Delete a task
5. Export tasks to CSV
6. Import tasks from CSV
7. Back";

const CONTACTS: &str = "\
Contacts
1. Add a contact
2. View contacts
3. Search contacts
4. Delete a contact
5. Export contacts to CSV
6. Import contacts from CSV
7. Back";

const FINANCE: &str = "\
Finance
1. Add a transaction
2. View transactions
3. Generate a report
4. Export transactions to CSV
5. Import transactions from CSV
6. Back";

/// Where the session goes after an action.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Flow {
    /// Show the current menu again.
    Stay,
    /// Return to the parent menu.
    Back,
    /// End the session.
    Quit,
}

pub struct Menu<'a, I, O> {
    config: &'a Config,
    input: I,
    output: O,
}

impl<'a, I, O> Menu<'a, I, O>
where
    I: BufRead,
    O: Write,
{
    pub fn new(config: &'a Config, input: I, output: O) -> Self {
        Self {
            config,
            input,
            output,
        }
    }

    /// Runs the root menu until the user exits or the input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let flow = match self.choose(ROOT)?.as_deref() {
                None => Flow::Quit,
                Some("1") => self.notes()?,
                Some("2") => self.tasks()?,
                Some("3") => self.contacts()?,
                Some("4") => self.finance()?,
                Some("5") => self.calculator()?,
                Some("6") => {
                    self.say("Goodbye")?;
                    Flow::Quit
                }
                Some(other) => self.invalid(other)?,
            };
            if flow == Flow::Quit {
                debug!("Leaving the menu");
                return Ok(());
            }
        }
    }

    fn notes(&mut self) -> Result<Flow> {
        loop {
            let flow = match self.choose(NOTES)?.as_deref() {
                None => Flow::Quit,
                Some("1") => match self.ask_all(&["Title", "Content"])? {
                    Some(f) => self.show(commands::add_note(self.config, &f[0], &f[1]))?,
                    None => Flow::Quit,
                },
                Some("2") => self.show(commands::list::<Note>(self.config))?,
                Some("3") => self.delete::<Note>()?,
                Some("4") => self.export::<Note>()?,
                Some("5") => self.import::<Note>()?,
                Some("6") => Flow::Back,
                Some(other) => self.invalid(other)?,
            };
            if flow != Flow::Stay {
                return Ok(flow);
            }
        }
    }

    fn tasks(&mut self) -> Result<Flow> {
        loop {
            let flow = match self.choose(TASKS)?.as_deref() {
                None => Flow::Quit,
                Some("1") => {
                    let labels = [
                        "Title",
                        "Description",
                        "Priority (High/Medium/Low)",
                        "Due date (DD-MM-YYYY)",
                    ];
                    match self.ask_all(&labels)? {
                        Some(mut f) => {
                            let task = NewTask {
                                due_date: f.remove(3),
                                priority: f.remove(2),
                                description: f.remove(1),
                                title: f.remove(0),
                            };
                            self.show(commands::add_task(self.config, task))?
                        }
                        None => Flow::Quit,
                    }
                }
                Some("2") => self.show(commands::list::<Task>(self.config))?,
                Some("3") => match self.ask("ID of the completed task")? {
                    Some(id) => self.show(commands::mark_task_done(self.config, &id))?,
                    None => Flow::Quit,
                },
                Some("4") => self.delete::<Task>()?,
                Some("5") => self.export::<Task>()?,
                Some("6") => self.import::<Task>()?,
                Some("7") => Flow::Back,
                Some(other) => self.invalid(other)?,
            };
            if flow != Flow::Stay {
                return Ok(flow);
            }
        }
    }

    fn contacts(&mut self) -> Result<Flow> {
        loop {
            let flow = match self.choose(CONTACTS)?.as_deref() {
                None => Flow::Quit,
                Some("1") => match self.ask_all(&["Name", "Phone", "Email"])? {
                    Some(f) => {
                        self.show(commands::add_contact(self.config, &f[0], &f[1], &f[2]))?
                    }
                    None => Flow::Quit,
                },
                Some("2") => self.show(commands::list::<Contact>(self.config))?,
                Some("3") => match self.ask("Name or phone")? {
                    Some(query) => self.show(commands::search_contacts(self.config, &query))?,
                    None => Flow::Quit,
                },
                Some("4") => self.delete::<Contact>()?,
                Some("5") => self.export::<Contact>()?,
                Some("6") => self.import::<Contact>()?,
                Some("7") => Flow::Back,
                Some(other) => self.invalid(other)?,
            };
            if flow != Flow::Stay {
                return Ok(flow);
            }
        }
    }

    fn finance(&mut self) -> Result<Flow> {
        loop {
            let flow = match self.choose(FINANCE)?.as_deref() {
                None => Flow::Quit,
                Some("1") => {
                    let labels = [
                        "Description",
                        "Amount (negative for an expense)",
                        "Date (DD-MM-YYYY)",
                        "Category",
                    ];
                    match self.ask_all(&labels)? {
                        Some(f) => self.show(commands::add_transaction(
                            self.config,
                            &f[0],
                            &f[1],
                            &f[2],
                            &f[3],
                        ))?,
                        None => Flow::Quit,
                    }
                }
                Some("2") => self.show(commands::list::<Transaction>(self.config))?,
                Some("3") => {
                    match self.ask_all(&["Start date (DD-MM-YYYY)", "End date (DD-MM-YYYY)"])? {
                        Some(f) => self.show(commands::report(self.config, &f[0], &f[1]))?,
                        None => Flow::Quit,
                    }
                }
                Some("4") => self.export::<Transaction>()?,
                Some("5") => self.import::<Transaction>()?,
                Some("6") => Flow::Back,
                Some(other) => self.invalid(other)?,
            };
            if flow != Flow::Stay {
                return Ok(flow);
            }
        }
    }

    fn calculator(&mut self) -> Result<Flow> {
        match self.ask("Expression")? {
            Some(expression) => {
                self.show(commands::calculate(&expression))?;
                Ok(Flow::Back)
            }
            None => Ok(Flow::Quit),
        }
    }

    fn delete<R: Record>(&mut self) -> Result<Flow> {
        match self.ask("ID to delete")? {
            Some(id) => self.show(commands::delete::<R>(self.config, &id)),
            None => Ok(Flow::Quit),
        }
    }

    fn export<R: Record>(&mut self) -> Result<Flow> {
        match self.ask("CSV file to export to")? {
            Some(file) => self.show(commands::export::<R>(self.config, file.trim())),
            None => Ok(Flow::Quit),
        }
    }

    fn import<R: Record>(&mut self) -> Result<Flow> {
        match self.ask("CSV file to import from")? {
            Some(file) => self.show(commands::import::<R>(self.config, file.trim())),
            None => Ok(Flow::Quit),
        }
    }

    /// Prints the outcome of a command. Recoverable failures are printed instead of returned.
    fn show<T>(&mut self, result: Result<Out<T>>) -> Result<Flow>
    where
        T: Serialize + Clone + Debug,
    {
        match result {
            Ok(out) => {
                self.say(out.message())?;
                Ok(Flow::Stay)
            }
            Err(e) => match error_type(&e) {
                Some(t) if t.is_recoverable() => {
                    debug!("Recovered from {t}: {e:#}");
                    self.say(&format!("{e:#}"))?;
                    Ok(Flow::Stay)
                }
                _ => Err(e),
            },
        }
    }

    fn invalid(&mut self, choice: &str) -> Result<Flow> {
        self.say(&format!("Invalid choice '{choice}', try again"))?;
        Ok(Flow::Stay)
    }

    /// Prints `menu` and reads the user's choice. `None` means the input has ended.
    fn choose(&mut self, menu: &str) -> Result<Option<String>> {
        self.say(&format!("\n{menu}"))?;
        Ok(self.ask("Choose an action")?.map(|s| s.trim().to_string()))
    }

    /// Asks each question in turn. `None` if the input ends before every answer is given.
    fn ask_all(&mut self, labels: &[&str]) -> Result<Option<Vec<String>>> {
        let mut answers = Vec::with_capacity(labels.len());
        for label in labels {
            match self.ask(label)? {
                Some(answer) => answers.push(answer),
                None => return Ok(None),
            }
        }
        Ok(Some(answers))
    }

    /// Prompts with `label` and reads one line without its line terminator.
    fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}: ").pub_result(ErrorType::Io)?;
        self.output.flush().pub_result(ErrorType::Io)?;
        let mut line = String::new();
        let n = self.input.read_line(&mut line).pub_result(ErrorType::Io)?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}").pub_result(ErrorType::Io)
    }
}
