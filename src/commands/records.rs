//! Handlers shared by every collection: list, delete, export and import.

use crate::commands::{plural, Out};
use crate::error::{typed, ErrorType};
use crate::model::{Contact, Kind, Note, Record, Task, Transaction};
use crate::{Config, Result};
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Lists every record of type `R`, one line each, in stored order.
///
/// An empty collection produces a "No ... found" message and no structure.
pub fn list<R: Record>(config: &Config) -> Result<Out<Vec<String>>> {
    let listing = config.store::<R>().listing()?;
    if listing.is_empty() {
        return Ok(format!("No {} found", R::KIND.noun()).into());
    }
    let lines: Vec<String> = listing.lines().collect();
    Ok(Out::new(lines.join("\n"), lines))
}

/// Deletes every record of type `R` whose identity is `id`.
///
/// # Errors
/// - `ErrorType::NotFound` if no record has that identity. Nothing is written in that case.
pub fn delete<R: Record>(config: &Config, id: &str) -> Result<Out<usize>> {
    let removed = config
        .store::<R>()
        .delete(id)
        .with_context(|| format!("Unable to delete from {}", R::KIND.noun()))?;
    if removed == 0 {
        return Err(typed(
            ErrorType::NotFound,
            format!("No {} with ID '{}'", singular(R::KIND), id.trim()),
        ));
    }
    Ok(Out::new(
        format!("Deleted {}", plural(removed, singular(R::KIND))),
        removed,
    ))
}

/// Writes every record of type `R` to the CSV file `file`, resolved against the data directory.
pub fn export<R: Record>(config: &Config, file: impl AsRef<Path>) -> Result<Out<PathBuf>> {
    let path = config.resolve(file);
    let count = config.store::<R>().export_csv(&path)?;
    Ok(Out::new(
        format!(
            "Exported {} to {}",
            plural(count, singular(R::KIND)),
            path.display()
        ),
        path,
    ))
}

/// Appends every row of the CSV file `file` to the collection of `R`.
///
/// # Errors
/// - `ErrorType::NotFound` if the file does not exist.
/// - `ErrorType::Validation` if a row cannot be read.
pub fn import<R: Record>(config: &Config, file: impl AsRef<Path>) -> Result<Out<usize>> {
    let path = config.resolve(file);
    let count = config.store::<R>().import_csv(&path)?;
    Ok(Out::new(
        format!(
            "Imported {} from {}",
            plural(count, singular(R::KIND)),
            path.display()
        ),
        count,
    ))
}

/// [`list`] for a kind chosen at runtime.
pub fn list_kind(config: &Config, kind: Kind) -> Result<Out<Vec<String>>> {
    match kind {
        Kind::Notes => list::<Note>(config),
        Kind::Tasks => list::<Task>(config),
        Kind::Contacts => list::<Contact>(config),
        Kind::Finance => list::<Transaction>(config),
    }
}

/// [`export`] for a kind chosen at runtime.
pub fn export_kind(config: &Config, kind: Kind, file: &Path) -> Result<Out<PathBuf>> {
    match kind {
        Kind::Notes => export::<Note>(config, file),
        Kind::Tasks => export::<Task>(config, file),
        Kind::Contacts => export::<Contact>(config, file),
        Kind::Finance => export::<Transaction>(config, file),
    }
}

/// [`import`] for a kind chosen at runtime.
pub fn import_kind(config: &Config, kind: Kind, file: &Path) -> Result<Out<usize>> {
    match kind {
        Kind::Notes => import::<Note>(config, file),
        Kind::Tasks => import::<Task>(config, file),
        Kind::Contacts => import::<Contact>(config, file),
        Kind::Finance => import::<Transaction>(config, file),
    }
}

fn singular(kind: Kind) -> &'static str {
    match kind {
        Kind::Notes => "note",
        Kind::Tasks => "task",
        Kind::Contacts => "contact",
        Kind::Finance => "transaction",
    }
}
