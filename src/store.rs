//! A generic store for one collection of records.
//!
//! `Store<R>` holds nothing but the location of its file. Every operation loads the whole
//! collection through the gateway, works on it in memory, and writes it back if it changed.

use crate::error::{typed, ErrorType, IntoResult};
use crate::gateway;
use crate::model::{next_id, Id, Record};
use crate::Result;
use anyhow::Context;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Mediates between an in-memory collection of `R` and the JSON file it is persisted to.
#[derive(Debug, Clone)]
pub struct Store<R> {
    path: PathBuf,
    _record: PhantomData<R>,
}

impl<R> Store<R>
where
    R: Record,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the full collection. A missing file is an empty collection.
    pub fn load(&self) -> Result<Vec<R>> {
        gateway::load(&self.path)
    }

    /// Overwrites the file with `records`.
    pub fn save(&self, records: &[R]) -> Result<()> {
        gateway::save(&self.path, records)
    }

    /// Builds a record with the next free identity, validates it, and appends it to the
    /// collection. Nothing is written if validation fails.
    pub fn create_with<F>(&self, build: F) -> Result<R>
    where
        F: FnOnce(Id) -> R,
    {
        let mut records = self.load()?;
        let record = build(next_id(&records)?);
        record.validate()?;
        records.push(record.clone());
        self.save(&records)?;
        debug!("Added a record to {}", self.path.display());
        Ok(record)
    }

    /// Validates `record` and appends it to the collection. Nothing is written if validation fails.
    pub fn append(&self, record: R) -> Result<R> {
        record.validate()?;
        let mut records = self.load()?;
        records.push(record.clone());
        self.save(&records)?;
        debug!("Added a record to {}", self.path.display());
        Ok(record)
    }

    /// Loads the collection for display.
    pub fn listing(&self) -> Result<Listing<R>> {
        Ok(Listing {
            records: self.load()?,
        })
    }

    /// Removes every record whose identity equals `id` and returns how many were removed. The
    /// file is only rewritten when something was removed.
    pub fn delete(&self, id: &str) -> Result<usize> {
        let records = self.load()?;
        let before = records.len();
        let kept: Vec<R> = records.into_iter().filter(|r| !r.has_id(id)).collect();
        let removed = before - kept.len();
        if removed > 0 {
            self.save(&kept)?;
        }
        debug!("Removed {removed} records with ID {id} from {}", self.path.display());
        Ok(removed)
    }

    /// Applies `update` to the first record whose identity equals `id` and persists the
    /// collection. Returns the updated record, or `None` (and writes nothing) if there was no match.
    pub fn update_first<F>(&self, id: &str, update: F) -> Result<Option<R>>
    where
        F: FnOnce(&mut R),
    {
        let mut records = self.load()?;
        let found = match records.iter_mut().find(|r| r.has_id(id)) {
            Some(record) => {
                update(record);
                record.clone()
            }
            None => return Ok(None),
        };
        self.save(&records)?;
        Ok(Some(found))
    }

    /// Returns the first record for which `predicate` is true.
    pub fn find_first<P>(&self, predicate: P) -> Result<Option<R>>
    where
        P: Fn(&R) -> bool,
    {
        Ok(self.load()?.into_iter().find(|r| predicate(r)))
    }

    /// Writes the whole collection to a CSV file at `path` and returns the number of rows.
    pub fn export_csv(&self, path: &Path) -> Result<usize> {
        let records = self.load()?;
        write_csv(path, &records)?;
        Ok(records.len())
    }

    /// Reads every row of the CSV file at `path` and appends them to the collection. Rows are
    /// added as they are, even when their identity already exists. Returns the number of rows.
    ///
    /// # Errors
    /// - `ErrorType::NotFound` if `path` does not exist. The collection is not touched.
    /// - `ErrorType::Validation` if any row cannot be read. The collection is not touched.
    pub fn import_csv(&self, path: &Path) -> Result<usize> {
        let imported = read_csv::<R>(path)?;
        let mut records = self.load()?;
        let count = imported.len();
        records.extend(imported);
        self.save(&records)?;
        debug!("Imported {count} rows from {}", path.display());
        Ok(count)
    }
}

/// A loaded collection, ready to be shown line by line.
#[derive(Debug, Clone)]
pub struct Listing<R> {
    records: Vec<R>,
}

impl<R> Listing<R>
where
    R: Record,
{
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// One formatted line per record, in stored order.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.records.iter().map(Record::line)
    }
}

/// Writes `records` as CSV: a header row, always, then one row per record.
pub fn write_csv<R>(path: &Path, records: &[R]) -> Result<()>
where
    R: Record,
{
    let write = || -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_path(path)?;
        writer.write_record(R::HEADERS)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    };
    write()
        .with_context(|| format!("Unable to write CSV file {}", path.display()))
        .pub_result(ErrorType::Io)
}

/// Reads all rows of a CSV file with a header row into records.
pub fn read_csv<R>(path: &Path) -> Result<Vec<R>>
where
    R: Record,
{
    if !path.is_file() {
        return Err(typed(
            ErrorType::NotFound,
            format!("The CSV file '{}' does not exist", path.display()),
        ));
    }
    let mut reader = csv::ReaderBuilder::new()
        .from_path(path)
        .with_context(|| format!("Unable to open CSV file {}", path.display()))
        .pub_result(ErrorType::Io)?;
    reader
        .deserialize::<R>()
        .collect::<std::result::Result<Vec<R>, csv::Error>>()
        .with_context(|| format!("Unable to read {} from {}", R::KIND.noun(), path.display()))
        .pub_result(ErrorType::Validation)
}
