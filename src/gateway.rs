//! Loading and saving whole collections of records as JSON files.
//!
//! Every call reads or rewrites the entire file. Nothing is cached between calls.

use crate::error::{ErrorType, IntoResult};
use crate::{utils, Result};
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::Path;
use tracing::trace;

const INDENT: &[u8] = b"    ";

/// Loads the collection stored at `path`. A missing file is an empty collection.
///
/// # Errors
/// - `ErrorType::Io` if the file exists but cannot be read.
/// - `ErrorType::Parse` if the content is not a JSON array of records.
pub fn load<R>(path: &Path) -> Result<Vec<R>>
where
    R: DeserializeOwned,
{
    let content = match utils::read_if_exists(path)? {
        Some(content) => content,
        None => {
            trace!("{} does not exist, starting empty", path.display());
            return Ok(Vec::new());
        }
    };
    let records: Vec<R> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file at {}", path.display()))
        .pub_result(ErrorType::Parse)?;
    trace!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Overwrites `path` with the full collection, as pretty-printed JSON.
///
/// # Errors
/// - `ErrorType::Io` if the file cannot be written.
pub fn save<R>(path: &Path, records: &[R]) -> Result<()>
where
    R: Serialize,
{
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    records
        .serialize(&mut serializer)
        .with_context(|| format!("Unable to serialize records for {}", path.display()))
        .pub_result(ErrorType::Parse)?;
    utils::write(path, buf)?;
    trace!("Saved {} records to {}", records.len(), path.display());
    Ok(())
}
