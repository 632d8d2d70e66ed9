//! Configuration file handling.
//!
//! The data directory (by default the current working directory) may contain a `config.json`
//! which says where each collection is stored. When it is absent, every collection is stored in
//! the data directory under its default file name, e.g. `notes.json`.

use crate::error::{typed, ErrorType, IntoResult};
use crate::model::{Kind, Record};
use crate::store::Store;
use crate::{utils, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_NAME: &str = "assistant";
const CONFIG_VERSION: u8 = 1;
const CONFIG_JSON: &str = "config.json";

/// The `Config` object represents the configuration of the app. You instantiate it by providing
/// the path to the data directory and from there it loads `config.json`, if present. It resolves
/// the storage location of every collection and of generated reports.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
    config_path: PathBuf,
    config_file: ConfigFile,
}

impl Config {
    /// Creates the data directory if needed and writes a `config.json` with default settings,
    /// replacing any existing one.
    ///
    /// # Errors
    /// - Returns an error if any file operations fail.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = dir.into();
        utils::make_dir(&maybe_relative).context("Unable to create the data directory")?;
        let root = utils::canonicalize(&maybe_relative)?;
        let config_path = root.join(CONFIG_JSON);
        let config_file = ConfigFile::default();
        config_file.save(&config_path)?;
        Ok(Self {
            root,
            config_path,
            config_file,
        })
    }

    /// This will
    /// - validate that the data directory exists
    /// - load `config.json` if it exists, otherwise use the defaults
    /// - return the loaded configuration object
    pub fn load(dir: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = dir.into();
        if !maybe_relative.is_dir() {
            return Err(typed(
                ErrorType::Config,
                format!(
                    "The data directory '{}' does not exist",
                    maybe_relative.display()
                ),
            ));
        }
        let root = utils::canonicalize(&maybe_relative)?;
        let config_path = root.join(CONFIG_JSON);
        let config_file = if config_path.is_file() {
            ConfigFile::load(&config_path)?
        } else {
            debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            ConfigFile::default()
        };
        Ok(Self {
            root,
            config_path,
            config_file,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// The file where collections of `kind` are stored.
    pub fn path_for(&self, kind: Kind) -> PathBuf {
        self.resolve(self.config_file.files.get(kind))
    }

    /// The directory where report files are written.
    pub fn reports_dir(&self) -> PathBuf {
        self.resolve(&self.config_file.files.reports)
    }

    /// A store for records of type `R` at the configured location.
    pub fn store<R: Record>(&self) -> Store<R> {
        Store::new(self.path_for(R::KIND))
    }

    /// Resolves a user-supplied path, such as a CSV file name, against the data directory.
    pub fn resolve(&self, p: impl AsRef<Path>) -> PathBuf {
        let p = p.as_ref();
        if p.is_absolute() {
            return p.to_path_buf();
        }
        self.root.join(p)
    }
}

/// Represents the serialization and deserialization format of the configuration file.
///
/// Example configuration:
/// ```json
/// {
///   "app_name": "assistant",
///   "config_version": 1,
///   "files": {
///     "notes": "notes.json",
///     "tasks": "tasks.json",
///     "contacts": "contacts.json",
///     "finance": "finance.json",
///     "reports": "reports"
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
struct ConfigFile {
    /// Application name, should always be "assistant"
    app_name: String,

    /// Configuration file version
    config_version: u8,

    /// Storage locations, relative to the data directory or absolute
    #[serde(default)]
    files: Files,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            files: Files::default(),
        }
    }
}

impl ConfigFile {
    /// Loads a ConfigFile from the specified path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or names another application.
    fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))
            .pub_result(ErrorType::Io)?;

        let config: ConfigFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))
            .pub_result(ErrorType::Config)?;

        if config.app_name != APP_NAME {
            return Err(typed(
                ErrorType::Config,
                format!(
                    "Invalid app_name in config file: expected '{}', got '{}'",
                    APP_NAME, config.app_name
                ),
            ));
        }

        Ok(config)
    }

    /// Saves the ConfigFile to the specified path.
    fn save(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self).context("Unable to serialize config")?;
        utils::write(path, data).context("Unable to write config file")
    }
}

/// Where each collection lives. Any entry missing from the config file takes its default.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(default)]
struct Files {
    notes: PathBuf,
    tasks: PathBuf,
    contacts: PathBuf,
    finance: PathBuf,
    reports: PathBuf,
}

impl Default for Files {
    fn default() -> Self {
        Self {
            notes: Kind::Notes.default_file().into(),
            tasks: Kind::Tasks.default_file().into(),
            contacts: Kind::Contacts.default_file().into(),
            finance: Kind::Finance.default_file().into(),
            reports: PathBuf::from("."),
        }
    }
}

impl Files {
    fn get(&self, kind: Kind) -> &Path {
        match kind {
            Kind::Notes => &self.notes,
            Kind::Tasks => &self.tasks,
            Kind::Contacts => &self.contacts,
            Kind::Finance => &self.finance,
        }
    }
}
