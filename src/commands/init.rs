use crate::commands::Out;
use crate::{Config, Result};
use anyhow::Context;
use std::path::Path;

/// Creates the data directory, if needed, and writes a `config.json` with the default storage
/// locations. Existing collections are left alone.
///
/// # Errors
/// - Returns an error if any file operations fail.
pub fn init(home: &Path) -> Result<Out<()>> {
    let config = Config::create(home).context("Unable to create the data directory and config")?;
    Ok(format!(
        "Wrote default configuration to {}",
        config.config_path().display()
    )
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("home");
        let out = init(&home).unwrap();
        assert!(out.message().contains("config.json"));
        assert!(home.join("config.json").is_file());
    }
}
