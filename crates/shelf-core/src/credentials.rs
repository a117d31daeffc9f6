//! Persisted session credentials.
//!
//! Stores the session token in `${SHELF_HOME}/credentials.json` with
//! restricted permissions (0600). The token is never logged or displayed
//! in full.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::api::types::UserRecord;
use crate::config::paths;

/// Persisted session credential.
///
/// The user snapshot is stored alongside the token so surfaces can show
/// who is logged in before the startup profile fetch completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Session token sent as `Authorization: Token <value>`.
    pub token: String,
    /// User snapshot from the last successful login.
    pub user: UserRecord,
}

impl Credentials {
    /// Returns the path to the credentials file.
    pub fn path() -> PathBuf {
        paths::credentials_path()
    }

    /// Loads the credentials from the default location.
    /// Returns `None` if the file doesn't exist.
    pub fn load() -> Result<Option<Self>> {
        Self::load_from(&Self::path())
    }

    /// Loads the credentials from a specific path.
    ///
    /// A missing file is a normal first run (`Ok(None)`); an unreadable or
    /// corrupt file is an error for the caller to handle.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read credentials from {}", path.display()))?;

        let credentials = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse credentials from {}", path.display()))?;
        Ok(Some(credentials))
    }

    /// Saves the credentials to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path())
    }

    /// Saves the credentials to a specific path with restricted
    /// permissions (0600).
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents =
            serde_json::to_string_pretty(self).context("Failed to serialize credentials")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(path)
                .with_context(|| format!("Failed to open {} for writing", path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(path, contents)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }

        Ok(())
    }

    /// Removes the credentials file from the default location.
    pub fn clear() -> Result<()> {
        Self::clear_at(&Self::path())
    }

    /// Removes the credentials file at a specific path. Idempotent.
    pub fn clear_at(path: &Path) -> Result<()> {
        if path.exists() {
            fs::remove_file(path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
        Ok(())
    }
}
