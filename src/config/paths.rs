//! Path management for fintrack
//!
//! Provides XDG-compliant path resolution for the data file.
//!
//! ## Path Resolution Order
//!
//! 1. `FINTRACK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_DATA_HOME/fintrack` or `~/.local/share/fintrack`
//! 3. Windows: `%APPDATA%\fintrack`

use std::path::PathBuf;

use crate::error::FintrackError;

/// Manages all paths used by fintrack
#[derive(Debug, Clone)]
pub struct FintrackPaths {
    /// Base directory for all fintrack data
    base_dir: PathBuf,
}

impl FintrackPaths {
    /// Create a new FintrackPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FintrackError> {
        let base_dir = if let Ok(custom) = std::env::var("FINTRACK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FintrackPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the single persisted document
    pub fn data_file(&self) -> PathBuf {
        self.base_dir.join("data.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FintrackError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FintrackError::Io(format!("Failed to create base directory: {}", e)))?;
        Ok(())
    }

    /// Check whether a data file has been written yet
    pub fn is_initialized(&self) -> bool {
        self.data_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FintrackError> {
    // Unix (Linux/macOS): Use XDG_DATA_HOME if set, otherwise ~/.local/share
    let data_base = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".local").join("share")
        });
    Ok(data_base.join("fintrack"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FintrackError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FintrackError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("fintrack"))
}
