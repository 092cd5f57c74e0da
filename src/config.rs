//! # Configuration Module
//!
//! Handles data-directory setup and default file locations for Setwave.
//!
//! ## Data Storage
//!
//! The default track library lives in the platform-standard data directory:
//! - Linux: `~/.local/share/setwave/library.json`
//! - macOS: `~/Library/Application Support/setwave/library.json`
//! - Windows: `%APPDATA%\setwave\library.json`
//!
//! A library path given on the command line always wins over the default.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Returns the platform-appropriate Setwave data directory, creating it if
/// necessary.
///
/// # Errors
///
/// Returns an error if the system data directory cannot be determined or the
/// `setwave` subdirectory cannot be created.
pub fn get_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        anyhow::anyhow!(
            "Could not determine system data directory. Please ensure your platform supports standard data directories."
        )
    })?;

    let setwave_dir = data_dir.join("setwave");
    fs::create_dir_all(&setwave_dir).with_context(|| {
        format!(
            "Failed to create Setwave data directory at {}. Please check file permissions.",
            setwave_dir.display()
        )
    })?;

    Ok(setwave_dir)
}

/// Returns the default track-library file path inside the data directory.
///
/// The file itself is not created; loading reports a readable error when it
/// is missing, which beats silently sequencing an empty library.
///
/// # Errors
///
/// Propagates [`get_data_dir`] failures.
pub fn get_default_library_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join("library.json"))
}

/// Configuration for runtime behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Path to the track library file.
    pub library_path: PathBuf,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            library_path: get_default_library_path()
                .unwrap_or_else(|_| PathBuf::from("library.json")),
        }
    }
}

impl RuntimeConfig {
    /// Create a new runtime configuration with the default library location.
    ///
    /// # Errors
    ///
    /// Propagates data-directory failures.
    pub fn new() -> Result<Self> {
        Ok(Self {
            library_path: get_default_library_path()?,
        })
    }

    /// Create configuration with an explicit library path.
    #[must_use]
    pub fn with_library_path(library_path: PathBuf) -> Self {
        Self { library_path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_is_created() {
        let dir = get_data_dir().expect("data dir should resolve");
        assert!(dir.exists());
        assert!(dir.is_dir());
        assert_eq!(dir.file_name().unwrap(), "setwave");
    }

    #[test]
    fn test_default_library_path_structure() {
        let path = get_default_library_path().expect("should get valid path");
        assert!(path.is_absolute());
        assert!(path.to_string_lossy().ends_with("library.json"));
        assert_eq!(path.parent().unwrap().file_name().unwrap(), "setwave");
    }

    #[test]
    fn test_default_library_path_consistent() {
        let first = get_default_library_path().expect("first call should succeed");
        let second = get_default_library_path().expect("second call should succeed");
        assert_eq!(first, second);
    }

    #[test]
    fn test_runtime_config_with_explicit_path() {
        let config = RuntimeConfig::with_library_path(PathBuf::from("/tmp/lib.json"));
        assert_eq!(config.library_path, PathBuf::from("/tmp/lib.json"));
    }
}
