//! Unified path management for padron data files.

use std::path::PathBuf;

use padron_core::{PadronError, Result};

/// Resolves the on-disk locations padron uses.
///
/// # Directory Structure
///
/// ```text
/// ~/.padron/
/// ├── config.toml    # Application configuration
/// └── state.json     # Durable key-value state (session flag)
/// ```
pub struct PadronPaths;

impl PadronPaths {
    /// Returns the padron data directory (`~/.padron`).
    pub fn data_dir() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(".padron"))
            .ok_or_else(|| PadronError::config("Cannot find home directory"))
    }

    /// Returns the path to the durable key-value state file.
    pub fn state_file() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("state.json"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_live_under_data_dir() {
        let data_dir = PadronPaths::data_dir().unwrap();
        assert!(PadronPaths::state_file().unwrap().starts_with(&data_dir));
        assert!(PadronPaths::config_file().unwrap().starts_with(&data_dir));
    }
}
