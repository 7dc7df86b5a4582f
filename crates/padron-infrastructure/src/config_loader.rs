//! Configuration file loading.

use std::path::Path;

use padron_core::Result;
use padron_core::config::RegistryConfig;

use crate::paths::PadronPaths;

/// Loads the registry configuration from a TOML file.
///
/// A missing or empty file yields the defaults without writing anything; a
/// file that exists but fails to parse is an error so misconfiguration never
/// passes silently.
pub fn load_config(path: impl AsRef<Path>) -> Result<RegistryConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!("No config file at {:?}, using defaults", path);
        return Ok(RegistryConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(RegistryConfig::default());
    }

    Ok(toml::from_str(&content)?)
}

/// Loads the configuration from the default location (`~/.padron/config.toml`).
pub fn load_default_config() -> Result<RegistryConfig> {
    load_config(PadronPaths::config_file()?)
}
