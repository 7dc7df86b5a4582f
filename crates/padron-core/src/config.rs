//! Application configuration model.

use serde::{Deserialize, Serialize};

/// Root configuration for the registry core.
///
/// Loaded from `config.toml` by the infrastructure layer; a missing file
/// yields these defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RegistryConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub credentials: CredentialConfig,
}

/// Remote document store settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Base URL of the document store API. When absent the app runs against
    /// an in-memory store (useful offline and in tests).
    #[serde(default)]
    pub base_url: Option<String>,
    /// Collection holding the user records.
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_collection() -> String {
    "users".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            collection: default_collection(),
        }
    }
}

/// The accepted credential pair for the placeholder static verifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CredentialConfig {
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_password")]
    pub password: String,
}

fn default_username() -> String {
    "user".to_string()
}

fn default_password() -> String {
    "password".to_string()
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
        }
    }
}
