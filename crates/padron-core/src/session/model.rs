//! Session state model.

use serde::{Deserialize, Serialize};

/// Storage key for the persisted session flag.
///
/// Kept identical to the value used by earlier releases so existing
/// persisted state keeps round-tripping.
pub const SESSION_KEY: &str = "isLoggedIn";

/// Sentinel value marking an authenticated session.
pub const SESSION_MARKER: &str = "true";

/// The two possible authentication states of the process-wide session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SessionState {
    /// Initial state; no valid login has been performed or persisted.
    #[default]
    LoggedOut,
    /// A login succeeded, either this run or in a prior run of the process.
    LoggedIn,
}

impl SessionState {
    /// Decodes the persisted flag value. Only the exact marker counts.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(SESSION_MARKER) => Self::LoggedIn,
            _ => Self::LoggedOut,
        }
    }

    /// Returns true when the session is authenticated.
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn)
    }
}
