//! User record domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::error::{PadronError, Result};
use crate::record::document::Document;

/// Sex field of a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[default]
    Unspecified,
    Male,
    Female,
}

/// A single user-registry entry.
///
/// `id` is assigned by the remote store: it is `Some` if and only if the
/// record has been successfully written. Passwords are never stored; only a
/// SHA-256 hex digest of the submitted password is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub national_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub sex: Sex,
    pub birth_date: DateTime<Utc>,
    pub username: String,
    pub password_digest: String,
}

impl UserRecord {
    /// Encodes the record into a document field map, excluding `id` (the
    /// store assigns and returns ids itself).
    pub fn to_fields(&self) -> Result<Map<String, Value>> {
        let value = serde_json::to_value(self)?;
        match value {
            Value::Object(mut fields) => {
                fields.remove("id");
                Ok(fields)
            }
            _ => Err(PadronError::internal("record did not encode to an object")),
        }
    }

    /// Decodes a stored document into a record with `id` populated.
    pub fn from_document(document: Document) -> Result<Self> {
        let mut fields = document.fields;
        fields.insert("id".to_string(), Value::String(document.id));
        Ok(serde_json::from_value(Value::Object(fields))?)
    }
}

/// The in-progress form state for a record not yet submitted.
///
/// Holds the plaintext password transiently; digesting happens on
/// [`into_record`](Self::into_record). `clear` resets every field to its
/// default and never touches the remote store.
#[derive(Debug, Clone)]
pub struct RecordDraft {
    pub national_id: String,
    pub first_name: String,
    pub last_name: String,
    pub sex: Sex,
    pub birth_date: DateTime<Utc>,
    pub username: String,
    pub password: String,
}

impl Default for RecordDraft {
    fn default() -> Self {
        Self {
            national_id: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            sex: Sex::Unspecified,
            birth_date: Utc::now(),
            username: String::new(),
            password: String::new(),
        }
    }
}

impl RecordDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets all fields to their defaults.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Converts the draft into an unpersisted record, digesting the password.
    pub fn into_record(self) -> UserRecord {
        UserRecord {
            id: None,
            national_id: self.national_id,
            first_name: self.first_name,
            last_name: self.last_name,
            sex: self.sex,
            birth_date: self.birth_date,
            username: self.username,
            password_digest: digest_password(&self.password),
        }
    }
}

/// SHA-256 hex digest of a submitted password.
fn digest_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}
