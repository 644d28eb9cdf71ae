//! Wire types for the voting backend.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Self-registration draft, exactly as entered in the form.
///
/// Serialized as `{id, name, email, place, age}`. Age stays a string: the
/// input widget constrains it, the backend stores whatever it receives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterRegistration {
    pub id: String,
    pub name: String,
    pub email: String,
    pub place: String,
    pub age: String,
}

impl VoterRegistration {
    /// True when every field is non-empty.
    ///
    /// Values are not trimmed and age is not range-checked here.
    pub fn is_complete(&self) -> bool {
        [&self.id, &self.name, &self.email, &self.place, &self.age]
            .iter()
            .all(|field| !field.is_empty())
    }

    /// Names of the fields that are still empty, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("id", &self.id),
            ("name", &self.name),
            ("email", &self.email),
            ("place", &self.place),
            ("age", &self.age),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Registration status reported by the backend.
///
/// The set is open: anything other than the known values is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VoterStatus {
    Active,
    Pending,
    Other(String),
}

impl VoterStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, VoterStatus::Active)
    }

    pub fn as_str(&self) -> &str {
        match self {
            VoterStatus::Active => "Active",
            VoterStatus::Pending => "Pending",
            VoterStatus::Other(other) => other,
        }
    }
}

impl From<String> for VoterStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Active" => VoterStatus::Active,
            "Pending" => VoterStatus::Pending,
            _ => VoterStatus::Other(value),
        }
    }
}

impl From<VoterStatus> for String {
    fn from(status: VoterStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for VoterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the voter roster (`GET /voters`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashed_id: Option<String>,
    pub original_id: String,
    #[serde(deserialize_with = "deserialize_loose_string")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_loose_string")]
    pub email: String,
    #[serde(deserialize_with = "deserialize_loose_string")]
    pub place: String,
    #[serde(deserialize_with = "deserialize_loose_string")]
    pub age: String,
    pub status: VoterStatus,
}

/// Successful `POST /register_voter` body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegistrationReceipt {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub hashed_id: Option<String>,
}

/// `GET /health` body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<f64>,
}

/// Accepts any JSON scalar and keeps it as text.
///
/// The backend stores registration fields as sent, so one odd entry must not
/// fail the whole roster.
fn deserialize_loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Null => Ok(String::new()),
        other => Ok(other.to_string()),
    }
}
