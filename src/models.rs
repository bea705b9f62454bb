// Data shapes exchanged with the beta endpoints. Field names mirror the
// backend JSON exactly so serde needs no renames.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Registration payload: the beta page only asks for a name and an email.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BetaUserCreate {
    pub name: String,
    pub email: String,
}

impl BetaUserCreate {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        BetaUserCreate {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Response returned by `POST /beta/signup`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BetaUserResponse {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "default_true")]
    pub is_beta_user: bool,
    pub message: String,
}

/// Snapshot returned by `GET /beta/stats`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BetaStats {
    pub total_beta_users: u64,
    pub users_last_24h: u64,
    pub users_last_week: u64,
    pub status: String,
}

/// Response returned by `GET /beta/health`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Outcome of local input validation. `errors` keeps every problem found,
/// in the order the checks run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn from_errors(errors: Vec<String>) -> Self {
        ValidationReport {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

fn default_true() -> bool {
    true
}

/// The backend serializes naive UTC datetimes (no offset), but accept
/// RFC 3339 too.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}
