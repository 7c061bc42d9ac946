//! Package: a tracked shipment as reported by the server.

use serde::{Deserialize, Deserializer, Serialize};

use crate::id::PackageId;
use crate::time::{Timestamp, lenient};

/// Carriers the backend knows how to poll, as `(value, display name)` pairs.
///
/// The add form offers these as choices; the value sent is still a plain
/// string and the server is the one that validates it.
pub const KNOWN_CARRIERS: [(&str, &str); 2] = [("inpost", "InPost"), ("dhl", "DHL")];

/// A tracked package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: PackageId,
    pub carrier: String,
    pub number: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub detailed_status: Option<String>,
    #[serde(default)]
    pub summary_status: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub last_update: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub added_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient_history")]
    pub history: Vec<HistoryEntry>,
}

/// History is informational: entries that do not decode are skipped, and a
/// value that is not an array reads as no history.
fn lenient_history<'de, D>(deserializer: D) -> Result<Vec<HistoryEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(entries) => entries,
        _ => return Ok(Vec::new()),
    };
    Ok(entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}

/// One past poll result, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub ts: Option<Timestamp>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Body of `POST /api/packages`.
///
/// Fields are sent verbatim; an empty label is sent as `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPackage {
    pub carrier: String,
    pub number: String,
    pub label: String,
}

impl NewPackage {
    #[must_use]
    pub fn new(
        carrier: impl Into<String>,
        number: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            carrier: carrier.into(),
            number: number.into(),
            label: label.into(),
        }
    }
}
