use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::Record;

/// A DNS zone.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Zone {
    /// UUID of the zone.
    pub uuid: String,
    /// Domain name of the zone.
    pub name: String,
    /// Contact address, not included in zone listings.
    #[serde(default)]
    pub email: Option<String>,
    /// Free form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Default TTL of records in this zone.
    #[serde(default)]
    pub default_ttl: Option<i64>,
    /// Whether ownership of the domain has been verified.
    #[serde(default, deserialize_with = "deserialize_authenticated")]
    pub authenticated: bool,
    /// Template the zone was created from.
    #[serde(default)]
    pub template_uuid: Option<String>,
    /// Creation time as reported by the API.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update time as reported by the API.
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    records: Vec<Record>,
}

impl Zone {
    /// Records embedded in the zone.
    ///
    /// Only single zone responses embed records, zones from a listing
    /// return an empty slice.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consume the zone and return its records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

fn deserialize_authenticated<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        _ => false,
    })
}
