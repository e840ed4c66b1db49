use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

/// DNS record types supported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address.
    A,
    /// IPv6 address.
    Aaaa,
    /// Canonical name.
    Cname,
    /// Mail exchange.
    Mx,
    /// Text.
    Txt,
    /// Service locator.
    Srv,
    /// Name server.
    Ns,
    /// Start of authority.
    Soa,
}

impl RecordType {
    /// The wire representation, e.g. `AAAA`.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Cname => "CNAME",
            RecordType::Mx => "MX",
            RecordType::Txt => "TXT",
            RecordType::Srv => "SRV",
            RecordType::Ns => "NS",
            RecordType::Soa => "SOA",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record content, a string for most types and an object for `SOA`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RecordContent {
    /// Plain content such as an address or a host name.
    Text(String),
    /// Structured content such as the `SOA` fields.
    Structured(Map<String, Value>),
}

/// A DNS record inside a zone.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    /// UUID of the record.
    pub uuid: String,
    /// Fully qualified record name.
    pub name: String,
    /// Record type.
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Record content.
    pub content: RecordContent,
    /// TTL in seconds.
    pub ttl: i64,
    /// Priority, only meaningful for `MX` and `SRV`.
    #[serde(default)]
    pub priority: Option<i64>,
    /// Creation time as reported by the API.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update time as reported by the API.
    #[serde(default)]
    pub updated_at: Option<String>,
}
