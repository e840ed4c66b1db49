use serde::Deserialize;

/// A named default TTL and description bundle that zones can be created from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Template {
    /// UUID of the template.
    pub uuid: String,
    /// Unique name of the template.
    pub name: String,
    /// Free form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Default TTL of zones created from this template.
    #[serde(default)]
    pub default_ttl: Option<i64>,
    /// Creation time as reported by the API.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update time as reported by the API.
    #[serde(default)]
    pub updated_at: Option<String>,
}
