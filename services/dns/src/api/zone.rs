use http::HeaderMap;
use idcf_dns_core::Result;
use serde_json::Value;

use super::validate;
use crate::resources::Zone;
use crate::schema::ZONE;
use crate::validator::Action;
use crate::{Client, Response};

impl Client {
    /// Create a new zone.
    ///
    /// `name`, `email` and `default_ttl` are required, `description` and
    /// `template_uuid` are optional.
    ///
    /// ```no_run
    /// # use idcf_dns::Client;
    /// # async fn example(client: Client) -> idcf_dns_core::Result<()> {
    /// let resp = client
    ///     .create_zone(
    ///         &serde_json::json!({
    ///             "name": "foobar.example.com",
    ///             "email": "foobar@example.com",
    ///             "description": "",
    ///             "default_ttl": 600,
    ///         }),
    ///         http::HeaderMap::new(),
    ///     )
    ///     .await?;
    /// let uuid = resp.uuid();
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_zone(&self, attributes: &Value, headers: HeaderMap) -> Result<Response> {
        validate(&ZONE, attributes, Action::Create)?;
        self.post("zones", attributes, headers).await
    }

    /// Delete a zone.
    pub async fn delete_zone(&self, uuid: &str, headers: HeaderMap) -> Result<Response> {
        self.delete(&format!("zones/{uuid}"), &Value::Null, headers).await
    }

    /// Get a zone.
    pub async fn get_zone(&self, uuid: &str, headers: HeaderMap) -> Result<Response> {
        self.get(&format!("zones/{uuid}"), &Value::Null, headers).await
    }

    /// Get the list of existing zones.
    pub async fn list_zones(&self, headers: HeaderMap) -> Result<Response> {
        self.get("zones", &Value::Null, headers).await
    }

    /// Update a zone.
    ///
    /// `email`, `description` and `default_ttl` may be changed.
    pub async fn update_zone(
        &self,
        uuid: &str,
        attributes: &Value,
        headers: HeaderMap,
    ) -> Result<Response> {
        validate(&ZONE, attributes, Action::Update)?;
        self.put(&format!("zones/{uuid}"), attributes, headers).await
    }

    /// Get the token used to prove ownership of a zone's domain.
    pub async fn get_token(&self, uuid: &str, headers: HeaderMap) -> Result<Response> {
        self.get(&format!("zones/{uuid}/token"), &Value::Null, headers).await
    }

    /// Ask the API to verify ownership of a zone's domain.
    pub async fn verify_zone(&self, uuid: &str, headers: HeaderMap) -> Result<Response> {
        self.post(&format!("zones/{uuid}/verify"), &Value::Null, headers).await
    }

    /// Get a zone as a typed [`Zone`], including its records.
    pub async fn zone(&self, uuid: &str, headers: HeaderMap) -> Result<Zone> {
        self.get_zone(uuid, headers).await?.resource()
    }

    /// Get all zones as typed [`Zone`]s.
    pub async fn zones(&self, headers: HeaderMap) -> Result<Vec<Zone>> {
        self.list_zones(headers).await?.resources_as()
    }
}
