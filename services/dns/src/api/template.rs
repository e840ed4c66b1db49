use http::HeaderMap;
use idcf_dns_core::Result;
use serde_json::Value;

use super::validate;
use crate::resources::Template;
use crate::schema::TEMPLATE;
use crate::validator::Action;
use crate::{Client, Response};

impl Client {
    /// Create a new template.
    ///
    /// `name` and `default_ttl` are required, `description` is optional.
    pub async fn create_template(
        &self,
        attributes: &Value,
        headers: HeaderMap,
    ) -> Result<Response> {
        validate(&TEMPLATE, attributes, Action::Create)?;
        self.post("templates", attributes, headers).await
    }

    /// Delete a template.
    pub async fn delete_template(&self, uuid: &str, headers: HeaderMap) -> Result<Response> {
        self.delete(&format!("templates/{uuid}"), &Value::Null, headers).await
    }

    /// Get a template.
    pub async fn get_template(&self, uuid: &str, headers: HeaderMap) -> Result<Response> {
        self.get(&format!("templates/{uuid}"), &Value::Null, headers).await
    }

    /// Get the list of existing templates.
    pub async fn list_templates(&self, headers: HeaderMap) -> Result<Response> {
        self.get("templates", &Value::Null, headers).await
    }

    /// Update a template.
    ///
    /// `description` and `default_ttl` may be changed.
    pub async fn update_template(
        &self,
        uuid: &str,
        attributes: &Value,
        headers: HeaderMap,
    ) -> Result<Response> {
        validate(&TEMPLATE, attributes, Action::Update)?;
        self.put(&format!("templates/{uuid}"), attributes, headers).await
    }

    /// Get a template as a typed [`Template`].
    pub async fn template(&self, uuid: &str, headers: HeaderMap) -> Result<Template> {
        self.get_template(uuid, headers).await?.resource()
    }

    /// Get all templates as typed [`Template`]s.
    pub async fn templates(&self, headers: HeaderMap) -> Result<Vec<Template>> {
        self.list_templates(headers).await?.resources_as()
    }
}
