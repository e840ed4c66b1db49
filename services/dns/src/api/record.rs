use http::HeaderMap;
use idcf_dns_core::Result;
use serde_json::Value;

use super::validate;
use crate::resources::Record;
use crate::schema::RECORD;
use crate::validator::Action;
use crate::{Client, Response};

impl Client {
    /// Create a new record in a zone.
    ///
    /// `name`, `type`, `content` and `ttl` are required, `priority` is
    /// optional. `type` must be one of A, AAAA, CNAME, MX, TXT, SRV, NS or SOA.
    pub async fn create_record(
        &self,
        zone_uuid: &str,
        attributes: &Value,
        headers: HeaderMap,
    ) -> Result<Response> {
        validate(&RECORD, attributes, Action::Create)?;
        self.post(&format!("zones/{zone_uuid}/records"), attributes, headers).await
    }

    /// Delete a record.
    ///
    /// `attributes` may carry `purge`, pass `Value::Null` for none.
    pub async fn delete_record(
        &self,
        zone_uuid: &str,
        uuid: &str,
        attributes: &Value,
        headers: HeaderMap,
    ) -> Result<Response> {
        if !attributes.is_null() {
            validate(&RECORD, attributes, Action::Delete)?;
        }
        self.delete(
            &format!("zones/{zone_uuid}/records/{uuid}"),
            attributes,
            headers,
        )
        .await
    }

    /// Get a record.
    pub async fn get_record(
        &self,
        zone_uuid: &str,
        uuid: &str,
        headers: HeaderMap,
    ) -> Result<Response> {
        self.get(
            &format!("zones/{zone_uuid}/records/{uuid}"),
            &Value::Null,
            headers,
        )
        .await
    }

    /// Get the list of records in a zone.
    pub async fn list_records(&self, zone_uuid: &str, headers: HeaderMap) -> Result<Response> {
        self.get(&format!("zones/{zone_uuid}/records"), &Value::Null, headers).await
    }

    /// Update a record.
    ///
    /// `name`, `type`, `content` and `ttl` may be changed.
    pub async fn update_record(
        &self,
        zone_uuid: &str,
        uuid: &str,
        attributes: &Value,
        headers: HeaderMap,
    ) -> Result<Response> {
        validate(&RECORD, attributes, Action::Update)?;
        self.put(
            &format!("zones/{zone_uuid}/records/{uuid}"),
            attributes,
            headers,
        )
        .await
    }

    /// Get a record as a typed [`Record`].
    pub async fn record(&self, zone_uuid: &str, uuid: &str, headers: HeaderMap) -> Result<Record> {
        self.get_record(zone_uuid, uuid, headers).await?.resource()
    }

    /// Get the records of a zone as typed [`Record`]s.
    ///
    /// Records are taken from the zone itself, which embeds them.
    pub async fn records(&self, zone_uuid: &str, headers: HeaderMap) -> Result<Vec<Record>> {
        Ok(self.zone(zone_uuid, headers).await?.into_records())
    }
}
