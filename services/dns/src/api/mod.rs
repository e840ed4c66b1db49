//! Resource operations of [`Client`](crate::Client).
//!
//! Create, update and record delete payloads are validated against the
//! resource schema before anything is sent. All operations use the strict
//! verbs, so an error status surfaces as
//! [`ErrorKind::Api`](idcf_dns_core::ErrorKind::Api).

mod record;
mod template;
mod zone;

use idcf_dns_core::{Error, Result};
use serde_json::{Map, Value};

use crate::validator::{Action, Schema};

/// Validate `attributes` against `schema` and return them as an object.
fn validate<'a>(
    schema: &Schema,
    attributes: &'a Value,
    action: Action,
) -> Result<&'a Map<String, Value>> {
    let map = attributes.as_object().ok_or_else(|| {
        Error::request_invalid(format!("{} attributes must be a JSON object", schema.resource))
    })?;
    schema.validate(map, Some(action))?;
    Ok(map)
}
