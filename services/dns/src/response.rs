use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use idcf_dns_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::constants::{NOT_FOUND_MESSAGE, NO_REFERENCE};

/// Response returned by the IDCF DNS API.
///
/// The body is kept as parsed JSON. It can be an object, an array or absent.
/// All accessors tolerate every shape.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Option<Value>,
}

impl Response {
    /// Build a response from parts.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Option<Value>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Build a response from the transport output.
    ///
    /// An empty body or a JSON `null` becomes `None`. A body that is not
    /// JSON is kept as a JSON string.
    pub fn from_http(resp: http::Response<Bytes>) -> Self {
        let (parts, body) = resp.into_parts();

        let body = if body.iter().all(u8::is_ascii_whitespace) {
            None
        } else {
            let value = serde_json::from_slice(&body)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()));
            Some(value).filter(|v| !v.is_null())
        };

        Self::new(parts.status, parts.headers, body)
    }

    /// HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// HTTP response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Parsed response body.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Consume the response and return the body.
    pub fn into_body(self) -> Option<Value> {
        self.body
    }

    /// Index into an object body.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.as_ref()?.as_object()?.get(key)
    }

    /// Whether the request succeeded, i.e. the status is below 400.
    pub fn is_success(&self) -> bool {
        self.status.as_u16() < 400
    }

    /// Number of resources in the body.
    ///
    /// An array counts its elements, an object with `uuid` counts as one,
    /// anything else as zero.
    pub fn count(&self) -> usize {
        match &self.body {
            Some(Value::Array(items)) => items.len(),
            Some(Value::Object(map)) if map.contains_key("uuid") => 1,
            _ => 0,
        }
    }

    /// Error message of a failed request.
    ///
    /// Returns `None` on success.
    pub fn message(&self) -> Option<&str> {
        if self.is_success() {
            return None;
        }

        match &self.body {
            Some(_) => self.get("message").and_then(Value::as_str),
            None => Some(NOT_FOUND_MESSAGE),
        }
    }

    /// Error reference of a failed request.
    ///
    /// Returns `None` on success.
    pub fn reference(&self) -> Option<&str> {
        if self.is_success() {
            return None;
        }

        match &self.body {
            Some(_) => self.get("reference").and_then(Value::as_str),
            None => Some(NO_REFERENCE),
        }
    }

    /// The body as a list of resources.
    ///
    /// A single value is wrapped in a one element list.
    pub fn resources(&self) -> Option<Vec<&Value>> {
        match self.body.as_ref()? {
            Value::Array(items) => Some(items.iter().collect()),
            v => Some(vec![v]),
        }
    }

    /// UUID of the resource in an object body.
    pub fn uuid(&self) -> Option<&str> {
        self.get("uuid").and_then(Value::as_str)
    }

    /// Deserialize an object body into a typed resource.
    pub fn resource<T: DeserializeOwned>(&self) -> Result<T> {
        let body = self
            .body
            .as_ref()
            .ok_or_else(|| Error::unexpected("response has no body"))?;
        T::deserialize(body)
            .map_err(|e| Error::unexpected("failed to deserialize resource").with_source(e))
    }

    /// Deserialize the body into a list of typed resources.
    pub fn resources_as<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        self.resources()
            .unwrap_or_default()
            .into_iter()
            .map(|v| {
                T::deserialize(v)
                    .map_err(|e| Error::unexpected("failed to deserialize resource").with_source(e))
            })
            .collect()
    }
}
