use bytes::Bytes;
use http::header::{HeaderValue, CONTENT_TYPE};
use http::{HeaderMap, Method};
use idcf_dns_core::{Context, Error, Result};
use log::{debug, warn};
use serde_json::{Map, Value};

use crate::config::Config;
use crate::credential::Credential;
use crate::response::Response;
use crate::sign_request::RequestSigner;

/// Client for the IDCF DNS API.
///
/// Every call builds, signs and sends exactly one request. The client holds
/// no mutable state and can be cloned and shared freely.
///
/// Each HTTP verb comes in two flavours:
///
/// - `get_raw`, `post_raw`, `put_raw`, `delete_raw` return the [`Response`]
///   whatever its status.
/// - `get`, `post`, `put`, `delete` fail with an
///   [`ErrorKind::Api`](idcf_dns_core::ErrorKind::Api) error when the status
///   is 400 or above.
#[derive(Clone, Debug)]
pub struct Client {
    ctx: Context,
    credential: Credential,
    host: String,
    endpoint: String,
    verify_ssl: bool,
    signer: RequestSigner,
}

impl Client {
    /// Create a new client.
    ///
    /// Both keys must be set in `config`. Host, endpoint and TLS settings
    /// fall back to their defaults.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| Error::config_invalid("api_key is required"))?;
        let secret_key = config
            .secret_key
            .clone()
            .ok_or_else(|| Error::config_invalid("secret_key is required"))?;

        Ok(Self {
            host: config.host_or_default().to_string(),
            endpoint: config.endpoint_or_default().trim_end_matches('/').to_string(),
            verify_ssl: config.verify_ssl_or_default(),
            credential: Credential::new(api_key, secret_key),
            signer: RequestSigner::new(),
            ctx,
        })
    }

    /// Create a new client with the OS environment and a reqwest transport.
    ///
    /// `config` is completed from the environment first, the transport then
    /// follows the resolved `verify_ssl` setting.
    #[cfg(feature = "default-context")]
    pub fn with_default_context(config: Config) -> Result<Self> {
        use idcf_dns_core::OsEnv;
        use idcf_dns_http_send_reqwest::ReqwestHttpSend;

        let ctx = Context::new().with_env(OsEnv);
        let config = config.from_env(&ctx);
        let http = ReqwestHttpSend::with_verify_ssl(config.verify_ssl_or_default())?;

        Self::new(ctx.with_http_send(http), config)
    }

    /// The api key requests are signed with.
    pub fn api_key(&self) -> &str {
        &self.credential.api_key
    }

    /// API host.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Endpoint prefix, e.g. `/api/v1`.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Whether TLS certificates are verified.
    pub fn verify_ssl(&self) -> bool {
        self.verify_ssl
    }

    /// Send a GET request.
    pub async fn get_raw(
        &self,
        resource: &str,
        parameters: &Value,
        headers: HeaderMap,
    ) -> Result<Response> {
        self.send(Method::GET, resource, parameters, headers).await
    }

    /// Send a GET request, failing on error statuses.
    pub async fn get(
        &self,
        resource: &str,
        parameters: &Value,
        headers: HeaderMap,
    ) -> Result<Response> {
        self.send_strict(Method::GET, resource, parameters, headers).await
    }

    /// Send a POST request.
    pub async fn post_raw(
        &self,
        resource: &str,
        parameters: &Value,
        headers: HeaderMap,
    ) -> Result<Response> {
        self.send(Method::POST, resource, parameters, headers).await
    }

    /// Send a POST request, failing on error statuses.
    pub async fn post(
        &self,
        resource: &str,
        parameters: &Value,
        headers: HeaderMap,
    ) -> Result<Response> {
        self.send_strict(Method::POST, resource, parameters, headers).await
    }

    /// Send a PUT request.
    pub async fn put_raw(
        &self,
        resource: &str,
        parameters: &Value,
        headers: HeaderMap,
    ) -> Result<Response> {
        self.send(Method::PUT, resource, parameters, headers).await
    }

    /// Send a PUT request, failing on error statuses.
    pub async fn put(
        &self,
        resource: &str,
        parameters: &Value,
        headers: HeaderMap,
    ) -> Result<Response> {
        self.send_strict(Method::PUT, resource, parameters, headers).await
    }

    /// Send a DELETE request.
    pub async fn delete_raw(
        &self,
        resource: &str,
        parameters: &Value,
        headers: HeaderMap,
    ) -> Result<Response> {
        self.send(Method::DELETE, resource, parameters, headers).await
    }

    /// Send a DELETE request, failing on error statuses.
    pub async fn delete(
        &self,
        resource: &str,
        parameters: &Value,
        headers: HeaderMap,
    ) -> Result<Response> {
        self.send_strict(Method::DELETE, resource, parameters, headers).await
    }

    /// Build, sign and send one request.
    ///
    /// - `resource` is relative to the endpoint, e.g. `zones/{uuid}`.
    /// - `parameters` must be a JSON object or `null`. POST and PUT send it
    ///   as the JSON body, GET and DELETE as the query string.
    /// - `headers` are sent as is, an `X-IDCF-Expires` among them pins the
    ///   signature expiry.
    pub async fn send(
        &self,
        method: Method,
        resource: &str,
        parameters: &Value,
        headers: HeaderMap,
    ) -> Result<Response> {
        let empty = Map::new();
        let parameters = match parameters {
            Value::Null => &empty,
            Value::Object(map) => map,
            _ => {
                return Err(Error::request_invalid(
                    "request parameters must be a JSON object",
                ))
            }
        };

        let has_body = method == Method::POST || method == Method::PUT;

        let mut uri = format!("https://{}{}/{}", self.host, self.endpoint, resource);
        if !has_body && !parameters.is_empty() {
            uri.push('?');
            uri.push_str(&query_string(parameters));
        }

        let body = if has_body {
            serde_json::to_vec(parameters)
                .map(Bytes::from)
                .map_err(|e| Error::unexpected("failed to serialize parameters").with_source(e))?
        } else {
            Bytes::new()
        };

        let (mut parts, body) = http::Request::builder()
            .method(method)
            .uri(uri)
            .body(body)?
            .into_parts();
        parts.headers = headers;
        if has_body {
            parts
                .headers
                .entry(CONTENT_TYPE)
                .or_insert(HeaderValue::from_static("application/json"));
        }

        self.signer.sign_request(&mut parts, &self.credential)?;

        debug!("sending request: {} {}", parts.method, parts.uri);
        let resp = self
            .ctx
            .http_send(http::Request::from_parts(parts, body))
            .await?;
        let resp = Response::from_http(resp);
        debug!("received response: {}", resp.status());

        Ok(resp)
    }

    /// Same as [`Client::send`] but fails when the status is 400 or above.
    pub async fn send_strict(
        &self,
        method: Method,
        resource: &str,
        parameters: &Value,
        headers: HeaderMap,
    ) -> Result<Response> {
        let resp = self.send(method, resource, parameters, headers).await?;
        if !resp.is_success() {
            warn!(
                "request to {resource} failed with status {}: {:?}",
                resp.status(),
                resp.message()
            );
            return Err(Error::api(resp.status(), resp.message(), resp.reference()));
        }

        Ok(resp)
    }
}

/// Encode GET and DELETE parameters as a query string.
///
/// Strings are sent verbatim, other values as their JSON text.
fn query_string(parameters: &Map<String, Value>) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (k, v) in parameters {
        match v {
            Value::String(s) => serializer.append_pair(k, s),
            Value::Null => serializer.append_pair(k, ""),
            v => serializer.append_pair(k, &v.to_string()),
        };
    }
    serializer.finish()
}
