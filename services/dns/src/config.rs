use std::fmt::{Debug, Formatter};

use idcf_dns_core::{utils::Redact, Context};

use crate::constants::*;

/// Config carries all the configuration for the IDCF DNS client.
///
/// Every field is optional so values can be layered: explicit settings
/// first, then [`Config::from_env`]. Missing host, endpoint and TLS settings
/// fall back to their defaults when the client is built.
#[derive(Clone, Default)]
pub struct Config {
    /// `api_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`IDCF_API_KEY`]
    pub api_key: Option<String>,
    /// `secret_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`IDCF_SECRET_KEY`]
    pub secret_key: Option<String>,
    /// `host` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`IDCF_DNS_HOST`]
    /// - default: `dns.idcfcloud.com`
    pub host: Option<String>,
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`IDCF_DNS_ENDPOINT`]
    /// - default: `/api/v1`
    pub endpoint: Option<String>,
    /// `verify_ssl` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`IDCF_DNS_VERIFY_SSL`], only `false` disables verification
    /// - default: `true`
    pub verify_ssl: Option<bool>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set api_key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set secret_key
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Set host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set endpoint prefix
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set whether TLS certificates are verified
    pub fn with_verify_ssl(mut self, verify_ssl: bool) -> Self {
        self.verify_ssl = Some(verify_ssl);
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(IDCF_API_KEY) {
            self.api_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(IDCF_SECRET_KEY) {
            self.secret_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(IDCF_DNS_HOST) {
            self.host.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(IDCF_DNS_ENDPOINT) {
            self.endpoint.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(IDCF_DNS_VERIFY_SSL) {
            self.verify_ssl
                .get_or_insert(!v.trim().eq_ignore_ascii_case("false"));
        }

        self
    }

    /// Host with the default applied.
    pub fn host_or_default(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Endpoint prefix with the default applied.
    pub fn endpoint_or_default(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    /// TLS verification policy with the default applied.
    pub fn verify_ssl_or_default(&self) -> bool {
        self.verify_ssl.unwrap_or(true)
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(Redact::from))
            .field("secret_key", &self.secret_key.as_ref().map(Redact::from))
            .field("host", &self.host)
            .field("endpoint", &self.endpoint)
            .field("verify_ssl", &self.verify_ssl)
            .finish()
    }
}
