//! IDCF DNS request signer
use std::fmt::Write;

use chrono::TimeDelta;
use http::header::HeaderName;
use http::HeaderValue;
use http::Method;
use idcf_dns_core::hash::base64_hmac_sha256;
use idcf_dns_core::time::{format_epoch_seconds, now, DateTime};
use idcf_dns_core::Result;
use log::debug;

use crate::constants::*;
use crate::credential::Credential;

/// RequestSigner implements the IDCF API signature.
///
/// Three headers are attached to every request:
///
/// - `X-IDCF-APIKEY`: the api key
/// - `X-IDCF-Expires`: epoch seconds after which the signature is rejected
/// - `X-IDCF-Signature`: base64 HMAC-SHA256 of the string to sign
#[derive(Debug, Default, Clone)]
pub struct RequestSigner {
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer.
    pub fn new() -> Self {
        Self { time: None }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Sign the request in place.
    ///
    /// An `X-IDCF-Expires` header already present in `parts` is used as the
    /// expiry input and kept as is. Otherwise the expiry is now plus ten
    /// minutes. Caller supplied `X-IDCF-APIKEY` or `X-IDCF-Signature`
    /// headers are left untouched.
    pub fn sign_request(&self, parts: &mut http::request::Parts, cred: &Credential) -> Result<()> {
        let expires = match parts.headers.get(X_IDCF_EXPIRES) {
            Some(v) => v.to_str()?.to_string(),
            None => {
                let now = self.time.unwrap_or_else(now);
                format_epoch_seconds(now + TimeDelta::seconds(DEFAULT_EXPIRES_IN_SECS))
            }
        };

        let string_to_sign =
            string_to_sign(&parts.method, parts.uri.path(), &cred.api_key, &expires)?;
        let signature = base64_hmac_sha256(cred.secret_key.as_bytes(), string_to_sign.as_bytes());

        parts
            .headers
            .insert(HeaderName::from_static(X_IDCF_EXPIRES), expires.parse()?);
        parts
            .headers
            .entry(HeaderName::from_static(X_IDCF_APIKEY))
            .or_insert(cred.api_key.parse()?);
        parts
            .headers
            .entry(HeaderName::from_static(X_IDCF_SIGNATURE))
            .or_insert({
                let mut value: HeaderValue = signature.parse()?;
                value.set_sensitive(true);

                value
            });

        Ok(())
    }
}

/// Compute the base64 encoded signature for one request.
///
/// `path` is the full request path including the endpoint prefix and
/// without the query string.
pub fn sign(
    method: &Method,
    path: &str,
    api_key: &str,
    secret_key: &str,
    expires: &str,
) -> Result<String> {
    let s = string_to_sign(method, path, api_key, expires)?;
    Ok(base64_hmac_sha256(secret_key.as_bytes(), s.as_bytes()))
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// METHOD + "\n" +
/// Path + "\n" +
/// ApiKey + "\n" +
/// Expires + "\n"
/// ```
pub fn string_to_sign(method: &Method, path: &str, api_key: &str, expires: &str) -> Result<String> {
    let mut s = String::new();
    writeln!(&mut s, "{}", method.as_str().to_ascii_uppercase())?;
    writeln!(&mut s, "{path}")?;
    writeln!(&mut s, "{api_key}")?;
    writeln!(&mut s, "{expires}")?;

    debug!("string to sign: {:?}", &s);
    Ok(s)
}
