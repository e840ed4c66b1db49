// Headers used in the signing process.
pub const X_IDCF_APIKEY: &str = "x-idcf-apikey";
pub const X_IDCF_EXPIRES: &str = "x-idcf-expires";
pub const X_IDCF_SIGNATURE: &str = "x-idcf-signature";

// Env values used by Config::from_env.
pub const IDCF_API_KEY: &str = "IDCF_API_KEY";
pub const IDCF_SECRET_KEY: &str = "IDCF_SECRET_KEY";
pub const IDCF_DNS_HOST: &str = "IDCF_DNS_HOST";
pub const IDCF_DNS_ENDPOINT: &str = "IDCF_DNS_ENDPOINT";
pub const IDCF_DNS_VERIFY_SSL: &str = "IDCF_DNS_VERIFY_SSL";

pub const DEFAULT_HOST: &str = "dns.idcfcloud.com";
pub const DEFAULT_ENDPOINT: &str = "/api/v1";

/// Lifetime of a signature when the caller does not pin `X-IDCF-Expires`.
pub const DEFAULT_EXPIRES_IN_SECS: i64 = 600;

// Fallbacks for failed responses without a body.
pub const NOT_FOUND_MESSAGE: &str = "Resource not found.";
pub const NO_REFERENCE: &str = "No reference";
