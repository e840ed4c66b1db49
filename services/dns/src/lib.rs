//! Client for the IDCF Cloud DNS API.
//!
//! Requests are signed with the account's api key and secret key. Payloads
//! of write operations are validated against static resource schemas before
//! they are sent, so invalid requests never reach the network.
//!
//! ## Example
//!
//! ```no_run
//! use http::HeaderMap;
//! use idcf_dns::{Client, Config};
//! use serde_json::json;
//!
//! # async fn example() -> idcf_dns_core::Result<()> {
//! // Keys are read from `IDCF_API_KEY` and `IDCF_SECRET_KEY`.
//! let client = Client::with_default_context(Config::new())?;
//!
//! let zone = client
//!     .create_zone(
//!         &json!({
//!             "name": "example.com",
//!             "email": "postmaster@example.com",
//!             "default_ttl": 3600,
//!         }),
//!         HeaderMap::new(),
//!     )
//!     .await?;
//!
//! let zone_uuid = zone.uuid().unwrap_or_default();
//! client
//!     .create_record(
//!         zone_uuid,
//!         &json!({
//!             "name": "www.example.com",
//!             "type": "A",
//!             "content": "192.0.2.1",
//!             "ttl": 3600,
//!         }),
//!         HeaderMap::new(),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod api;

mod client;
pub use client::Client;

mod config;
pub use config::Config;

mod constants;

mod credential;
pub use credential::Credential;

pub mod resources;
pub use resources::{Record, RecordContent, RecordType, Template, Zone};

mod response;
pub use response::Response;

pub mod schema;

mod sign_request;
pub use sign_request::{sign, string_to_sign, RequestSigner};

pub mod validator;
pub use validator::{Action, Requirement, Schema, TypeConstraint};
