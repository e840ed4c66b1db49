//! Core components for the IDCF DNS client.
//!
//! This crate provides the foundational types shared by the client crates.
//! It holds no service-specific logic: signing strings, schemas and
//! resource APIs live in `idcf-dns`.
//!
//! ## Overview
//!
//! - **Context**: A container that holds implementations for HTTP sending and environment access
//! - **Error**: The classified error type returned by every fallible operation
//!
//! ## Example
//!
//! ```no_run
//! use bytes::Bytes;
//! use idcf_dns_core::{Context, HttpSend, Result};
//!
//! #[derive(Debug)]
//! struct Echo;
//!
//! #[async_trait::async_trait]
//! impl HttpSend for Echo {
//!     async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
//!         Ok(http::Response::new(req.into_body()))
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_http_send(Echo);
//! let req = http::Request::get("https://dns.idcfcloud.com/api/v1/zones").body(Bytes::new())?;
//! let resp = ctx.http_send(req).await?;
//! assert!(resp.status().is_success());
//! # Ok(())
//! # }
//! ```
//!
//! ## Traits
//!
//! - [`HttpSend`]: For sending HTTP requests
//! - [`Env`]: For environment variable access
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::HttpSend;
pub use context::NoopEnv;
pub use context::NoopHttpSend;
pub use context::OsEnv;
pub use context::StaticEnv;

mod error;
pub use error::{Error, ErrorKind, Result};
