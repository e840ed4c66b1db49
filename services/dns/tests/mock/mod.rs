//! Recording transport used by the tests in this crate.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, Uri};
use idcf_dns::{Client, Config};
use idcf_dns_core::{Context, HttpSend, Result};

/// A request as seen by the transport.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// MockHttpSend records every request and replays queued responses.
///
/// Without a queued response it answers `200 {}`.
#[derive(Debug, Clone, Default)]
pub struct MockHttpSend {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responses: Arc<Mutex<VecDeque<(u16, String)>>>,
}

impl MockHttpSend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response.
    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back((status, body.into()));
        self
    }

    /// All requests received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The single request received so far.
    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let (parts, body) = req.into_parts();
        self.requests.lock().unwrap().push(RecordedRequest {
            method: parts.method,
            uri: parts.uri,
            headers: parts.headers,
            body,
        });

        let (status, body) = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or((200, "{}".to_string()));
        Ok(http::Response::builder()
            .status(status)
            .header("content-type", "application/json")
            .body(Bytes::from(body))?)
    }
}

/// Build a client signing with `AKIA` / `SECRET` on top of `mock`.
pub fn client(mock: &MockHttpSend) -> Client {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_http_send(mock.clone());
    Client::new(ctx, Config::new().with_api_key("AKIA").with_secret_key("SECRET"))
        .expect("client must be created")
}

/// Headers pinning the signature expiry.
pub fn expires(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("x-idcf-expires", value.parse().unwrap());
    headers
}
