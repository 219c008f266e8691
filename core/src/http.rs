//! HTTP transport seam for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are described as plain data. The core builds
//! `HttpRequest` values and parses `HttpResponse` values without ever
//! touching the network; the host supplies a `Transport` that executes the
//! round-trip. This keeps the core deterministic and easy to test — unit
//! tests script responses instead of standing up a server.
//!
//! `Transport` futures carry no `Send` bound: the sync model is
//! single-threaded and cooperative, with every future polled on one task.

use std::future::Future;

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data, built by `TodoApi::build_*`
/// methods and executed by the host's `Transport`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data, produced by the host's
/// `Transport` and passed to `TodoApi::parse_*` methods.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// A transport-level failure: the request never produced an HTTP response
/// (connection refused, DNS failure, broken pipe). Non-success status codes
/// are not transport errors — they come back as `HttpResponse` data.
#[derive(Debug, Clone)]
pub struct TransportError {
    pub message: String,
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "transport failed: {}", self.message)
    }
}

impl std::error::Error for TransportError {}

/// Executes one HTTP round-trip. The controller suspends at `execute` and
/// resumes when the transport settles or fails; it never imposes a timeout.
pub trait Transport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>>;
}
