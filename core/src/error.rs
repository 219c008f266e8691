//! Error types for the sync core.
//!
//! # Design
//! Every variant is a flavor of the same outcome — the remote collection
//! could not be reached or did not accept the request. The controller maps
//! all of them to one static per-operation message and logs the underlying
//! cause; callers that need detail can still match on the variant.

use std::fmt;

use crate::http::TransportError;

/// Errors returned by wire-client parsing and controller operations.
#[derive(Debug)]
pub enum SyncError {
    /// The server returned a non-success status.
    Http { status: u16, body: String },

    /// The request never produced an HTTP response.
    Network(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::Http { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            SyncError::Network(msg) => {
                write!(f, "network failure: {msg}")
            }
            SyncError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            SyncError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for SyncError {}

impl From<TransportError> for SyncError {
    fn from(err: TransportError) -> Self {
        SyncError::Network(err.message)
    }
}
