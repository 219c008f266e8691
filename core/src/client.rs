//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoApi` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`; the
//! controller runs the round-trip through the `Transport` seam in between.
//!
//! Mutation responses (POST/PUT/DELETE) are status-checked only. The sync
//! model never merges a mutation response into local state — a successful
//! mutation triggers a full re-fetch instead — so parsing their bodies would
//! be dead weight.

use uuid::Uuid;

use crate::error::SyncError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewTaskInput, TaskRecord};

/// Stateless wire client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoApi {
    base_url: String,
}

impl TodoApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todos", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, input: &NewTaskInput) -> Result<HttpRequest, SyncError> {
        let body = serde_json::to_string(input).map_err(|e| SyncError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/todos", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Whole-record replace: the body is the full record, not a partial patch.
    pub fn build_update_todo(&self, record: &TaskRecord) -> Result<HttpRequest, SyncError> {
        let body = serde_json::to_string(record).map_err(|e| SyncError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/todos/{}", self.base_url, record.id),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_todo(&self, id: Uuid) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/todos/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<TaskRecord>, SyncError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| SyncError::Deserialization(e.to_string()))
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<(), SyncError> {
        check_success(&response)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<(), SyncError> {
        check_status(&response, 200)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), SyncError> {
        check_success(&response)
    }
}

fn check_status(response: &HttpResponse, expected: u16) -> Result<(), SyncError> {
    if response.status == expected {
        return Ok(());
    }
    Err(SyncError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

fn check_success(response: &HttpResponse) -> Result<(), SyncError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(SyncError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
