//! Sync controller: orchestrates remote calls and store transitions.
//!
//! # Design
//! The controller owns the store and drives the confirm-then-refresh model:
//! nothing is written to the collection until the server confirms, and every
//! successful mutation is followed by a full re-fetch that replaces the
//! collection wholesale. There is no optimistic mutation, so there is nothing
//! to roll back on failure.
//!
//! Every operation sets `Status::Loading` synchronously before dispatching
//! its request and settles the status exactly once on the way out: `Idle` on
//! success, `Error(message)` on failure with the cause logged. Failures map
//! to one static message per operation — callers display the message, logs
//! carry the detail.
//!
//! Independent concurrent calls are deliberately not serialized against each
//! other. Two overlapping toggles each run their own mutation-then-refresh
//! sequence, and whichever refresh resolves last determines the visible
//! collection. The store is a `RefCell` mutated only synchronously between
//! suspension points, never across an await.

use std::cell::{Ref, RefCell, RefMut};

use uuid::Uuid;

use crate::client::TodoApi;
use crate::error::SyncError;
use crate::http::Transport;
use crate::store::{Status, Store};
use crate::types::{NewTaskInput, TaskRecord};

pub const FETCH_FAILED: &str = "Failed to fetch todos";
pub const CREATE_FAILED: &str = "Failed to create todo";
pub const DELETE_FAILED: &str = "Failed to delete todo";
pub const UPDATE_FAILED: &str = "Failed to update todo";

/// Owns one `Store` and one transport; translates operation outcomes into
/// store transitions. Create one per UI instance and pass it explicitly.
#[derive(Debug)]
pub struct SyncController<T: Transport> {
    api: TodoApi,
    transport: T,
    store: RefCell<Store>,
}

impl<T: Transport> SyncController<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            api: TodoApi::new(base_url),
            transport,
            store: RefCell::new(Store::new()),
        }
    }

    /// Read access to the current state. The borrow must not be held across
    /// an await.
    pub fn store(&self) -> Ref<'_, Store> {
        self.store.borrow()
    }

    /// Write access for form editing (`draft_mut`). Same borrow rule.
    pub fn store_mut(&self) -> RefMut<'_, Store> {
        self.store.borrow_mut()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Replace the collection with the server's current state.
    pub async fn fetch_all(&self) -> Result<(), SyncError> {
        self.store.borrow_mut().set_status(Status::Loading);
        let outcome = self.try_fetch_all().await;
        self.settle("fetch", FETCH_FAILED, outcome)
    }

    /// Create a task from a validated draft, then re-fetch. The store draft
    /// is reset as soon as the create confirms.
    pub async fn create(&self, input: &NewTaskInput) -> Result<(), SyncError> {
        self.store.borrow_mut().set_status(Status::Loading);
        match self.try_create(input).await {
            Ok(()) => {
                self.store.borrow_mut().reset_draft();
                self.fetch_all().await
            }
            outcome => self.settle("create", CREATE_FAILED, outcome),
        }
    }

    /// Delete a task, then re-fetch. The record leaves the local view only
    /// when the refresh response omits it.
    pub async fn remove(&self, id: Uuid) -> Result<(), SyncError> {
        self.store.borrow_mut().set_status(Status::Loading);
        match self.try_remove(id).await {
            Ok(()) => self.fetch_all().await,
            outcome => self.settle("delete", DELETE_FAILED, outcome),
        }
    }

    /// Replace the record server-side with `completed` inverted, then
    /// re-fetch. The PUT body is the whole record, not a partial patch.
    pub async fn toggle_complete(&self, record: &TaskRecord) -> Result<(), SyncError> {
        self.store.borrow_mut().set_status(Status::Loading);
        match self.try_toggle(record).await {
            Ok(()) => self.fetch_all().await,
            outcome => self.settle("update", UPDATE_FAILED, outcome),
        }
    }

    async fn try_fetch_all(&self) -> Result<(), SyncError> {
        let request = self.api.build_list_todos();
        let response = self.transport.execute(request).await?;
        let tasks = self.api.parse_list_todos(response)?;
        self.store.borrow_mut().replace_collection(tasks);
        Ok(())
    }

    async fn try_create(&self, input: &NewTaskInput) -> Result<(), SyncError> {
        let request = self.api.build_create_todo(input)?;
        let response = self.transport.execute(request).await?;
        self.api.parse_create_todo(response)
    }

    async fn try_remove(&self, id: Uuid) -> Result<(), SyncError> {
        let request = self.api.build_delete_todo(id);
        let response = self.transport.execute(request).await?;
        self.api.parse_delete_todo(response)
    }

    async fn try_toggle(&self, record: &TaskRecord) -> Result<(), SyncError> {
        let request = self.api.build_update_todo(&record.toggled())?;
        let response = self.transport.execute(request).await?;
        self.api.parse_update_todo(response)
    }

    /// Single settlement point: every operation exits through here (or
    /// through the trailing `fetch_all`, which settles itself), so the status
    /// always leaves `Loading`.
    fn settle(
        &self,
        operation: &'static str,
        message: &'static str,
        outcome: Result<(), SyncError>,
    ) -> Result<(), SyncError> {
        match &outcome {
            Ok(()) => self.store.borrow_mut().set_status(Status::Idle),
            Err(cause) => {
                tracing::error!(operation, cause = %cause, "sync operation failed");
                self.store.borrow_mut().set_status(Status::Error(message));
            }
        }
        outcome
    }
}
