//! In-memory state store for the task collection.
//!
//! # Design
//! One `Store` instance is owned by one `SyncController` — there is no
//! ambient singleton. Fields are private so every visible collection change
//! goes through `replace_collection`: the store never applies optimistic or
//! partial mutations, it only swaps in the latest fetch response wholesale.

use crate::types::{Draft, TaskRecord};

/// Busy/error indicator gating mutating controls. A single process-wide
/// value: Idle and Error are mutually exclusive, and the next operation's
/// outcome overwrites any previous error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Loading,
    Error(&'static str),
}

impl Status {
    pub fn is_loading(&self) -> bool {
        matches!(self, Status::Loading)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Status::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Task collection, form draft, and status flag.
#[derive(Debug)]
pub struct Store {
    tasks: Vec<TaskRecord>,
    draft: Draft,
    status: Status,
}

impl Store {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            draft: Draft::default(),
            status: Status::Idle,
        }
    }

    /// Collection order is owned by the server; this is the latest fetch
    /// response verbatim.
    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Form editing writes through here; the controller resets the draft
    /// after a create confirms.
    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn replace_collection(&mut self, tasks: Vec<TaskRecord>) {
        self.tasks = tasks;
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub fn reset_draft(&mut self) {
        self.draft = Draft::default();
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
