//! Client-side sync core for a remote todo collection.
//!
//! # Overview
//! Keeps an in-memory list of task records consistent with a remote HTTP
//! collection using a confirm-then-refresh model: no mutation is applied
//! locally until the server confirms it, and every confirmed mutation is
//! followed by a full re-fetch that replaces the collection wholesale.
//!
//! # Design
//! - `SyncController` owns the `Store` (collection + draft + status) and a
//!   host-supplied `Transport`; create one per UI instance, then call
//!   `fetch_all` once to populate the initial view.
//! - The wire client (`TodoApi`) builds `HttpRequest` values and parses
//!   `HttpResponse` values without touching the network (host-does-IO
//!   pattern), so the core stays deterministic and testable.
//! - `view::render` maps store state to a typed render tree and
//!   `view::dispatch` routes user intents into controller calls; the
//!   rendering layer never touches the store directly.
//! - Single-threaded and cooperative: operations are async, the store is
//!   mutated only between suspension points, and overlapping calls are not
//!   serialized — the last refresh to resolve wins.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod store;
pub mod types;
pub mod view;

pub use client::TodoApi;
pub use config::api_base_url;
pub use controller::SyncController;
pub use error::SyncError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use store::{Status, Store};
pub use types::{Draft, NewTaskInput, TaskRecord};
pub use view::{dispatch, render, Intent, Page, TaskCard, TaskForm};
