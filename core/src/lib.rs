//! Headless typeahead search-select.
//!
//! # Design
//!
//! - Keystrokes go through a [`Debouncer`]; only settled text becomes a request.
//! - Every request carries a [`RequestToken`]. A response is applied only while
//!   its token is the one in flight, so a slow early response can never
//!   overwrite a newer one.
//! - Nothing here blocks or reads a clock. The host passes `now` in, calls
//!   [`SelectionController::tick`] at [`SelectionController::next_deadline`],
//!   and feeds client responses back through
//!   [`SelectionController::on_response`].
//!
//! [`WorkerClient`] runs any blocking [`Backend`] on a background thread.

pub mod client;
pub mod config;
pub mod controller;
pub mod debouncer;
pub mod error;
pub mod navigator;
pub mod store;
pub mod types;

pub use client::{Backend, SearchClient, SearchRequest, SearchResponse, WorkerClient};
pub use config::TypeaheadConfig;
pub use controller::{Phase, SearchState, SelectionController};
pub use debouncer::Debouncer;
pub use error::{CandidateError, ConfigError, RETRY_MESSAGE, SearchError};
pub use navigator::{KeyboardNavigator, NavAction, NavKey};
pub use store::ResultStore;
pub use types::{Candidate, CandidateId, Query, RequestToken};
