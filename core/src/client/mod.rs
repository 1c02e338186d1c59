//! Search backend seam.
//!
//! The controller never waits on a backend. It hands a [`SearchRequest`] to a
//! [`SearchClient`] and later receives the matching [`SearchResponse`] through
//! `SelectionController::on_response`, carrying the same token.

mod worker;

pub use worker::WorkerClient;

use crate::error::SearchError;
use crate::types::{Candidate, Query, RequestToken};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub token: RequestToken,
    pub query: Query,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    pub token: RequestToken,
    pub outcome: Result<Vec<Candidate>, SearchError>,
}

impl SearchResponse {
    pub fn ok(token: RequestToken, candidates: Vec<Candidate>) -> Self {
        Self {
            token,
            outcome: Ok(candidates),
        }
    }

    pub fn err(token: RequestToken, error: SearchError) -> Self {
        Self {
            token,
            outcome: Err(error),
        }
    }
}

/// Starts searches on behalf of the controller.
pub trait SearchClient {
    /// Starts a search. The outcome is delivered later as a [`SearchResponse`]
    /// with `request.token`.
    fn dispatch(&mut self, request: SearchRequest);

    /// The request with this token is no longer wanted.
    ///
    /// Correctness never depends on this; a response for an aborted token is
    /// discarded by the controller either way.
    fn abort(&mut self, _token: RequestToken) {}
}

/// A blocking search implementation, run off the UI thread by [`WorkerClient`].
pub trait Backend: Send + Sync + 'static {
    fn search(&self, query: &Query) -> Result<Vec<Candidate>, SearchError>;
}

impl<F> Backend for F
where
    F: Fn(&Query) -> Result<Vec<Candidate>, SearchError> + Send + Sync + 'static,
{
    fn search(&self, query: &Query) -> Result<Vec<Candidate>, SearchError> {
        self(query)
    }
}
