//! Typeahead state machine.
//!
//! Phases:
//! - `Idle`: nothing to search for (blank query, or dismissed).
//! - `Debouncing`: a keystroke is waiting out the quiet period.
//! - `Loading`: a request is in flight.
//! - `Open` / `Empty` / `Failed`: the latest request settled.
//! - `Committed`: the user picked a candidate.
//!
//! The controller is driven entirely by its caller: input and key events,
//! [`SelectionController::tick`] with the current time, and
//! [`SelectionController::on_response`] when a client reports back. It never
//! blocks and never reads a clock.

use crate::client::{SearchClient, SearchRequest, SearchResponse};
use crate::config::TypeaheadConfig;
use crate::debouncer::Debouncer;
use crate::error::SearchError;
use crate::navigator::{KeyboardNavigator, NavAction, NavKey};
use crate::store::ResultStore;
use crate::types::{Candidate, Query, RequestToken};
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Debouncing,
    Loading,
    Open,
    Empty,
    Failed,
    Committed,
}

/// Owned copy of everything a view renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub phase: Phase,
    pub query: String,
    pub results: Vec<Candidate>,
    pub is_open: bool,
    pub highlighted_index: Option<usize>,
    pub is_loading: bool,
    pub error: Option<SearchError>,
    pub selection: Option<Candidate>,
    pub request_token: RequestToken,
}

#[derive(Debug)]
struct InFlight {
    token: RequestToken,
    query: Query,
    started_at: Instant,
}

pub struct SelectionController<C> {
    client: C,
    config: TypeaheadConfig,
    debouncer: Debouncer<Query>,
    store: ResultStore,
    query: String,
    phase: Phase,
    error: Option<SearchError>,
    selection: Option<Candidate>,
    token: RequestToken,
    in_flight: Option<InFlight>,
    /// Query the current `store` results were fetched for.
    results_query: Option<Query>,
}

/// Create operations.
impl<C: SearchClient> SelectionController<C> {
    pub fn new(client: C, config: TypeaheadConfig) -> Self {
        Self {
            client,
            config,
            debouncer: Debouncer::new(),
            store: ResultStore::default(),
            query: String::new(),
            phase: Phase::Idle,
            error: None,
            selection: None,
            token: RequestToken::default(),
            in_flight: None,
            results_query: None,
        }
    }
}

/// Read operations.
impl<C> SelectionController<C> {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[Candidate] {
        self.store.results()
    }

    pub fn is_open(&self) -> bool {
        self.store.is_open()
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.store.highlighted_index()
    }

    pub fn highlighted(&self) -> Option<&Candidate> {
        self.store.highlighted()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn error(&self) -> Option<&SearchError> {
        self.error.as_ref()
    }

    /// The single-line message to show instead of results after a failure.
    pub fn error_message(&self) -> Option<&'static str> {
        self.error.as_ref().map(SearchError::user_message)
    }

    pub fn selection(&self) -> Option<&Candidate> {
        self.selection.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Token of the most recently dispatched request.
    pub fn request_token(&self) -> RequestToken {
        self.token
    }

    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    pub fn config(&self) -> &TypeaheadConfig {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        let timeout = self.config.request_timeout().and_then(|timeout| {
            self.in_flight
                .as_ref()
                .and_then(|in_flight| in_flight.started_at.checked_add(timeout))
        });

        match (self.debouncer.deadline(), timeout) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn snapshot(&self) -> SearchState {
        SearchState {
            phase: self.phase,
            query: self.query.clone(),
            results: self.store.results().to_vec(),
            is_open: self.store.is_open(),
            highlighted_index: self.store.highlighted_index(),
            is_loading: self.is_loading(),
            error: self.error.clone(),
            selection: self.selection.clone(),
            request_token: self.token,
        }
    }
}

/// Input operations.
impl<C: SearchClient> SelectionController<C> {
    /// The input text changed.
    ///
    /// Blank (or too short) text clears results right away without a request.
    /// Anything else restarts the debounce window.
    pub fn on_input(&mut self, text: impl Into<String>, now: Instant) {
        self.query = text.into();
        self.error = None;

        let Some(query) = self.searchable_query() else {
            debug!("query cleared");
            self.store.clear();
            self.results_query = None;
            self.go_idle();
            return;
        };

        if self.debouncer.schedule(query, self.config.debounce(), now) {
            trace!("debounce restarted");
        }
        self.phase = Phase::Debouncing;
    }

    /// Drives time-based work: fires a settled debounce and expires a request
    /// that outlived the configured timeout. Returns true if state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if self.is_timed_out(now) {
            if let Some(in_flight) = self.in_flight.take() {
                warn!(token = %in_flight.token, query = %in_flight.query, "search timed out");
                self.client.abort(in_flight.token);
            }
            self.fail(SearchError::TimedOut);
            changed = true;
        }

        if let Some(query) = self.debouncer.poll(now) {
            self.dispatch(query, now);
            changed = true;
        }

        changed
    }

    /// Applies a client response if it belongs to the request in flight.
    ///
    /// Anything else is stale and ignored. Returns true if it was applied.
    pub fn on_response(&mut self, response: SearchResponse) -> bool {
        let in_flight = match self.in_flight.take() {
            Some(in_flight) if in_flight.token == response.token => in_flight,
            other => {
                trace!(
                    token = %response.token,
                    current = %self.token,
                    "discarding stale response"
                );
                self.in_flight = other;
                return false;
            }
        };

        match response.outcome {
            Ok(mut results) => {
                results.truncate(self.config.max_results);
                debug!(
                    token = %response.token,
                    query = %in_flight.query,
                    count = results.len(),
                    "search results applied"
                );
                let phase = if results.is_empty() {
                    Phase::Empty
                } else {
                    Phase::Open
                };
                self.error = None;
                self.store.replace(results);
                self.results_query = Some(in_flight.query);
                self.settle(phase);
            }
            Err(error) => {
                warn!(token = %response.token, query = %in_flight.query, %error, "search failed");
                self.fail(error);
            }
        }

        true
    }

    /// Handles a key press against the dropdown. Returns the action taken.
    pub fn on_key(&mut self, key: NavKey) -> NavAction {
        let action = KeyboardNavigator::navigate(key, &self.store, self.is_loading());
        match action {
            NavAction::None => {}
            NavAction::Highlight(index) => {
                self.store.set_highlight(index);
            }
            NavAction::Commit(index) => {
                self.commit(index);
            }
            NavAction::Dismiss => self.on_escape(),
        }
        action
    }
}

/// Selection operations.
impl<C: SearchClient> SelectionController<C> {
    /// Commits the result at `index`. Returns false if there is no such result.
    pub fn commit(&mut self, index: usize) -> bool {
        let Some(candidate) = self.store.results().get(index).cloned() else {
            return false;
        };

        self.debouncer.cancel();
        self.invalidate();

        debug!(id = %candidate.id(), "selection committed");
        self.query = candidate.label();
        self.error = None;
        self.store.close();
        self.results_query = None;
        self.phase = Phase::Committed;
        self.selection = Some(candidate);
        true
    }

    pub fn commit_highlighted(&mut self) -> bool {
        match self.store.highlighted_index() {
            Some(index) => self.commit(index),
            None => false,
        }
    }

    /// Closes the dropdown, keeping the typed text and any selection.
    pub fn on_escape(&mut self) {
        self.store.close();
        self.error = None;
        self.go_idle();
    }

    /// A click landed outside the widget.
    pub fn on_blur_outside(&mut self) {
        self.on_escape();
    }

    /// Empties the input, the results and the selection.
    pub fn clear(&mut self) {
        self.query.clear();
        self.store.clear();
        self.error = None;
        self.selection = None;
        self.results_query = None;
        self.go_idle();
    }

    /// Opens the dropdown again on purpose, e.g. when the input regains focus.
    ///
    /// Results that still match the query are shown as they are; otherwise a
    /// search is scheduled without waiting for the debounce window. Returns
    /// false when there is nothing to search for.
    pub fn reopen(&mut self, now: Instant) -> bool {
        let Some(query) = self.searchable_query() else {
            return false;
        };

        if self.results_query.as_ref() == Some(&query) {
            self.store.open();
            if !matches!(self.phase, Phase::Loading | Phase::Debouncing) {
                self.phase = if self.store.is_empty() {
                    Phase::Empty
                } else {
                    Phase::Open
                };
            }
        } else if !self.is_loading() {
            self.debouncer.schedule(query, Duration::ZERO, now);
            self.phase = Phase::Debouncing;
        }
        true
    }
}

/// Internal transitions.
impl<C: SearchClient> SelectionController<C> {
    fn searchable_query(&self) -> Option<Query> {
        Query::try_new(self.query.clone())
            .ok()
            .filter(|query| query.char_len() >= self.config.min_query_len)
    }

    fn dispatch(&mut self, query: Query, now: Instant) {
        if let Some(previous) = self.in_flight.take() {
            self.client.abort(previous.token);
        }

        self.token = self.token.next();
        let token = self.token;
        debug!(%token, %query, "dispatching search");

        self.in_flight = Some(InFlight {
            token,
            query: query.clone(),
            started_at: now,
        });
        self.phase = Phase::Loading;
        self.error = None;
        self.store.open();
        self.client.dispatch(SearchRequest { token, query });
    }

    /// Drops the in-flight request so its response is ignored when it lands.
    fn invalidate(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            trace!(token = %in_flight.token, "request invalidated");
            self.client.abort(in_flight.token);
        }
    }

    fn go_idle(&mut self) {
        self.debouncer.cancel();
        self.invalidate();
        self.phase = Phase::Idle;
    }

    fn fail(&mut self, error: SearchError) {
        self.store.clear();
        self.results_query = None;
        self.error = Some(error);
        self.settle(Phase::Failed);
    }

    /// A pending keystroke outranks a settled request.
    fn settle(&mut self, phase: Phase) {
        self.phase = if self.debouncer.is_pending() {
            Phase::Debouncing
        } else {
            phase
        };
    }

    fn is_timed_out(&self, now: Instant) -> bool {
        match (&self.in_flight, self.config.request_timeout()) {
            (Some(in_flight), Some(timeout)) => {
                now.saturating_duration_since(in_flight.started_at) >= timeout
            }
            _ => false,
        }
    }
}
