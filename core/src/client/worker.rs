//! Background worker thread for a blocking [`Backend`].

use super::{Backend, SearchClient, SearchRequest, SearchResponse};
use crate::error::SearchError;
use crate::types::RequestToken;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use tracing::{debug, trace};

enum Job {
    Search(SearchRequest),
    Shutdown,
}

/// [`SearchClient`] that runs a [`Backend`] on its own thread.
///
/// Responses arrive on the receiver returned by [`WorkerClient::start`]. The
/// `notify` callback fires after each response is queued, so a host event loop
/// can wake up and drain the receiver.
pub struct WorkerClient {
    jobs: Sender<Job>,
    responses: Sender<SearchResponse>,
    /// Requests below this token are skipped if the worker has not started them.
    floor: Arc<AtomicU64>,
    notify: Arc<dyn Fn() + Send + Sync>,
    handle: Option<JoinHandle<()>>,
}

impl WorkerClient {
    pub fn start<B: Backend>(
        backend: B,
        notify: Arc<dyn Fn() + Send + Sync>,
    ) -> (Self, Receiver<SearchResponse>) {
        let (job_tx, job_rx) = mpsc::channel::<Job>();
        let (response_tx, response_rx) = mpsc::channel::<SearchResponse>();
        let floor = Arc::new(AtomicU64::new(0));

        let worker_floor = Arc::clone(&floor);
        let worker_responses = response_tx.clone();
        let worker_notify = Arc::clone(&notify);
        let handle = thread::spawn(move || {
            worker_loop(backend, job_rx, worker_responses, worker_floor, worker_notify);
        });

        let client = Self {
            jobs: job_tx,
            responses: response_tx,
            floor,
            notify,
            handle: Some(handle),
        };
        (client, response_rx)
    }

    /// Stops the worker and waits for the current search, if any, to finish.
    pub fn shutdown(mut self) {
        let _ = self.jobs.send(Job::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl SearchClient for WorkerClient {
    fn dispatch(&mut self, request: SearchRequest) {
        let token = request.token;
        self.floor.fetch_max(token.get(), Ordering::AcqRel);

        if self.jobs.send(Job::Search(request)).is_err() {
            debug!(%token, "search worker gone; failing request");
            if self
                .responses
                .send(SearchResponse::err(token, SearchError::WorkerGone))
                .is_ok()
            {
                (self.notify)();
            }
        }
    }

    fn abort(&mut self, token: RequestToken) {
        self.floor
            .fetch_max(token.get().saturating_add(1), Ordering::AcqRel);
    }
}

impl Drop for WorkerClient {
    fn drop(&mut self) {
        // Detach rather than join: a slow backend call must not block the caller.
        let _ = self.jobs.send(Job::Shutdown);
    }
}

fn worker_loop<B: Backend>(
    backend: B,
    jobs: Receiver<Job>,
    responses: Sender<SearchResponse>,
    floor: Arc<AtomicU64>,
    notify: Arc<dyn Fn() + Send + Sync>,
) {
    for job in jobs {
        let request = match job {
            Job::Search(request) => request,
            Job::Shutdown => break,
        };

        if request.token.get() < floor.load(Ordering::Acquire) {
            trace!(token = %request.token, "skipping superseded search");
            continue;
        }

        let outcome = backend.search(&request.query);
        if responses
            .send(SearchResponse {
                token: request.token,
                outcome,
            })
            .is_err()
        {
            break;
        }
        notify();
    }
}
