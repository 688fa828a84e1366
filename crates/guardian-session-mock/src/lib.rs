// SPDX-License-Identifier: MIT OR Apache-2.0
//! Mock network session used for local testing.
//!
//! Collapses what would be an asynchronous network call into an immediate,
//! same-thread callback invocation triggered only by [`DataTask::start`], so
//! tests control ordering completely and never wait or poll.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use guardian_error::GuardianError;
use guardian_session::{Completion, DataTask, HttpRequest, NetworkSession, ResponseHead};
use std::sync::Mutex;
use tracing::{debug, trace};

// ---------------------------------------------------------------------------
// MockSession
// ---------------------------------------------------------------------------

/// A network session for unit tests.
///
/// Replays the fixed `(data, response, error)` triple supplied at
/// construction for every request it executes, and records the most recently
/// submitted request in a single slot.
///
/// ```
/// use guardian_session::{DataTask, HttpRequest, Method, NetworkSession, ResponseHead};
/// use guardian_session_mock::MockSession;
///
/// let session = MockSession::new(Some(b"{}".to_vec()), Some(ResponseHead::new(200)), None);
/// let mut task = session.execute(
///     HttpRequest::new(Method::Get, "https://example.com"),
///     Box::new(|data, response, error| {
///         assert_eq!(data.as_deref(), Some(b"{}".as_slice()));
///         assert_eq!(response.unwrap().status_code, 200);
///         assert!(error.is_none());
///     }),
/// );
/// task.start();
/// assert!(session.last_request().is_some());
/// ```
pub struct MockSession {
    data: Option<Vec<u8>>,
    response: Option<ResponseHead>,
    error: Option<GuardianError>,
    last_request: Mutex<Option<HttpRequest>>,
}

impl MockSession {
    /// Create a session that hands `(data, response, error)` to every
    /// completion.
    pub fn new(
        data: Option<Vec<u8>>,
        response: Option<ResponseHead>,
        error: Option<GuardianError>,
    ) -> Self {
        Self {
            data,
            response,
            error,
            last_request: Mutex::new(None),
        }
    }

    /// The most recently executed request, if any.
    ///
    /// Overwritten on every [`execute`](NetworkSession::execute) call; this is
    /// the assertion surface for "was the right request constructed".
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.last_request
            .lock()
            .expect("last request lock poisoned")
            .clone()
    }
}

impl NetworkSession for MockSession {
    fn execute(&self, request: HttpRequest, completion: Completion) -> Box<dyn DataTask> {
        debug!(method = %request.method, url = %request.url, "mock session recorded request");
        *self
            .last_request
            .lock()
            .expect("last request lock poisoned") = Some(request);

        let data = self.data.clone();
        let response = self.response.clone();
        let error = self.error.clone();
        Box::new(MockTask {
            fire: Some(Box::new(move || completion(data, response, error))),
        })
    }
}

// ---------------------------------------------------------------------------
// MockTask
// ---------------------------------------------------------------------------

/// Task handle returned by [`MockSession::execute`].
///
/// [`start`](DataTask::start) invokes the completion synchronously on the
/// calling thread, exactly once; further calls do nothing.
pub struct MockTask {
    fire: Option<Box<dyn FnOnce() + Send>>,
}

impl DataTask for MockTask {
    fn start(&mut self) {
        if let Some(fire) = self.fire.take() {
            trace!("mock task replaying canned outcome");
            fire();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
