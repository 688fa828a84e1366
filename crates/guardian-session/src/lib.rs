// SPDX-License-Identifier: MIT OR Apache-2.0
//! Network session contract and HTTP shapes for the Guardian client SDK.
//!
//! The session contract is a deliberate two-step shape: [`NetworkSession::execute`]
//! submits a request and returns a [`DataTask`]; only the task's
//! [`start`](DataTask::start) hands the `(data, response, error)` outcome to
//! the completion callback.  Everything is synchronous and single-shot, so
//! tests drive ordering explicitly with no waiting or polling.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use guardian_error::GuardianError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Method
// ---------------------------------------------------------------------------

/// HTTP method for a Guardian API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// Retrieve a resource.
    Get,
    /// Create a resource or submit a transaction.
    Post,
    /// Partially update a resource.
    Patch,
    /// Remove a resource.
    Delete,
}

impl Method {
    /// Canonical uppercase method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// HttpRequest
// ---------------------------------------------------------------------------

/// An outgoing HTTP request, as submitted to a [`NetworkSession`].
///
/// Plain data with value equality, so tests can assert on the exact request a
/// caller produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute request URL.
    pub url: String,
    /// Request headers (deterministic ordering).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    /// Request body bytes, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Create a request with no headers and no body.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: BTreeMap::new(),
            body: None,
        }
    }

    /// Set a header, replacing any previous value for the same name.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Attach a body.
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }
}

// ---------------------------------------------------------------------------
// ResponseHead
// ---------------------------------------------------------------------------

/// Response metadata: status line and headers, without the body bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResponseHead {
    /// HTTP status code.
    pub status_code: u16,
    /// Response headers (deterministic ordering).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
}

impl ResponseHead {
    /// Create a head with the given status and no headers.
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            headers: BTreeMap::new(),
        }
    }

    /// Set a header, replacing any previous value for the same name.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

// ---------------------------------------------------------------------------
// Session contract
// ---------------------------------------------------------------------------

/// Completion callback receiving the `(data, response, error)` outcome of a
/// request.  Invoked at most once, on the thread that calls
/// [`DataTask::start`].
pub type Completion =
    Box<dyn FnOnce(Option<Vec<u8>>, Option<ResponseHead>, Option<GuardianError>) + Send>;

/// Handle for a submitted request.
///
/// Creating the task performs no I/O; [`start`](Self::start) runs the call
/// and hands the outcome to the completion.  Implementations invoke the
/// completion at most once — repeated `start` calls are no-ops.
pub trait DataTask {
    /// Run the submitted call and deliver the outcome.
    fn start(&mut self);
}

/// Something that can execute Guardian API requests.
///
/// Real transports and test doubles implement the same two-step
/// submit-then-start shape, so they are substitutable for one another.
pub trait NetworkSession {
    /// Submit `request`; the returned task delivers the outcome to
    /// `completion` once started.
    fn execute(&self, request: HttpRequest, completion: Completion) -> Box<dyn DataTask>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
