// SPDX-License-Identifier: MIT OR Apache-2.0
//! Guardian client SDK — umbrella crate.
//!
//! Re-exports the public API of the workspace crates:
//!
//! - [`guardian_error`] — the error taxonomy ([`GuardianError`], [`ErrorCode`])
//!   with stable `a0.guardian.internal.*` wire codes.
//! - [`guardian_session`] — the network session contract ([`NetworkSession`],
//!   [`DataTask`]) and the HTTP shapes it exchanges.
//!
//! The deterministic test double lives in `guardian-session-mock` and is a
//! dev-dependency of code that tests against the session contract.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub use guardian_error::{ErrorCode, GuardianError, GuardianErrorDto, UnknownCode};
pub use guardian_session::{
    Completion, DataTask, HttpRequest, Method, NetworkSession, ResponseHead,
};
