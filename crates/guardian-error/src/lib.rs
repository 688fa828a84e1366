//! Error taxonomy with stable wire codes for the Guardian client SDK.
//!
//! Every failure surfaced by the SDK is a [`GuardianError`]: a stable,
//! machine-readable code, an optional server-provided context payload, and the
//! HTTP status code of the failed exchange.  Client-detected failures carry an
//! [`ErrorCode`] variant; malformed or rejected server exchanges carry the raw
//! error body the server returned.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// ErrorCode
// ---------------------------------------------------------------------------

/// Machine-readable, stable error code for a well-known failure category.
///
/// Each variant serialises to a namespaced `a0.guardian.internal.*` string
/// that is guaranteed not to change across releases — consuming code (UI,
/// logging, retry policy) matches on these strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ErrorCode {
    /// Unexpected, unclassified internal failure.
    #[serde(rename = "a0.guardian.internal.unknown_error")]
    InternalError,
    /// Generic failed HTTP request; also the fallback when a server error
    /// body carries no usable code.
    #[serde(rename = "a0.guardian.internal.unknown_server_error")]
    FailedRequest,
    /// Shared secret is not valid Base32.
    #[serde(rename = "a0.guardian.internal.invalid_base32_secret")]
    InvalidBase32Secret,
    /// Malformed public key material.
    #[serde(rename = "a0.guardian.internal.invalid_public_key")]
    InvalidPublicKey,
    /// Malformed private key material.
    #[serde(rename = "a0.guardian.internal.invalid_private_key")]
    InvalidPrivateKey,
    /// Unsupported or unrecognised OTP hash algorithm.
    #[serde(rename = "a0.guardian.internal.invalid_otp_algorithm")]
    InvalidOtpAlgorithm,
    /// Outgoing request body could not be built or encoded.
    #[serde(rename = "a0.guardian.internal.invalid_payload")]
    InvalidPayload,
    /// Server response body could not be parsed.
    #[serde(rename = "a0.guardian.internal.invalid_response")]
    InvalidResponse,
    /// Enrollment URI string could not be parsed.
    #[serde(rename = "a0.guardian.internal.invalid_enrollment_uri")]
    InvalidEnrollmentUri,
    /// Push-notification action identifier is not recognised.
    #[serde(rename = "a0.guardian.internal.invalid_notification_action_identifier")]
    InvalidNotificationActionIdentifier,
}

impl ErrorCode {
    /// Stable `&'static str` representation of the code (e.g.
    /// `"a0.guardian.internal.invalid_payload"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InternalError => "a0.guardian.internal.unknown_error",
            Self::FailedRequest => "a0.guardian.internal.unknown_server_error",
            Self::InvalidBase32Secret => "a0.guardian.internal.invalid_base32_secret",
            Self::InvalidPublicKey => "a0.guardian.internal.invalid_public_key",
            Self::InvalidPrivateKey => "a0.guardian.internal.invalid_private_key",
            Self::InvalidOtpAlgorithm => "a0.guardian.internal.invalid_otp_algorithm",
            Self::InvalidPayload => "a0.guardian.internal.invalid_payload",
            Self::InvalidResponse => "a0.guardian.internal.invalid_response",
            Self::InvalidEnrollmentUri => "a0.guardian.internal.invalid_enrollment_uri",
            Self::InvalidNotificationActionIdentifier => {
                "a0.guardian.internal.invalid_notification_action_identifier"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A wire string did not match any known [`ErrorCode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized guardian error code: {0}")]
pub struct UnknownCode(pub String);

impl FromStr for ErrorCode {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a0.guardian.internal.unknown_error" => Ok(Self::InternalError),
            "a0.guardian.internal.unknown_server_error" => Ok(Self::FailedRequest),
            "a0.guardian.internal.invalid_base32_secret" => Ok(Self::InvalidBase32Secret),
            "a0.guardian.internal.invalid_public_key" => Ok(Self::InvalidPublicKey),
            "a0.guardian.internal.invalid_private_key" => Ok(Self::InvalidPrivateKey),
            "a0.guardian.internal.invalid_otp_algorithm" => Ok(Self::InvalidOtpAlgorithm),
            "a0.guardian.internal.invalid_payload" => Ok(Self::InvalidPayload),
            "a0.guardian.internal.invalid_response" => Ok(Self::InvalidResponse),
            "a0.guardian.internal.invalid_enrollment_uri" => Ok(Self::InvalidEnrollmentUri),
            "a0.guardian.internal.invalid_notification_action_identifier" => {
                Ok(Self::InvalidNotificationActionIdentifier)
            }
            other => Err(UnknownCode(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// GuardianError
// ---------------------------------------------------------------------------

/// What a [`GuardianError`] knows about its cause: either a well-known
/// client-side category, or the schema-less error body a server returned.
#[derive(Clone, PartialEq)]
enum ErrorDetail {
    Known(ErrorCode),
    Server(BTreeMap<String, serde_json::Value>),
}

/// An error reported by the Guardian client SDK.
///
/// Immutable after construction.  Created at the point a failure is detected
/// (local validation failure, malformed server response, or HTTP-layer error)
/// and propagated unchanged to whatever caller can act on
/// [`error_code`](Self::error_code).
///
/// ```
/// use guardian_error::{ErrorCode, GuardianError};
///
/// let err = GuardianError::invalid_response_with_status(503);
/// assert_eq!(err.error_code(), "a0.guardian.internal.invalid_response");
/// assert_eq!(err.code(), Some(ErrorCode::InvalidResponse));
/// assert_eq!(err.status_code(), 503);
/// ```
#[derive(Clone, PartialEq)]
pub struct GuardianError {
    detail: ErrorDetail,
    status_code: u16,
}

impl GuardianError {
    fn known(code: ErrorCode, status_code: u16) -> Self {
        Self {
            detail: ErrorDetail::Known(code),
            status_code,
        }
    }

    /// Wrap a server-provided error body.
    ///
    /// The payload is kept verbatim as context; [`error_code`](Self::error_code)
    /// reads its `"errorCode"` entry, falling back to
    /// [`ErrorCode::FailedRequest`] when the entry is missing or not a string.
    pub fn from_server_payload(
        payload: BTreeMap<String, serde_json::Value>,
        status_code: u16,
    ) -> Self {
        Self {
            detail: ErrorDetail::Server(payload),
            status_code,
        }
    }

    /// Unexpected, unclassified internal failure.
    pub fn internal_error() -> Self {
        Self::known(ErrorCode::InternalError, 0)
    }

    /// Generic failed HTTP request.
    pub fn failed_request() -> Self {
        Self::known(ErrorCode::FailedRequest, 0)
    }

    /// Shared secret is not valid Base32.
    pub fn invalid_base32_secret() -> Self {
        Self::known(ErrorCode::InvalidBase32Secret, 0)
    }

    /// Malformed public key material.
    pub fn invalid_public_key() -> Self {
        Self::known(ErrorCode::InvalidPublicKey, 0)
    }

    /// Malformed private key material.
    pub fn invalid_private_key() -> Self {
        Self::known(ErrorCode::InvalidPrivateKey, 0)
    }

    /// Unsupported or unrecognised OTP hash algorithm.
    pub fn invalid_otp_algorithm() -> Self {
        Self::known(ErrorCode::InvalidOtpAlgorithm, 0)
    }

    /// Outgoing request body could not be built or encoded.
    pub fn invalid_payload() -> Self {
        Self::known(ErrorCode::InvalidPayload, 0)
    }

    /// Server response body could not be parsed.
    pub fn invalid_response() -> Self {
        Self::known(ErrorCode::InvalidResponse, 0)
    }

    /// Server response body could not be parsed; keeps the HTTP status of the
    /// offending response.
    pub fn invalid_response_with_status(status_code: u16) -> Self {
        Self::known(ErrorCode::InvalidResponse, status_code)
    }

    /// Enrollment URI string could not be parsed.
    pub fn invalid_enrollment_uri() -> Self {
        Self::known(ErrorCode::InvalidEnrollmentUri, 0)
    }

    /// Push-notification action identifier is not recognised.
    pub fn invalid_notification_action_identifier() -> Self {
        Self::known(ErrorCode::InvalidNotificationActionIdentifier, 0)
    }

    /// The code identifying the cause of failure.
    ///
    /// For client-detected failures this is the category's wire string; for
    /// server errors it is the payload's `"errorCode"` entry when present and
    /// a string.  Never empty: absent or non-string entries fall back to
    /// [`ErrorCode::FailedRequest`]'s wire string.
    pub fn error_code(&self) -> &str {
        match &self.detail {
            ErrorDetail::Known(code) => code.as_str(),
            ErrorDetail::Server(payload) => payload
                .get("errorCode")
                .and_then(serde_json::Value::as_str)
                .unwrap_or(ErrorCode::FailedRequest.as_str()),
        }
    }

    /// The well-known failure category, when this error was constructed by
    /// the client rather than from a server payload.
    pub fn code(&self) -> Option<ErrorCode> {
        match &self.detail {
            ErrorDetail::Known(code) => Some(*code),
            ErrorDetail::Server(_) => None,
        }
    }

    /// Associated HTTP status code; `0` when not applicable (purely local
    /// errors).
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The server-provided context payload, when present.
    pub fn context(&self) -> Option<&BTreeMap<String, serde_json::Value>> {
        match &self.detail {
            ErrorDetail::Known(_) => None,
            ErrorDetail::Server(payload) => Some(payload),
        }
    }
}

impl From<ErrorCode> for GuardianError {
    fn from(code: ErrorCode) -> Self {
        Self::known(code, 0)
    }
}

impl fmt::Debug for GuardianError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("GuardianError");
        d.field("code", &self.error_code());
        if let Some(ctx) = self.context() {
            d.field("context", ctx);
        }
        d.field("status_code", &self.status_code);
        d.finish()
    }
}

impl fmt::Display for GuardianError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GuardianError(code={}, context=", self.error_code())?;
        match self.context() {
            // Deterministic output thanks to BTreeMap.
            Some(ctx) => match serde_json::to_string(ctx) {
                Ok(rendered) => f.write_str(&rendered)?,
                Err(_) => f.write_str("{}")?,
            },
            None => f.write_str("{}")?,
        }
        f.write_str(")")
    }
}

impl std::error::Error for GuardianError {}

// ---------------------------------------------------------------------------
// Serialization support
// ---------------------------------------------------------------------------

/// Serialisable snapshot of a [`GuardianError`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct GuardianErrorDto {
    /// Resolved error code (wire string or server-defined).
    pub code: String,
    /// Server context payload, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<BTreeMap<String, serde_json::Value>>,
    /// Associated HTTP status code; `0` when not applicable.
    pub status_code: u16,
}

impl From<&GuardianError> for GuardianErrorDto {
    fn from(err: &GuardianError) -> Self {
        Self {
            code: err.error_code().to_string(),
            context: err.context().cloned(),
            status_code: err.status_code,
        }
    }
}

impl From<GuardianErrorDto> for GuardianError {
    fn from(dto: GuardianErrorDto) -> Self {
        match dto.context {
            Some(payload) => Self::from_server_payload(payload, dto.status_code),
            None => match dto.code.parse::<ErrorCode>() {
                Ok(code) => Self::known(code, dto.status_code),
                // Server-defined code without its payload: rebuild the
                // minimal payload so error_code() still reports it.
                Err(UnknownCode(code)) => {
                    let mut payload = BTreeMap::new();
                    payload.insert("errorCode".to_string(), serde_json::Value::String(code));
                    Self::from_server_payload(payload, dto.status_code)
                }
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
