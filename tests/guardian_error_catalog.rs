// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error taxonomy tests for the workspace error types.
//!
//! Verifies Display, Debug, Error trait, Send + Sync + 'static bounds,
//! wire-string stability, and anyhow interop.

use std::collections::BTreeMap;
use std::error::Error;

use guardian::{ErrorCode, GuardianError, UnknownCode};

// ── Helpers ──────────────────────────────────────────────────────────────

fn assert_send_sync_static<T: Send + Sync + 'static>() {}

fn assert_std_error<T: std::error::Error>() {}

/// Verify Display is non-empty and Debug is non-empty for a given error value.
fn check_display_debug(err: &dyn Error) {
    let display = err.to_string();
    assert!(!display.is_empty(), "Display must be non-empty");
    let debug = format!("{err:?}");
    assert!(!debug.is_empty(), "Debug must be non-empty");
}

/// Round-trip through anyhow::Error and back via downcast.
fn check_anyhow_roundtrip<E: Error + Send + Sync + 'static + Clone>(err: E) {
    let anyhow_err: anyhow::Error = anyhow::Error::new(err.clone());
    let display_before = err.to_string();
    let display_after = anyhow_err.to_string();
    assert_eq!(display_before, display_after);
    let downcasted = anyhow_err
        .downcast_ref::<E>()
        .expect("downcast should succeed");
    assert_eq!(downcasted.to_string(), display_before);
}

// =========================================================================
// GuardianError
// =========================================================================
mod guardian_error {
    use super::*;

    #[test]
    fn trait_bounds() {
        assert_send_sync_static::<GuardianError>();
        assert_std_error::<GuardianError>();
    }

    #[test]
    fn display_and_debug_non_empty_for_all_constructors() {
        let errors = [
            GuardianError::internal_error(),
            GuardianError::failed_request(),
            GuardianError::invalid_base32_secret(),
            GuardianError::invalid_public_key(),
            GuardianError::invalid_private_key(),
            GuardianError::invalid_otp_algorithm(),
            GuardianError::invalid_payload(),
            GuardianError::invalid_response(),
            GuardianError::invalid_response_with_status(503),
            GuardianError::invalid_enrollment_uri(),
            GuardianError::invalid_notification_action_identifier(),
        ];
        for err in &errors {
            check_display_debug(err);
        }
    }

    #[test]
    fn display_carries_the_wire_code() {
        let err = GuardianError::invalid_enrollment_uri();
        assert!(
            err.to_string()
                .contains("a0.guardian.internal.invalid_enrollment_uri"),
            "{err}"
        );
    }

    #[test]
    fn no_source_by_default() {
        let err = GuardianError::internal_error();
        assert!(err.source().is_none());
    }

    #[test]
    fn anyhow_interop() {
        check_anyhow_roundtrip(GuardianError::invalid_response_with_status(503));

        let mut payload = BTreeMap::new();
        payload.insert(
            "errorCode".to_string(),
            serde_json::Value::String("invalid_token".to_string()),
        );
        check_anyhow_roundtrip(GuardianError::from_server_payload(payload, 401));
    }

    #[test]
    fn question_mark_propagation() {
        fn fails() -> Result<(), GuardianError> {
            Err(GuardianError::invalid_base32_secret())
        }
        fn caller() -> Result<(), GuardianError> {
            fails()?;
            Ok(())
        }
        let err = caller().unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::InvalidBase32Secret));
    }
}

// =========================================================================
// Wire-string stability
// =========================================================================
mod wire_strings {
    use super::*;

    // External callers match on these exact strings; a failure here is a
    // breaking API change, not a refactor.
    #[test]
    fn codes_are_frozen() {
        let expected = [
            (ErrorCode::InternalError, "a0.guardian.internal.unknown_error"),
            (
                ErrorCode::FailedRequest,
                "a0.guardian.internal.unknown_server_error",
            ),
            (
                ErrorCode::InvalidBase32Secret,
                "a0.guardian.internal.invalid_base32_secret",
            ),
            (
                ErrorCode::InvalidPublicKey,
                "a0.guardian.internal.invalid_public_key",
            ),
            (
                ErrorCode::InvalidPrivateKey,
                "a0.guardian.internal.invalid_private_key",
            ),
            (
                ErrorCode::InvalidOtpAlgorithm,
                "a0.guardian.internal.invalid_otp_algorithm",
            ),
            (
                ErrorCode::InvalidPayload,
                "a0.guardian.internal.invalid_payload",
            ),
            (
                ErrorCode::InvalidResponse,
                "a0.guardian.internal.invalid_response",
            ),
            (
                ErrorCode::InvalidEnrollmentUri,
                "a0.guardian.internal.invalid_enrollment_uri",
            ),
            (
                ErrorCode::InvalidNotificationActionIdentifier,
                "a0.guardian.internal.invalid_notification_action_identifier",
            ),
        ];
        for (code, wire) in expected {
            assert_eq!(code.as_str(), wire);
            assert_eq!(wire.parse::<ErrorCode>().unwrap(), code);
        }
    }
}

// =========================================================================
// UnknownCode
// =========================================================================
mod unknown_code {
    use super::*;

    #[test]
    fn trait_bounds() {
        assert_send_sync_static::<UnknownCode>();
        assert_std_error::<UnknownCode>();
    }

    #[test]
    fn display_names_the_offending_string() {
        let err = "not.a.code".parse::<ErrorCode>().unwrap_err();
        assert_eq!(err.to_string(), "unrecognized guardian error code: not.a.code");
        check_display_debug(&err);
    }

    #[test]
    fn anyhow_interop() {
        check_anyhow_roundtrip(UnknownCode("bogus".to_string()));
    }
}
