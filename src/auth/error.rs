//! Error types for the provider-facing auth flows.
//!
//! # Error Types
//!
//! - [`AuthFlowError::SilentCheckFailed`]: the silent-check round trip failed
//!   at the transport layer
//! - [`AuthFlowError::MissingClientId`]: the authorize redirect requires a
//!   client id that was not configured
//!
//! Note that most "failures" in this layer are not errors at all: an expired
//! session, a malformed cookie, or an interaction-required outcome each
//! resolve to a navigation decision, never to an error value. Only genuine
//! provider/transport faults and configuration gaps surface here.

use thiserror::Error;

/// Errors that can occur during provider round trips.
///
/// # Thread Safety
///
/// `AuthFlowError` is `Send + Sync`, making it safe to use across async
/// boundaries.
#[derive(Debug, Error)]
pub enum AuthFlowError {
    /// The silent-check request failed at the transport layer.
    ///
    /// Only transport faults surface here; an HTTP-level refusal from the
    /// provider classifies as an interaction-required outcome instead.
    /// Callers should treat this as "recovery impossible" and route to
    /// explicit login, never as a reason to assume an authenticated state.
    #[error("Silent check failed: {message}")]
    SilentCheckFailed {
        /// The error message from the transport.
        message: String,
    },

    /// The silent-check authorize redirect requires a configured client id.
    ///
    /// Configure this via `AuthConfigBuilder::client_id()`.
    #[error("Client id must be configured for the silent-check redirect")]
    MissingClientId,
}

// Verify AuthFlowError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthFlowError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_check_failed_includes_message() {
        let error = AuthFlowError::SilentCheckFailed {
            message: "connection refused".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("Silent check failed"));
        assert!(message.contains("connection refused"));
    }

    #[test]
    fn test_missing_client_id_message() {
        let error = AuthFlowError::MissingClientId;
        assert!(error.to_string().contains("Client id"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: &dyn std::error::Error = &AuthFlowError::MissingClientId;
        let _ = error;
    }

    #[test]
    fn test_auth_flow_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AuthFlowError>();
    }
}
