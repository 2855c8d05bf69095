//! The status-check endpoint behavior.

use crate::session::{check_auth, AuthStatus, SessionCookies};
use serde::{Deserialize, Serialize};

/// The JSON body of a status-check response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheckBody {
    /// Whether the request carried a live session.
    pub authenticated: bool,
}

/// The full status-check response: an HTTP status plus its body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusCheckResponse {
    /// 200 when authenticated, 401 otherwise.
    pub status: u16,
    /// The JSON body.
    pub body: StatusCheckBody,
}

/// Computes the status-check endpoint response for one request.
///
/// Reads both session cookies and answers 200 `{"authenticated": true}` iff
/// the pair is present, well formed, and unexpired; 401
/// `{"authenticated": false}` otherwise. The negative branch carries no
/// detail about why, by design.
///
/// # Example
///
/// ```rust
/// use storefront_auth::{handle_status_check, SessionCookies};
///
/// let response = handle_status_check(&SessionCookies::new(None, None));
/// assert_eq!(response.status, 401);
/// assert!(!response.body.authenticated);
/// ```
#[must_use]
pub fn handle_status_check(cookies: &SessionCookies) -> StatusCheckResponse {
    match check_auth(cookies) {
        AuthStatus::Authenticated => StatusCheckResponse {
            status: 200,
            body: StatusCheckBody {
                authenticated: true,
            },
        },
        AuthStatus::Unauthenticated => StatusCheckResponse {
            status: 401,
            body: StatusCheckBody {
                authenticated: false,
            },
        },
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StatusCheckResponse>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_session_answers_200_authenticated() {
        // Far-future expiry keeps this test stable
        let cookies = SessionCookies::new(
            Some("tok".to_string()),
            Some("4102444800000".to_string()),
        );

        let response = handle_status_check(&cookies);

        assert_eq!(response.status, 200);
        assert!(response.body.authenticated);
    }

    #[test]
    fn test_missing_session_answers_401_unauthenticated() {
        let response = handle_status_check(&SessionCookies::new(None, None));

        assert_eq!(response.status, 401);
        assert!(!response.body.authenticated);
    }

    #[test]
    fn test_expired_session_answers_401() {
        let cookies = SessionCookies::new(Some("tok".to_string()), Some("1".to_string()));

        let response = handle_status_check(&cookies);

        assert_eq!(response.status, 401);
    }

    #[test]
    fn test_body_serializes_to_expected_json() {
        let body = StatusCheckBody {
            authenticated: true,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"authenticated":true}"#);

        let body: StatusCheckBody = serde_json::from_str(r#"{"authenticated":false}"#).unwrap();
        assert!(!body.authenticated);
    }

    #[test]
    fn test_response_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StatusCheckResponse>();
    }
}
