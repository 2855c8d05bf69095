//! The stateless authentication status check.

use crate::session::SessionCookies;
use chrono::Utc;

/// The derived authentication status for one check.
///
/// Computed fresh on every call to [`check_auth`]; never cached. The
/// unauthenticated branch deliberately carries no detail: "expired",
/// "never logged in", and "malformed" are indistinguishable to callers so
/// the status cannot be used as an oracle to enumerate session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    /// A non-empty access token is present and its expiry is in the future.
    Authenticated,
    /// Anything else.
    Unauthenticated,
}

impl AuthStatus {
    /// Returns `true` for [`AuthStatus::Authenticated`].
    #[must_use]
    pub const fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

/// Checks whether the session cookie pair represents a live session.
///
/// The status is [`AuthStatus::Authenticated`] iff the access token is
/// present AND the expiry is present AND the expiry is strictly greater than
/// the current wall-clock time in epoch milliseconds. Any other combination
/// yields [`AuthStatus::Unauthenticated`].
///
/// This function performs no mutation and no network I/O; it is safe to call
/// repeatedly and concurrently, and two immediate calls with unchanged
/// cookies yield the same result.
///
/// # Example
///
/// ```rust
/// use storefront_auth::{check_auth, AuthStatus, SessionCookies};
///
/// let cookies = SessionCookies::new(Some("tok".to_string()), Some("0".to_string()));
/// assert_eq!(check_auth(&cookies), AuthStatus::Unauthenticated);
/// ```
#[must_use]
pub fn check_auth(cookies: &SessionCookies) -> AuthStatus {
    check_auth_at(cookies, Utc::now().timestamp_millis())
}

/// [`check_auth`] against an explicit clock, for deterministic callers.
///
/// `now_ms` is the current time in epoch milliseconds.
#[must_use]
pub fn check_auth_at(cookies: &SessionCookies, now_ms: i64) -> AuthStatus {
    match cookies.read() {
        Some((_token, expires_at)) if expires_at > now_ms => AuthStatus::Authenticated,
        _ => AuthStatus::Unauthenticated,
    }
}

// Verify AuthStatus is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthStatus>();
};

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    fn cookies(token: Option<&str>, expires: Option<&str>) -> SessionCookies {
        SessionCookies::new(
            token.map(ToString::to_string),
            expires.map(ToString::to_string),
        )
    }

    #[test]
    fn test_future_expiry_with_token_is_authenticated() {
        let c = cookies(Some("tok"), Some("1700000000001"));
        assert_eq!(check_auth_at(&c, NOW), AuthStatus::Authenticated);
    }

    #[test]
    fn test_expiry_equal_to_now_is_unauthenticated() {
        // Strictly-greater comparison: expiry at now is already stale
        let c = cookies(Some("tok"), Some("1700000000000"));
        assert_eq!(check_auth_at(&c, NOW), AuthStatus::Unauthenticated);
    }

    #[test]
    fn test_expiry_one_millisecond_in_past_is_unauthenticated() {
        let c = cookies(Some("tok"), Some("1699999999999"));
        assert_eq!(check_auth_at(&c, NOW), AuthStatus::Unauthenticated);
    }

    #[test]
    fn test_missing_token_is_unauthenticated_regardless_of_expiry() {
        let c = cookies(None, Some("9999999999999"));
        assert_eq!(check_auth_at(&c, NOW), AuthStatus::Unauthenticated);
    }

    #[test]
    fn test_missing_expiry_is_unauthenticated_regardless_of_token() {
        let c = cookies(Some("tok"), None);
        assert_eq!(check_auth_at(&c, NOW), AuthStatus::Unauthenticated);
    }

    #[test]
    fn test_both_missing_is_unauthenticated() {
        let c = cookies(None, None);
        assert_eq!(check_auth_at(&c, NOW), AuthStatus::Unauthenticated);
    }

    #[test]
    fn test_malformed_expiry_is_unauthenticated() {
        let c = cookies(Some("tok"), Some("soon"));
        assert_eq!(check_auth_at(&c, NOW), AuthStatus::Unauthenticated);
    }

    #[test]
    fn test_check_is_idempotent() {
        let c = cookies(Some("tok"), Some("1700000000001"));
        let first = check_auth_at(&c, NOW);
        let second = check_auth_at(&c, NOW);
        assert_eq!(first, second);
    }

    #[test]
    fn test_wall_clock_entry_point_rejects_past_expiry() {
        // Epoch 0 is always in the past for a live clock
        let c = cookies(Some("tok"), Some("0"));
        assert_eq!(check_auth(&c), AuthStatus::Unauthenticated);
    }

    #[test]
    fn test_is_authenticated_helper() {
        assert!(AuthStatus::Authenticated.is_authenticated());
        assert!(!AuthStatus::Unauthenticated.is_authenticated());
    }

    #[test]
    fn test_auth_status_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AuthStatus>();
    }
}
