//! Read-only snapshot of the session cookie pair.

use crate::config::AuthConfig;

/// A read-only snapshot of the session cookie pair for one request.
///
/// The pair consists of an opaque access token and an epoch-millisecond
/// expiry timestamp. Both are written together by the external login/callback
/// handler; this crate never writes them.
///
/// Invariant: the pair is only usable when both halves are present and the
/// expiry parses as an integer. Any other combination reads as "no session"
/// through [`read`](Self::read); there is no error path distinguishing a
/// missing token from a malformed expiry.
///
/// # Example
///
/// ```rust
/// use storefront_auth::SessionCookies;
///
/// let cookies = SessionCookies::new(
///     Some("opaque-token".to_string()),
///     Some("1900000000000".to_string()),
/// );
/// assert_eq!(cookies.read(), Some(("opaque-token", 1_900_000_000_000)));
///
/// // Half-written pairs read as no session
/// let partial = SessionCookies::new(Some("opaque-token".to_string()), None);
/// assert_eq!(partial.read(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionCookies {
    access_token: Option<String>,
    expires_at: Option<String>,
}

impl SessionCookies {
    /// Creates a snapshot from the raw cookie values.
    ///
    /// `expires_at` is the stringified cookie value; it is not parsed until
    /// [`read`](Self::read) is called.
    #[must_use]
    pub const fn new(access_token: Option<String>, expires_at: Option<String>) -> Self {
        Self {
            access_token,
            expires_at,
        }
    }

    /// Creates a snapshot by looking up the configured cookie names through
    /// a caller-supplied lookup function.
    ///
    /// This adapts whatever cookie jar the surrounding framework provides
    /// without this crate depending on it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use storefront_auth::{AuthConfig, HostUrl, SessionCookies};
    ///
    /// let config = AuthConfig::builder()
    ///     .provider_url(HostUrl::new("https://id.example.com").unwrap())
    ///     .store_url(HostUrl::new("https://shop.example.com").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let mut jar = HashMap::new();
    /// jar.insert("customer_access_token", "tok");
    /// jar.insert("customer_token_expires_at", "1900000000000");
    ///
    /// let cookies = SessionCookies::from_lookup(&config, |name| {
    ///     jar.get(name).map(|v| (*v).to_string())
    /// });
    /// assert!(cookies.read().is_some());
    /// ```
    pub fn from_lookup<F>(config: &AuthConfig, mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        Self {
            access_token: lookup(config.access_token_cookie().as_ref()),
            expires_at: lookup(config.expiry_cookie().as_ref()),
        }
    }

    /// Returns the cookie pair, if it forms a valid session snapshot.
    ///
    /// Returns `Some((access_token, expires_at_ms))` only when the token is
    /// present and non-empty AND the expiry is present and parses as an
    /// epoch-millisecond integer. Everything else folds into `None`.
    #[must_use]
    pub fn read(&self) -> Option<(&str, i64)> {
        let token = self.access_token.as_deref().filter(|t| !t.is_empty())?;
        let expires_at: i64 = self.expires_at.as_deref()?.trim().parse().ok()?;
        Some((token, expires_at))
    }
}

// Verify SessionCookies is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SessionCookies>();
};
