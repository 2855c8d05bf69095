//! Re-authentication outcome codes carried on return-trip URLs.
//!
//! After any provider round trip, the landing page may carry a single
//! outcome-code query parameter. One configured sentinel value means
//! "interaction required"; any other non-empty value means the silent
//! attempt recovered the session. The code is otherwise opaque.

use crate::config::AuthConfig;
use std::borrow::Cow;
use std::fmt;

/// An opaque re-authentication outcome code from a return-trip URL.
///
/// # Example
///
/// ```rust
/// use storefront_auth::{AuthConfig, HostUrl, OutcomeCode};
///
/// let config = AuthConfig::builder()
///     .provider_url(HostUrl::new("https://id.example.com").unwrap())
///     .store_url(HostUrl::new("https://shop.example.com").unwrap())
///     .build()
///     .unwrap();
///
/// let code = OutcomeCode::from_query(&config, "auth_outcome=login_required").unwrap();
/// assert!(code.is_interaction_required(&config));
///
/// let code = OutcomeCode::from_query(&config, "auth_outcome=ok-7f3a").unwrap();
/// assert!(!code.is_interaction_required(&config));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeCode(String);

impl OutcomeCode {
    /// Wraps a raw outcome-code value.
    ///
    /// Returns `None` for an empty value; an empty code carries no outcome.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Extracts the outcome code from a raw URL query string.
    ///
    /// `query` is everything after `?`, without the leading `?`. Returns
    /// `None` when the configured parameter is absent or empty. Values are
    /// percent-decoded; a value that fails to decode is used verbatim, since
    /// the code is opaque anyway.
    #[must_use]
    pub fn from_query(config: &AuthConfig, query: &str) -> Option<Self> {
        let param = config.outcome_param();
        query.split('&').find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            if key != param {
                return None;
            }
            let decoded = urlencoding::decode(value)
                .unwrap_or(Cow::Borrowed(value))
                .into_owned();
            Self::new(decoded)
        })
    }

    /// Extracts the outcome code from a full URL, if it has a query string.
    #[must_use]
    pub fn from_url(config: &AuthConfig, url: &str) -> Option<Self> {
        let (_, query) = url.split_once('?')?;
        // A fragment after the query would otherwise leak into the last value
        let query = query.split('#').next().unwrap_or(query);
        Self::from_query(config, query)
    }

    /// Returns `true` when this code is the configured interaction-required
    /// sentinel, meaning silent recovery failed and explicit login must be
    /// shown.
    #[must_use]
    pub fn is_interaction_required(&self, config: &AuthConfig) -> bool {
        self.0 == config.interaction_required_sentinel()
    }
}

impl AsRef<str> for OutcomeCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OutcomeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Verify OutcomeCode is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OutcomeCode>();
};
