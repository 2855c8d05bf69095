//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated host URL.
///
/// This newtype validates that the URL has a proper format with a scheme
/// and a non-empty host, and normalizes away any trailing slash so that
/// paths can be appended without producing double slashes.
///
/// # Example
///
/// ```rust
/// use storefront_auth::HostUrl;
///
/// let url = HostUrl::new("https://shop.example.com").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), Some("shop.example.com"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let mut url = url.trim().to_string();

        // Trailing slashes would double up when joining paths
        while url.ends_with('/') && !url.ends_with("://") {
            url.pop();
        }

        // Find scheme
        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidHostUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        // Find host
        let host_start = scheme_end + 3; // Skip "://"
        if host_start >= url.len() {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        let host = &url[host_start..host_end];
        if host.is_empty() {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }

    /// Joins a path onto this URL.
    ///
    /// The path must start with `/` (enforced at configuration time).
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.url, path)
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for HostUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// A validated cookie name.
///
/// This newtype ensures the cookie name is non-empty and contains only
/// RFC 6265 token characters, preventing header-injection through
/// configuration values.
///
/// # Example
///
/// ```rust
/// use storefront_auth::CookieName;
///
/// let name = CookieName::new("customer_access_token").unwrap();
/// assert_eq!(name.as_ref(), "customer_access_token");
///
/// // Separators are rejected
/// assert!(CookieName::new("bad;name").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookieName(String);

impl CookieName {
    /// Creates a new validated cookie name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCookieName`] if the name is empty or
    /// contains characters outside the RFC 6265 token set.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.is_empty() || !name.chars().all(Self::is_token_char) {
            return Err(ConfigError::InvalidCookieName { name });
        }
        Ok(Self(name))
    }

    // RFC 6265 cookie-name is an HTTP token: printable ASCII minus separators
    fn is_token_char(c: char) -> bool {
        c.is_ascii_graphic()
            && !matches!(
                c,
                '(' | ')' | '<' | '>' | '@' | ','
                    | ';' | ':' | '\\' | '"' | '/'
                    | '[' | ']' | '?' | '=' | '{' | '}'
            )
    }
}

impl AsRef<str> for CookieName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CookieName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
