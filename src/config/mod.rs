//! Configuration types for the storefront auth layer.
//!
//! This module provides the core configuration types used to describe the
//! identity provider, the storefront origin, and the session cookie contract.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`AuthConfig`]: The main configuration struct holding all settings
//! - [`AuthConfigBuilder`]: A builder for constructing [`AuthConfig`] instances
//! - [`HostUrl`]: A validated host URL newtype
//! - [`CookieName`]: A validated cookie name newtype
//!
//! # Example
//!
//! ```rust
//! use storefront_auth::{AuthConfig, HostUrl};
//!
//! let config = AuthConfig::builder()
//!     .provider_url(HostUrl::new("https://id.example.com").unwrap())
//!     .store_url(HostUrl::new("https://shop.example.com").unwrap())
//!     .client_id("storefront-client")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.account_url(), "https://shop.example.com/account");
//! ```

mod newtypes;

pub use newtypes::{CookieName, HostUrl};

use crate::error::ConfigError;

/// Default name of the cookie carrying the opaque access token.
const DEFAULT_ACCESS_TOKEN_COOKIE: &str = "customer_access_token";

/// Default name of the cookie carrying the epoch-millisecond expiry.
const DEFAULT_EXPIRY_COOKIE: &str = "customer_token_expires_at";

/// Default return-trip query parameter carrying the re-authentication outcome.
const DEFAULT_OUTCOME_PARAM: &str = "auth_outcome";

/// Default sentinel value meaning silent recovery is impossible.
const DEFAULT_INTERACTION_REQUIRED: &str = "login_required";

/// Configuration for the storefront session/auth layer.
///
/// This struct holds everything the auth flows need: the identity provider
/// origin, the storefront origin, the cookie names that make up the session
/// cookie pair, and the return-trip outcome parameter contract.
///
/// # Thread Safety
///
/// `AuthConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use storefront_auth::{AuthConfig, HostUrl};
///
/// let config = AuthConfig::builder()
///     .provider_url(HostUrl::new("https://id.example.com").unwrap())
///     .store_url(HostUrl::new("https://shop.example.com").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.login_url(), "https://shop.example.com/login");
/// assert_eq!(config.logout_url(), "https://id.example.com/logout");
/// ```
#[derive(Clone, Debug)]
pub struct AuthConfig {
    provider_url: HostUrl,
    store_url: HostUrl,
    client_id: Option<String>,
    account_path: String,
    login_path: String,
    silent_check_return_path: String,
    access_token_cookie: CookieName,
    expiry_cookie: CookieName,
    outcome_param: String,
    interaction_required_sentinel: String,
}

impl AuthConfig {
    /// Creates a new builder for constructing an `AuthConfig`.
    #[must_use]
    pub fn builder() -> AuthConfigBuilder {
        AuthConfigBuilder::new()
    }

    /// Returns the identity provider origin.
    #[must_use]
    pub const fn provider_url(&self) -> &HostUrl {
        &self.provider_url
    }

    /// Returns the storefront origin.
    #[must_use]
    pub const fn store_url(&self) -> &HostUrl {
        &self.store_url
    }

    /// Returns the OAuth client id, if configured.
    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// Returns the name of the access-token cookie.
    #[must_use]
    pub const fn access_token_cookie(&self) -> &CookieName {
        &self.access_token_cookie
    }

    /// Returns the name of the expiry cookie.
    #[must_use]
    pub const fn expiry_cookie(&self) -> &CookieName {
        &self.expiry_cookie
    }

    /// Returns the name of the return-trip outcome query parameter.
    #[must_use]
    pub fn outcome_param(&self) -> &str {
        &self.outcome_param
    }

    /// Returns the sentinel outcome value meaning "user interaction required".
    #[must_use]
    pub fn interaction_required_sentinel(&self) -> &str {
        &self.interaction_required_sentinel
    }

    /// Returns the full URL of the authenticated landing destination.
    #[must_use]
    pub fn account_url(&self) -> String {
        self.store_url.join(&self.account_path)
    }

    /// Returns the full URL of the explicit login screen.
    #[must_use]
    pub fn login_url(&self) -> String {
        self.store_url.join(&self.login_path)
    }

    /// Returns the full URL the provider should redirect back to after a
    /// silent check.
    #[must_use]
    pub fn silent_check_return_url(&self) -> String {
        self.store_url.join(&self.silent_check_return_path)
    }

    /// Returns the provider's logout endpoint URL, without query parameters.
    #[must_use]
    pub fn logout_url(&self) -> String {
        self.provider_url.join("/logout")
    }

    /// Returns the provider's authorize endpoint URL, without query parameters.
    #[must_use]
    pub fn authorize_url(&self) -> String {
        self.provider_url.join("/oauth/authorize")
    }
}

// Verify AuthConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthConfig>();
};

/// Builder for constructing [`AuthConfig`] instances.
///
/// Required fields are `provider_url` and `store_url`. All other fields have
/// defaults matching the storefront's cookie and routing conventions.
///
/// # Defaults
///
/// - `account_path`: `/account`
/// - `login_path`: `/login`
/// - `silent_check_return_path`: `/account/login`
/// - `access_token_cookie`: `customer_access_token`
/// - `expiry_cookie`: `customer_token_expires_at`
/// - `outcome_param`: `auth_outcome`
/// - `interaction_required_sentinel`: `login_required`
/// - `client_id`: `None`
#[derive(Debug, Default)]
pub struct AuthConfigBuilder {
    provider_url: Option<HostUrl>,
    store_url: Option<HostUrl>,
    client_id: Option<String>,
    account_path: Option<String>,
    login_path: Option<String>,
    silent_check_return_path: Option<String>,
    access_token_cookie: Option<CookieName>,
    expiry_cookie: Option<CookieName>,
    outcome_param: Option<String>,
    interaction_required_sentinel: Option<String>,
}

impl AuthConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identity provider origin (required).
    #[must_use]
    pub fn provider_url(mut self, url: HostUrl) -> Self {
        self.provider_url = Some(url);
        self
    }

    /// Sets the storefront origin (required).
    #[must_use]
    pub fn store_url(mut self, url: HostUrl) -> Self {
        self.store_url = Some(url);
        self
    }

    /// Sets the OAuth client id used on the silent-check authorize redirect.
    #[must_use]
    pub fn client_id(mut self, id: impl Into<String>) -> Self {
        self.client_id = Some(id.into());
        self
    }

    /// Sets the path of the authenticated landing destination.
    #[must_use]
    pub fn account_path(mut self, path: impl Into<String>) -> Self {
        self.account_path = Some(path.into());
        self
    }

    /// Sets the path of the explicit login screen.
    #[must_use]
    pub fn login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = Some(path.into());
        self
    }

    /// Sets the path the provider redirects back to after a silent check.
    #[must_use]
    pub fn silent_check_return_path(mut self, path: impl Into<String>) -> Self {
        self.silent_check_return_path = Some(path.into());
        self
    }

    /// Sets the name of the access-token cookie.
    #[must_use]
    pub fn access_token_cookie(mut self, name: CookieName) -> Self {
        self.access_token_cookie = Some(name);
        self
    }

    /// Sets the name of the expiry cookie.
    #[must_use]
    pub fn expiry_cookie(mut self, name: CookieName) -> Self {
        self.expiry_cookie = Some(name);
        self
    }

    /// Sets the name of the return-trip outcome query parameter.
    #[must_use]
    pub fn outcome_param(mut self, param: impl Into<String>) -> Self {
        self.outcome_param = Some(param.into());
        self
    }

    /// Sets the sentinel outcome value meaning "user interaction required".
    #[must_use]
    pub fn interaction_required_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.interaction_required_sentinel = Some(sentinel.into());
        self
    }

    /// Builds the [`AuthConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `provider_url` or
    /// `store_url` are not set, and [`ConfigError::InvalidPath`] if any
    /// configured path does not start with `/`.
    pub fn build(self) -> Result<AuthConfig, ConfigError> {
        let provider_url = self.provider_url.ok_or(ConfigError::MissingRequiredField {
            field: "provider_url",
        })?;
        let store_url = self
            .store_url
            .ok_or(ConfigError::MissingRequiredField { field: "store_url" })?;

        let account_path = validate_path(self.account_path.unwrap_or_else(|| "/account".into()))?;
        let login_path = validate_path(self.login_path.unwrap_or_else(|| "/login".into()))?;
        let silent_check_return_path = validate_path(
            self.silent_check_return_path
                .unwrap_or_else(|| "/account/login".into()),
        )?;

        let access_token_cookie = match self.access_token_cookie {
            Some(name) => name,
            None => CookieName::new(DEFAULT_ACCESS_TOKEN_COOKIE)?,
        };
        let expiry_cookie = match self.expiry_cookie {
            Some(name) => name,
            None => CookieName::new(DEFAULT_EXPIRY_COOKIE)?,
        };

        Ok(AuthConfig {
            provider_url,
            store_url,
            client_id: self.client_id,
            account_path,
            login_path,
            silent_check_return_path,
            access_token_cookie,
            expiry_cookie,
            outcome_param: self
                .outcome_param
                .unwrap_or_else(|| DEFAULT_OUTCOME_PARAM.into()),
            interaction_required_sentinel: self
                .interaction_required_sentinel
                .unwrap_or_else(|| DEFAULT_INTERACTION_REQUIRED.into()),
        })
    }
}

fn validate_path(path: String) -> Result<String, ConfigError> {
    if path.starts_with('/') {
        Ok(path)
    } else {
        Err(ConfigError::InvalidPath { path })
    }
}
