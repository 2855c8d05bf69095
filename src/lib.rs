//! # Storefront Auth
//!
//! The session and silent re-authentication layer for an e-commerce
//! storefront that delegates identity to an external OAuth-capable commerce
//! platform.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`AuthConfig`] and [`AuthConfigBuilder`]
//! - A read-only contract over the session cookie pair via [`SessionCookies`]
//! - The stateless authentication status check via [`check_auth`]
//! - The silent re-authentication state machine via [`SilentAuthFlow`]
//! - The one-shot logout flow via [`build_logout_redirect`]
//! - Framework-agnostic endpoint behaviors via [`endpoints`]
//!
//! It consumes tokens it is handed and decides when to recover them; it does
//! not verify tokens cryptographically, persist session state server-side,
//! or implement the identity provider's handshake.
//!
//! ## Quick Start
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
//! ```
//!
//! ## Checking Session Status
//!
//! The status check is purely local: a session is live iff both cookies are
//! present and the expiry is strictly in the future. No call to the provider
//! is made, and the unauthenticated branch carries no detail about why.
//!
//! ```rust
//! use storefront_auth::{check_auth, AuthStatus, SessionCookies};
//!
//! let cookies = SessionCookies::new(
//!     Some("opaque-token".to_string()),
//!     Some("4102444800000".to_string()),
//! );
//! assert_eq!(check_auth(&cookies), AuthStatus::Authenticated);
//! ```
//!
//! ## Silent Re-Authentication
//!
//! One [`SilentAuthFlow`] lives per page load. Feed it the return-trip
//! outcome code (which takes precedence) and the provider-session signal;
//! when it asks for a silent check, run the round trip and feed the result
//! back:
//!
//! ```rust,ignore
//! use storefront_auth::{run_silent_check, FlowAction, ProviderSession, SilentAuthFlow};
//!
//! let mut flow = SilentAuthFlow::new(config.clone());
//!
//! if let Some(action) = flow.observe_location(&current_url) {
//!     return navigate(action); // account or login
//! }
//!
//! if let Some(FlowAction::IssueSilentCheck) =
//!     flow.observe_provider_session(ProviderSession::Inactive)
//! {
//!     let result = run_silent_check(&config).await;
//!     match flow.complete_silent_check(result) {
//!         Some(FlowAction::FollowRedirect(url)) => follow(url),
//!         Some(FlowAction::ShowLoginPrompt) => render_login(),
//!         _ => {}
//!     }
//! }
//! ```
//!
//! ## Logout
//!
//! ```rust
//! use storefront_auth::{build_logout_redirect, AuthConfig, HostUrl};
//!
//! let config = AuthConfig::builder()
//!     .provider_url(HostUrl::new("https://id.example.com").unwrap())
//!     .store_url(HostUrl::new("https://shop.example.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let redirect = build_logout_redirect(&config, Some("abc123"));
//! assert_eq!(redirect.status, 302);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Fail-closed recovery**: Provider faults route to explicit login, never
//!   into a false authenticated state
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Read-only cookies**: This crate never writes the session cookie pair

pub mod auth;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod session;

// Re-export public types at crate root for convenience
pub use config::{AuthConfig, AuthConfigBuilder, CookieName, HostUrl};
pub use error::ConfigError;
pub use session::{check_auth, check_auth_at, AuthStatus, SessionCookies};

// Re-export flow types for convenience
pub use auth::silent::{
    build_silent_check_redirect, run_silent_check, FlowAction, FlowState, NavigationDecision,
    NavigationTarget, OutcomeCode, ProviderSession, SilentAuthFlow, SilentCheckOutcome,
    SilentCheckRedirect,
};
pub use auth::{build_logout_redirect, AuthFlowError, RedirectInstruction};

// Re-export endpoint behaviors
pub use endpoints::{
    handle_logout, handle_status_check, LogoutRequest, StatusCheckBody, StatusCheckResponse,
};
