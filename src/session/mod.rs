//! Session state derived from the client-visible cookie pair.
//!
//! This module provides types for reading the session cookie pair and
//! deriving an authentication status from it.
//!
//! # Overview
//!
//! - [`SessionCookies`]: A read-only snapshot of the access-token and expiry
//!   cookies for one request
//! - [`AuthStatus`]: The derived status, `Authenticated` or `Unauthenticated`
//! - [`check_auth`]: The stateless status check
//!
//! # Cookie Contract
//!
//! The session cookie pair is written by the external login/callback handler
//! and cleared by the provider during logout. This crate only ever reads it.
//! A pair with either half missing, or with an expiry that does not parse as
//! an epoch-millisecond integer, is treated identically to "no session".
//!
//! # Example
//!
//! ```rust
//! use storefront_auth::{check_auth, AuthStatus, SessionCookies};
//!
//! let cookies = SessionCookies::new(None, None);
//! assert_eq!(check_auth(&cookies), AuthStatus::Unauthenticated);
//! ```

mod cookies;
mod status;

pub use cookies::SessionCookies;
pub use status::{check_auth, check_auth_at, AuthStatus};
