//! Provider-facing authentication flows.
//!
//! This module provides the flows that talk to (or redirect toward) the
//! identity provider:
//!
//! - [`silent`]: the silent re-authentication state machine and its
//!   provider round trip
//! - [`build_logout_redirect`]: the one-shot logout flow
//! - [`RedirectInstruction`]: the redirect value every flow resolves to
//! - [`AuthFlowError`]: provider round-trip failures
//!
//! # Propagation Policy
//!
//! All failures in this layer resolve to a navigation decision (account vs.
//! login), never to an exception surfaced to the user. There is no generic
//! error-page path: every branch has a defined redirect target.

pub mod error;
mod logout;
mod redirect;
pub mod silent;

pub use error::AuthFlowError;
pub use logout::build_logout_redirect;
pub use redirect::RedirectInstruction;
