//! Silent re-authentication.
//!
//! This module implements the no-UI session recovery flow: on detecting
//! "not authenticated", the storefront attempts a silent round trip with the
//! identity provider before giving up and falling back to an explicit login
//! screen.
//!
//! # Overview
//!
//! - [`SilentAuthFlow`]: the per-page-load state machine
//! - [`ProviderSession`]: the injected tri-state provider-session signal
//! - [`OutcomeCode`]: return-trip outcome codes and sentinel detection
//! - [`NavigationDecision`]: the single-writer navigation slot
//! - [`build_silent_check_redirect`] / [`run_silent_check`]: the provider
//!   round trip itself
//!
//! # Flow
//!
//! ```rust,ignore
//! use storefront_auth::{FlowAction, ProviderSession, SilentAuthFlow};
//!
//! let mut flow = SilentAuthFlow::new(config.clone());
//!
//! // The return-trip outcome, if present, wins
//! if let Some(action) = flow.observe_location(&current_url) {
//!     return navigate(action);
//! }
//!
//! // Otherwise wait for the provider-session signal
//! match flow.observe_provider_session(signal) {
//!     Some(FlowAction::IssueSilentCheck) => {
//!         let result = run_silent_check(&config).await;
//!         if let Some(action) = flow.complete_silent_check(result) {
//!             return navigate(action);
//!         }
//!     }
//!     Some(action) => return navigate(action),
//!     None => {}
//! }
//! ```

mod check;
mod flow;
mod navigation;
mod outcome;
mod signal;

pub use check::{build_silent_check_redirect, run_silent_check, SilentCheckOutcome, SilentCheckRedirect};
pub use flow::{FlowAction, FlowState, SilentAuthFlow};
pub use navigation::{NavigationDecision, NavigationTarget};
pub use outcome::OutcomeCode;
pub use signal::ProviderSession;
