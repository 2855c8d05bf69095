//! The silent re-authentication state machine.
//!
//! One flow instance lives for one page load. It is driven by two
//! independent signal sources, the provider-session signal and the
//! return-trip outcome code, plus the completion of the silent-check round
//! trip it may issue. Each source is safe to act on without waiting for the
//! other: navigation goes through a single-writer decision, so whichever
//! source observes a terminal condition first wins and later writers are
//! no-ops.

use crate::auth::error::AuthFlowError;
use crate::auth::silent::check::SilentCheckOutcome;
use crate::auth::silent::navigation::{NavigationDecision, NavigationTarget};
use crate::auth::silent::outcome::OutcomeCode;
use crate::auth::silent::signal::ProviderSession;
use crate::config::AuthConfig;

/// The states of the silent re-authentication flow.
///
/// `Authenticated` and `RequiresLogin` are terminal. `Unauthenticated` is
/// never a resting state: observing an inactive provider session moves
/// through it directly into `Recovering`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowState {
    /// Waiting for the provider-session signal to resolve.
    Pending,
    /// A session exists; the flow is done.
    Authenticated,
    /// No session was found (transient; immediately superseded by
    /// `Recovering`).
    Unauthenticated,
    /// A silent check has been issued and is in flight.
    Recovering,
    /// The silent check recovered the session; its redirect is being
    /// followed.
    Recovered,
    /// Silent recovery is impossible; explicit login must be shown.
    RequiresLogin,
}

/// What the caller should do after feeding an event into the flow.
///
/// Every branch of the flow resolves to one of these; there is no error
/// surface toward the user, only navigation decisions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowAction {
    /// Navigate to the authenticated landing destination.
    NavigateToAccount,
    /// Navigate to the explicit login screen.
    NavigateToLogin,
    /// Issue the silent-check round trip and feed the result back through
    /// [`SilentAuthFlow::complete_silent_check`].
    IssueSilentCheck,
    /// Follow the provider-controlled redirect to this address.
    FollowRedirect(String),
    /// Render the login prompt in place, without navigating away.
    ShowLoginPrompt,
}

/// Client-side controller for silent re-authentication.
///
/// # Driving the flow
///
/// On each page load, feed the flow whatever signals are available:
///
/// - [`observe_outcome_code`](Self::observe_outcome_code) with the
///   return-trip outcome parameter from the current location (this path
///   takes precedence, as it reflects the most recent, explicit outcome)
/// - [`observe_provider_session`](Self::observe_provider_session) with the
///   provider-session signal once it has resolved
/// - [`complete_silent_check`](Self::complete_silent_check) with the result
///   of the silent-check round trip the flow asked for
///
/// The two observation paths may race; the navigation decision is
/// single-writer, so the race resolves to one harmless navigation.
///
/// # Example
///
/// ```rust
/// use storefront_auth::{
///     AuthConfig, FlowAction, FlowState, HostUrl, ProviderSession, SilentAuthFlow,
/// };
///
/// let config = AuthConfig::builder()
///     .provider_url(HostUrl::new("https://id.example.com").unwrap())
///     .store_url(HostUrl::new("https://shop.example.com").unwrap())
///     .build()
///     .unwrap();
///
/// let mut flow = SilentAuthFlow::new(config);
/// assert_eq!(flow.state(), FlowState::Pending);
///
/// // Provider still computing its signal: do nothing yet
/// assert_eq!(flow.observe_provider_session(ProviderSession::Loading), None);
///
/// // Provider has a live session: go straight to the account area
/// assert_eq!(
///     flow.observe_provider_session(ProviderSession::Active),
///     Some(FlowAction::NavigateToAccount)
/// );
/// assert_eq!(flow.state(), FlowState::Authenticated);
/// ```
#[derive(Debug)]
pub struct SilentAuthFlow {
    config: AuthConfig,
    state: FlowState,
    navigation: NavigationDecision,
}

impl SilentAuthFlow {
    /// Creates a new flow in the `Pending` state.
    #[must_use]
    pub const fn new(config: AuthConfig) -> Self {
        Self {
            config,
            state: FlowState::Pending,
            navigation: NavigationDecision::new(),
        }
    }

    /// Returns the current flow state.
    #[must_use]
    pub const fn state(&self) -> FlowState {
        self.state
    }

    /// Returns the resolved navigation target, if any source has navigated.
    #[must_use]
    pub const fn navigation(&self) -> Option<&NavigationTarget> {
        self.navigation.target()
    }

    /// Feeds the provider-session signal into the flow.
    ///
    /// Acts only from `Pending`: acting on a stale or partial signal is the
    /// primary correctness hazard, so `Loading` is a no-op and any state the
    /// outcome-code path has already advanced past is left alone.
    ///
    /// - `Active` → `Authenticated`, navigate to the account area
    /// - `Inactive` → `Recovering` (through the transient `Unauthenticated`
    ///   classification), issue the silent check
    pub fn observe_provider_session(&mut self, signal: ProviderSession) -> Option<FlowAction> {
        if self.state != FlowState::Pending {
            return None;
        }

        match signal {
            ProviderSession::Loading => None,
            ProviderSession::Active => {
                self.state = FlowState::Authenticated;
                self.navigation
                    .resolve(NavigationTarget::Account)
                    .then_some(FlowAction::NavigateToAccount)
            }
            ProviderSession::Inactive => {
                // Unauthenticated is never a resting state
                self.state = FlowState::Unauthenticated;
                self.state = FlowState::Recovering;
                Some(FlowAction::IssueSilentCheck)
            }
        }
    }

    /// Feeds the return-trip outcome code into the flow.
    ///
    /// This path takes precedence over the provider-session path: it
    /// reflects the most recent, explicit outcome of a provider round trip,
    /// so it transitions unconditionally from any state.
    ///
    /// - sentinel code → `RequiresLogin`, navigate to the login screen
    /// - any other non-empty code → `Authenticated`, navigate to the account
    ///   area
    /// - no code → no transition
    pub fn observe_outcome_code(&mut self, code: Option<&OutcomeCode>) -> Option<FlowAction> {
        let code = code?;

        if code.is_interaction_required(&self.config) {
            self.state = FlowState::RequiresLogin;
            self.navigation
                .resolve(NavigationTarget::Login)
                .then_some(FlowAction::NavigateToLogin)
        } else {
            self.state = FlowState::Authenticated;
            self.navigation
                .resolve(NavigationTarget::Account)
                .then_some(FlowAction::NavigateToAccount)
        }
    }

    /// Feeds the outcome code parsed from the current location URL.
    ///
    /// Convenience wrapper over [`observe_outcome_code`](Self::observe_outcome_code).
    pub fn observe_location(&mut self, url: &str) -> Option<FlowAction> {
        let code = OutcomeCode::from_url(&self.config, url);
        self.observe_outcome_code(code.as_ref())
    }

    /// Feeds the silent-check result back into the flow.
    ///
    /// Only meaningful from `Recovering`; results arriving after the
    /// outcome-code path has already terminated the flow are dropped.
    ///
    /// - `Ok(Recovered)` → `Recovered`, follow the provider's redirect
    /// - `Ok(InteractionRequired)` → `RequiresLogin`, show the login prompt
    ///   in place (the flow does not navigate away; the explicit-login UI
    ///   must stay reachable)
    /// - `Err(_)` → fail closed into `RequiresLogin`; a provider or network
    ///   fault never produces a false authenticated state
    pub fn complete_silent_check(
        &mut self,
        result: Result<SilentCheckOutcome, AuthFlowError>,
    ) -> Option<FlowAction> {
        if self.state != FlowState::Recovering {
            return None;
        }

        match result {
            Ok(SilentCheckOutcome::Recovered { location }) => {
                self.state = FlowState::Recovered;
                self.navigation
                    .resolve(NavigationTarget::Followed(location.clone()))
                    .then_some(FlowAction::FollowRedirect(location))
            }
            Ok(SilentCheckOutcome::InteractionRequired) => {
                self.state = FlowState::RequiresLogin;
                Some(FlowAction::ShowLoginPrompt)
            }
            Err(error) => {
                tracing::warn!(%error, "Silent check failed; requiring explicit login");
                self.state = FlowState::RequiresLogin;
                Some(FlowAction::ShowLoginPrompt)
            }
        }
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FlowState>();
    assert_send_sync::<FlowAction>();
    assert_send_sync::<SilentAuthFlow>();
};
