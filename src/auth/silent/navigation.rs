//! Single-writer navigation decision.
//!
//! The silent flow has two uncoordinated transition sources (the
//! provider-session signal and the return-trip outcome code) that can both
//! try to navigate during the same page load. Navigation is modeled as a
//! single-writer slot: the first resolved target wins and later writers are
//! no-ops. The only destinations are the account area and the login screen,
//! both idempotent, so a race resolves harmlessly.

/// Where a resolved flow sends the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationTarget {
    /// The authenticated landing destination.
    Account,
    /// The explicit login screen.
    Login,
    /// A provider-controlled address reached by following the silent-check
    /// redirect.
    Followed(String),
}

/// A write-once navigation slot.
///
/// # Example
///
/// ```rust
/// use storefront_auth::{NavigationDecision, NavigationTarget};
///
/// let mut decision = NavigationDecision::new();
/// assert!(decision.resolve(NavigationTarget::Account));
///
/// // A later, contradictory writer is a no-op
/// assert!(!decision.resolve(NavigationTarget::Login));
/// assert_eq!(decision.target(), Some(&NavigationTarget::Account));
/// ```
#[derive(Clone, Debug, Default)]
pub struct NavigationDecision {
    target: Option<NavigationTarget>,
}

impl NavigationDecision {
    /// Creates an unresolved decision.
    #[must_use]
    pub const fn new() -> Self {
        Self { target: None }
    }

    /// Attempts to resolve the decision to `target`.
    ///
    /// Returns `true` if this call was the first writer; `false` if the
    /// decision was already resolved (the existing target stands).
    pub fn resolve(&mut self, target: NavigationTarget) -> bool {
        if self.target.is_some() {
            return false;
        }
        self.target = Some(target);
        true
    }

    /// Returns the resolved target, if any.
    #[must_use]
    pub const fn target(&self) -> Option<&NavigationTarget> {
        self.target.as_ref()
    }

    /// Returns `true` once a target has been resolved.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.target.is_some()
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NavigationTarget>();
    assert_send_sync::<NavigationDecision>();
};
