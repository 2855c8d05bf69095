//! The provider-session signal consumed by the silent flow.

/// The identity provider's own view of whether a session exists.
///
/// This is the tri-state oracle the silent flow polls once per page load. It
/// is injected as an explicit value rather than read from ambient state, so
/// the flow is testable without a live provider. Its resolution may be
/// asynchronous on the provider's side; while it is still resolving the
/// value is [`Loading`](Self::Loading), and the flow must not act on it.
///
/// The provider's view and the local cookie pair are not guaranteed to be
/// consistent at every instant; the provider may know about a session
/// before local cookies are populated. Reconciling the two is the silent
/// flow's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderSession {
    /// The signal is still being computed; do nothing yet.
    Loading,
    /// The provider reports an active session.
    Active,
    /// The provider reports no session.
    Inactive,
}

// Verify ProviderSession is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ProviderSession>();
};
