//! Redirect instructions produced by the auth flows.

/// An HTTP redirect for the caller to issue.
///
/// Every provider-facing flow in this crate resolves to a redirect rather
/// than performing navigation itself; the surrounding framework turns this
/// into an actual response or browser navigation.
///
/// # Example
///
/// ```rust
/// use storefront_auth::RedirectInstruction;
///
/// let redirect = RedirectInstruction::temporary("https://id.example.com/logout");
/// assert_eq!(redirect.status, 302);
/// assert_eq!(redirect.location, "https://id.example.com/logout");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectInstruction {
    /// The HTTP status code (always temporary-redirect semantics).
    pub status: u16,
    /// The address to redirect to.
    pub location: String,
}

impl RedirectInstruction {
    /// Creates a temporary (302) redirect to the given location.
    #[must_use]
    pub fn temporary(location: impl Into<String>) -> Self {
        Self {
            status: 302,
            location: location.into(),
        }
    }
}

// Verify RedirectInstruction is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RedirectInstruction>();
};
