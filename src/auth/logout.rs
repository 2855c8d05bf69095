//! The logout flow.
//!
//! Logout is a one-shot flow: build a redirect to the provider's logout
//! endpoint carrying the token to invalidate and the post-logout return
//! address. The provider terminates the session and redirects back; cookie
//! clearing happens as a side effect of that round trip, never as a local
//! delete in this crate.

use crate::auth::redirect::RedirectInstruction;
use crate::config::AuthConfig;

/// Builds the provider logout redirect.
///
/// The redirect carries an `id_token_hint` query parameter naming the token
/// to invalidate and a `post_logout_redirect_uri` pointing at the account
/// area, where the provider sends the browser once the session is ended.
///
/// The token is furnished explicitly by the caller rather than read from
/// cookies, so logout only ever acts on session state the caller intends to
/// end.
///
/// # Missing Token
///
/// A missing token is not an error: the redirect is still built, just
/// without the hint, and the provider is trusted to handle it. Logout must
/// never fail closed; a user must always be able to attempt to leave a
/// session.
///
/// # Example
///
/// ```rust
/// use storefront_auth::{build_logout_redirect, AuthConfig, HostUrl};
///
/// let config = AuthConfig::builder()
///     .provider_url(HostUrl::new("https://id.example.com").unwrap())
///     .store_url(HostUrl::new("https://shop.example.com").unwrap())
///     .build()
///     .unwrap();
///
/// let redirect = build_logout_redirect(&config, Some("abc123"));
/// assert_eq!(redirect.status, 302);
/// assert!(redirect.location.contains("id_token_hint=abc123"));
/// assert!(redirect
///     .location
///     .contains("post_logout_redirect_uri=https%3A%2F%2Fshop.example.com%2Faccount"));
/// ```
#[must_use]
pub fn build_logout_redirect(config: &AuthConfig, id_token: Option<&str>) -> RedirectInstruction {
    let mut params: Vec<(&str, String)> = Vec::with_capacity(2);

    match id_token.filter(|t| !t.is_empty()) {
        Some(token) => params.push(("id_token_hint", token.to_string())),
        None => {
            tracing::warn!("Building logout redirect without an id token hint");
        }
    }

    params.push(("post_logout_redirect_uri", config.account_url()));

    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    RedirectInstruction::temporary(format!("{}?{}", config.logout_url(), query_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HostUrl;

    fn create_config() -> AuthConfig {
        AuthConfig::builder()
            .provider_url(HostUrl::new("https://id.example.com").unwrap())
            .store_url(HostUrl::new("https://shop.example.com").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_logout_redirect_targets_provider_logout_endpoint() {
        let redirect = build_logout_redirect(&create_config(), Some("abc123"));

        assert!(redirect
            .location
            .starts_with("https://id.example.com/logout?"));
        assert_eq!(redirect.status, 302);
    }

    #[test]
    fn test_logout_redirect_carries_id_token_hint() {
        let redirect = build_logout_redirect(&create_config(), Some("abc123"));

        assert!(redirect.location.contains("id_token_hint=abc123"));
    }

    #[test]
    fn test_logout_redirect_carries_post_logout_return_address() {
        let redirect = build_logout_redirect(&create_config(), Some("abc123"));

        let expected = urlencoding::encode("https://shop.example.com/account");
        assert!(redirect
            .location
            .contains(&format!("post_logout_redirect_uri={expected}")));
    }

    #[test]
    fn test_logout_without_token_still_builds_redirect() {
        let redirect = build_logout_redirect(&create_config(), None);

        assert!(redirect
            .location
            .starts_with("https://id.example.com/logout?"));
        assert!(!redirect.location.contains("id_token_hint"));
        assert!(redirect.location.contains("post_logout_redirect_uri="));
    }

    #[test]
    fn test_logout_with_empty_token_omits_hint() {
        let redirect = build_logout_redirect(&create_config(), Some(""));

        assert!(!redirect.location.contains("id_token_hint"));
    }

    #[test]
    fn test_logout_token_is_url_encoded() {
        let redirect = build_logout_redirect(&create_config(), Some("a b&c"));

        assert!(redirect.location.contains("id_token_hint=a%20b%26c"));
    }
}
