//! The logout endpoint behavior.

use crate::auth::{build_logout_redirect, RedirectInstruction};
use crate::config::AuthConfig;
use serde::{Deserialize, Serialize};

/// The JSON body of a logout request.
///
/// The token is explicitly furnished by the caller; the endpoint never reads
/// it from cookies. A missing token still produces a redirect; logout must
/// never fail closed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutRequest {
    /// The identity token to invalidate, if the caller has one.
    #[serde(rename = "idToken", default)]
    pub id_token: Option<String>,
}

/// Computes the logout endpoint response: a 302 to the provider's logout
/// address.
///
/// # Example
///
/// ```rust
/// use storefront_auth::{handle_logout, AuthConfig, HostUrl, LogoutRequest};
///
/// let config = AuthConfig::builder()
///     .provider_url(HostUrl::new("https://id.example.com").unwrap())
///     .store_url(HostUrl::new("https://shop.example.com").unwrap())
///     .build()
///     .unwrap();
///
/// let request = LogoutRequest { id_token: Some("abc123".to_string()) };
/// let redirect = handle_logout(&config, &request);
/// assert_eq!(redirect.status, 302);
/// assert!(redirect.location.contains("id_token_hint=abc123"));
/// ```
#[must_use]
pub fn handle_logout(config: &AuthConfig, request: &LogoutRequest) -> RedirectInstruction {
    build_logout_redirect(config, request.id_token.as_deref())
}

// Verify LogoutRequest is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LogoutRequest>();
};

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
    fn test_logout_request_deserializes_from_camel_case() {
        let request: LogoutRequest = serde_json::from_str(r#"{"idToken":"abc123"}"#).unwrap();
        assert_eq!(request.id_token.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_logout_request_tolerates_missing_token() {
        let request: LogoutRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.id_token, None);

        let request: LogoutRequest = serde_json::from_str(r#"{"idToken":null}"#).unwrap();
        assert_eq!(request.id_token, None);
    }

    #[test]
    fn test_handle_logout_builds_provider_redirect() {
        let request = LogoutRequest {
            id_token: Some("abc123".to_string()),
        };

        let redirect = handle_logout(&create_config(), &request);

        assert_eq!(redirect.status, 302);
        assert!(redirect.location.contains("id_token_hint=abc123"));
        let expected = urlencoding::encode("https://shop.example.com/account");
        assert!(redirect
            .location
            .contains(&format!("post_logout_redirect_uri={expected}")));
    }

    #[test]
    fn test_handle_logout_without_token_still_redirects() {
        let redirect = handle_logout(&create_config(), &LogoutRequest::default());

        assert_eq!(redirect.status, 302);
        assert!(redirect
            .location
            .starts_with("https://id.example.com/logout?"));
    }
}
