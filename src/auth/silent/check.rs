//! The silent-check round trip against the identity provider.
//!
//! A silent check asks the provider to re-establish the session without any
//! visible UI. It is an authorize request with `prompt=none`: the provider
//! either recognizes its own session and redirects back with a fresh
//! outcome, or answers with the interaction-required sentinel.
//!
//! Two entry points:
//!
//! - [`build_silent_check_redirect`]: constructs the authorize redirect for
//!   the caller to issue (the silent-recovery endpoint behavior)
//! - [`run_silent_check`]: performs the round trip over HTTP and classifies
//!   the outcome from the final URL

use crate::auth::error::AuthFlowError;
use crate::auth::redirect::RedirectInstruction;
use crate::auth::silent::outcome::OutcomeCode;
use crate::config::AuthConfig;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of the generated state nonce on the authorize redirect.
const STATE_NONCE_LENGTH: usize = 15;

/// The classified result of one silent-check round trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SilentCheckOutcome {
    /// The provider recognized a session and redirected; `location` is the
    /// provider-controlled address the browser should land on.
    Recovered {
        /// The final address reached by following the redirect.
        location: String,
    },
    /// The provider could not recover the session silently; explicit login
    /// is required.
    InteractionRequired,
}

impl SilentCheckOutcome {
    /// Classifies a silent-check response from the request and final URLs.
    ///
    /// The check recovered iff the response was a followed redirect (the
    /// final URL differs from the request URL) AND the final URL does not
    /// carry the interaction-required sentinel in the outcome parameter.
    ///
    /// The two URLs are compared in parsed form, so scheme and host case
    /// and default ports do not affect the comparison. A non-redirect
    /// response must classify as interaction required even when the client
    /// has normalized the URL it echoes back.
    #[must_use]
    pub fn from_final_url(config: &AuthConfig, request_url: &str, final_url: &str) -> Self {
        if same_url(request_url, final_url) {
            return Self::InteractionRequired;
        }

        let interaction_required = OutcomeCode::from_url(config, final_url)
            .is_some_and(|code| code.is_interaction_required(config));

        if interaction_required {
            Self::InteractionRequired
        } else {
            Self::Recovered {
                location: final_url.to_string(),
            }
        }
    }
}

// The final URL comes back from the HTTP client, which lowercases the
// scheme and host and elides default ports; both sides are parsed before
// comparing.
fn same_url(left: &str, right: &str) -> bool {
    match (reqwest::Url::parse(left), reqwest::Url::parse(right)) {
        (Ok(parsed_left), Ok(parsed_right)) => parsed_left == parsed_right,
        _ => left == right,
    }
}

/// Result of constructing a silent-check redirect.
///
/// Contains the redirect to issue and the state nonce it carries. The nonce
/// can be persisted and compared on the return trip by callers that verify
/// state; this crate does not require it.
#[derive(Clone, Debug)]
pub struct SilentCheckRedirect {
    /// The redirect pointing at the provider's authorize endpoint.
    pub redirect: RedirectInstruction,
    /// The state nonce embedded in the redirect.
    pub state: String,
}

/// Constructs the provider authorize redirect for a silent check.
///
/// The redirect carries `prompt=none` so the provider never renders login
/// UI: it either completes transparently or bounces back with the
/// interaction-required sentinel.
///
/// # Errors
///
/// Returns [`AuthFlowError::MissingClientId`] if no client id is configured.
///
/// # Example
///
/// ```rust
/// use storefront_auth::{build_silent_check_redirect, AuthConfig, HostUrl};
///
/// let config = AuthConfig::builder()
///     .provider_url(HostUrl::new("https://id.example.com").unwrap())
///     .store_url(HostUrl::new("https://shop.example.com").unwrap())
///     .client_id("storefront-client")
///     .build()
///     .unwrap();
///
/// let result = build_silent_check_redirect(&config).unwrap();
/// assert!(result.redirect.location.contains("prompt=none"));
/// assert!(result.redirect.location.contains("client_id=storefront-client"));
/// ```
pub fn build_silent_check_redirect(
    config: &AuthConfig,
) -> Result<SilentCheckRedirect, AuthFlowError> {
    let client_id = config.client_id().ok_or(AuthFlowError::MissingClientId)?;

    let state: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(STATE_NONCE_LENGTH)
        .map(char::from)
        .collect();

    let params = [
        ("client_id", client_id.to_string()),
        ("redirect_uri", config.silent_check_return_url()),
        ("response_type", "code".to_string()),
        ("prompt", "none".to_string()),
        ("state", state.clone()),
    ];

    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let location = format!("{}?{}", config.authorize_url(), query_string);

    Ok(SilentCheckRedirect {
        redirect: RedirectInstruction::temporary(location),
        state,
    })
}

/// Performs one silent-check round trip.
///
/// Issues the authorize request with `prompt=none`, follows redirects, and
/// classifies the outcome from the final URL. One attempt per call; there is
/// no retry policy, and repeated failures simply re-trigger the flow on the
/// next page load.
///
/// # Errors
///
/// - [`AuthFlowError::MissingClientId`] if no client id is configured
/// - [`AuthFlowError::SilentCheckFailed`] on a network failure; callers
///   should fold this into "recovery impossible" (fail closed), never into
///   an authenticated state
pub async fn run_silent_check(config: &AuthConfig) -> Result<SilentCheckOutcome, AuthFlowError> {
    let request_url = build_silent_check_redirect(config)?.redirect.location;

    tracing::debug!(url = %request_url, "Issuing silent check");

    // Default client follows up to 10 redirects, which is the behavior the
    // classification below depends on
    let client = reqwest::Client::new();
    let response = client.get(&request_url).send().await.map_err(|e| {
        AuthFlowError::SilentCheckFailed {
            message: format!("Network error: {e}"),
        }
    })?;

    let final_url = response.url().to_string();
    let outcome = SilentCheckOutcome::from_final_url(config, &request_url, &final_url);

    tracing::debug!(?outcome, "Silent check completed");

    Ok(outcome)
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SilentCheckOutcome>();
    assert_send_sync::<SilentCheckRedirect>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HostUrl;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_config() -> AuthConfig {
        AuthConfig::builder()
            .provider_url(HostUrl::new("https://id.example.com").unwrap())
            .store_url(HostUrl::new("https://shop.example.com").unwrap())
            .client_id("storefront-client")
            .build()
            .unwrap()
    }

    fn config_for_provider(provider: &str) -> AuthConfig {
        AuthConfig::builder()
            .provider_url(HostUrl::new(provider).unwrap())
            .store_url(HostUrl::new("https://shop.example.com").unwrap())
            .client_id("storefront-client")
            .build()
            .unwrap()
    }

    #[test]
    fn test_redirect_targets_authorize_endpoint() {
        let result = build_silent_check_redirect(&create_config()).unwrap();

        assert!(result
            .redirect
            .location
            .starts_with("https://id.example.com/oauth/authorize?"));
        assert_eq!(result.redirect.status, 302);
    }

    #[test]
    fn test_redirect_includes_all_required_params() {
        let result = build_silent_check_redirect(&create_config()).unwrap();

        assert!(result.redirect.location.contains("client_id=storefront-client"));
        assert!(result.redirect.location.contains("prompt=none"));
        assert!(result.redirect.location.contains("response_type=code"));
        assert!(result.redirect.location.contains("state="));

        let expected_return = urlencoding::encode("https://shop.example.com/account/login");
        assert!(result
            .redirect
            .location
            .contains(&format!("redirect_uri={expected_return}")));
    }

    #[test]
    fn test_redirect_state_is_alphanumeric_nonce() {
        let result = build_silent_check_redirect(&create_config()).unwrap();

        assert_eq!(result.state.len(), 15);
        assert!(result.state.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(result
            .redirect
            .location
            .contains(&format!("state={}", result.state)));
    }

    #[test]
    fn test_redirect_states_are_unique() {
        let config = create_config();
        let first = build_silent_check_redirect(&config).unwrap();
        let second = build_silent_check_redirect(&config).unwrap();

        assert_ne!(first.state, second.state);
    }

    #[test]
    fn test_redirect_fails_without_client_id() {
        let config = AuthConfig::builder()
            .provider_url(HostUrl::new("https://id.example.com").unwrap())
            .store_url(HostUrl::new("https://shop.example.com").unwrap())
            .build()
            .unwrap();

        let result = build_silent_check_redirect(&config);

        assert!(matches!(result, Err(AuthFlowError::MissingClientId)));
    }

    #[test]
    fn test_from_final_url_same_url_is_interaction_required() {
        let config = create_config();
        let url = "https://id.example.com/oauth/authorize?prompt=none";

        assert_eq!(
            SilentCheckOutcome::from_final_url(&config, url, url),
            SilentCheckOutcome::InteractionRequired
        );
    }

    #[test]
    fn test_from_final_url_redirect_with_sentinel_is_interaction_required() {
        let config = create_config();

        let outcome = SilentCheckOutcome::from_final_url(
            &config,
            "https://id.example.com/oauth/authorize?prompt=none",
            "https://shop.example.com/account/login?auth_outcome=login_required",
        );

        assert_eq!(outcome, SilentCheckOutcome::InteractionRequired);
    }

    #[test]
    fn test_from_final_url_ignores_client_side_url_normalization() {
        // Uppercase scheme and an explicit default port both normalize away
        // in the echoed URL; that is still the same address, not a redirect
        let config = create_config();

        let outcome = SilentCheckOutcome::from_final_url(
            &config,
            "HTTP://id.example.com:80/oauth/authorize?prompt=none",
            "http://id.example.com/oauth/authorize?prompt=none",
        );

        assert_eq!(outcome, SilentCheckOutcome::InteractionRequired);
    }

    #[test]
    fn test_from_final_url_followed_redirect_is_recovered() {
        let config = create_config();

        let outcome = SilentCheckOutcome::from_final_url(
            &config,
            "https://id.example.com/oauth/authorize?prompt=none",
            "https://shop.example.com/account/login?auth_outcome=ok-7f3a",
        );

        assert_eq!(
            outcome,
            SilentCheckOutcome::Recovered {
                location: "https://shop.example.com/account/login?auth_outcome=ok-7f3a"
                    .to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_run_silent_check_follows_redirect_to_recovered() {
        let server = MockServer::start().await;
        let landing = format!("{}/account/login?auth_outcome=ok-7f3a", server.uri());

        Mock::given(method("GET"))
            .and(path("/oauth/authorize"))
            .and(query_param("prompt", "none"))
            .respond_with(
                ResponseTemplate::new(302).insert_header("Location", landing.as_str()),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/account/login"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let config = config_for_provider(&server.uri());
        let outcome = run_silent_check(&config).await.unwrap();

        match outcome {
            SilentCheckOutcome::Recovered { location } => {
                assert!(location.contains("/account/login"));
                assert!(location.contains("auth_outcome=ok-7f3a"));
            }
            SilentCheckOutcome::InteractionRequired => panic!("Expected Recovered outcome"),
        }
    }

    #[tokio::test]
    async fn test_run_silent_check_sentinel_redirect_is_interaction_required() {
        let server = MockServer::start().await;
        let landing = format!(
            "{}/account/login?auth_outcome=login_required",
            server.uri()
        );

        Mock::given(method("GET"))
            .and(path("/oauth/authorize"))
            .respond_with(
                ResponseTemplate::new(302).insert_header("Location", landing.as_str()),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/account/login"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let config = config_for_provider(&server.uri());
        let outcome = run_silent_check(&config).await.unwrap();

        assert_eq!(outcome, SilentCheckOutcome::InteractionRequired);
    }

    #[tokio::test]
    async fn test_run_silent_check_non_redirect_is_interaction_required() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/oauth/authorize"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let config = config_for_provider(&server.uri());
        let outcome = run_silent_check(&config).await.unwrap();

        assert_eq!(outcome, SilentCheckOutcome::InteractionRequired);
    }

    #[tokio::test]
    async fn test_run_silent_check_non_redirect_with_normalizing_provider_url() {
        // An uppercase configured scheme normalizes in the echoed URL; a
        // bare 200 from the authorize endpoint must still read as
        // interaction required, never as a recovered redirect back to the
        // authorize endpoint itself
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/oauth/authorize"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let provider = server.uri().replacen("http://", "HTTP://", 1);
        let config = config_for_provider(&provider);
        let outcome = run_silent_check(&config).await.unwrap();

        assert_eq!(outcome, SilentCheckOutcome::InteractionRequired);
    }

    #[tokio::test]
    async fn test_run_silent_check_surfaces_network_failure_as_error() {
        // Nothing listens on this address
        let config = config_for_provider("http://127.0.0.1:1");

        let result = run_silent_check(&config).await;

        match result {
            Err(AuthFlowError::SilentCheckFailed { message }) => {
                assert!(!message.is_empty());
            }
            other => panic!("Expected SilentCheckFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_outcome_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SilentCheckOutcome>();
    }
}
