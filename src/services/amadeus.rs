use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::debug;

use super::gateway::{Endpoint, GatewayError, TravelGateway};
use crate::core::params::ParamMap;

const DEFAULT_BASE_URL: &str = "https://test.api.amadeus.com";
const TOKEN_PATH: &str = "/v1/security/oauth2/token";

/// Refresh the token this long before its reported expiry
const TOKEN_EXPIRY_SLACK: Duration = Duration::from_secs(30);

/// Credentials and endpoint location for the Amadeus Self-Service APIs
#[derive(Clone, Debug)]
pub struct AmadeusConfig {
    pub api_key: String,
    pub api_secret: String,
    pub base_url: String,
}

impl AmadeusConfig {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build from `AMADEUS_API_KEY` / `AMADEUS_API_SECRET` environment
    /// variables, failing fast when either is missing.
    pub fn from_env() -> Result<Self, GatewayError> {
        let api_key = std::env::var("AMADEUS_API_KEY").map_err(|_| {
            GatewayError::Auth("AMADEUS_API_KEY environment variable must be set".to_string())
        })?;
        let api_secret = std::env::var("AMADEUS_API_SECRET").map_err(|_| {
            GatewayError::Auth("AMADEUS_API_SECRET environment variable must be set".to_string())
        })?;

        let mut config = Self::new(api_key, api_secret);
        if let Ok(base_url) = std::env::var("AMADEUS_BASE_URL") {
            config.base_url = base_url;
        }
        Ok(config)
    }
}

#[derive(Debug)]
struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

impl CachedToken {
    fn is_fresh(&self) -> bool {
        Instant::now() + TOKEN_EXPIRY_SLACK < self.expires_at
    }
}

/// Authenticated Amadeus client
///
/// Constructed once at startup and shared across invocations. The OAuth2
/// token cache is the only interior mutability; all request state is
/// otherwise per-call.
#[derive(Debug)]
pub struct AmadeusClient {
    config: AmadeusConfig,
    http: reqwest::Client,
    token: Mutex<Option<CachedToken>>,
}

impl AmadeusClient {
    pub fn new(config: AmadeusConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            token: Mutex::new(None),
        }
    }

    /// Return a valid bearer token, fetching a fresh one when the cached
    /// token is missing or about to expire.
    async fn bearer_token(&self) -> Result<String, GatewayError> {
        let mut guard = self.token.lock().await;
        if let Some(cached) = guard.as_ref() {
            if cached.is_fresh() {
                return Ok(cached.access_token.clone());
            }
        }

        let token_url = format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            TOKEN_PATH
        );
        debug!(url = %token_url, "requesting access token");

        let response = self
            .http
            .post(&token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.config.api_key.as_str()),
                ("client_secret", self.config.api_secret.as_str()),
            ])
            .send()
            .await
            .map_err(|err| GatewayError::Auth(format!("token request failed: {err}")))?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|err| GatewayError::Auth(format!("token response unreadable: {err}")))?;

        if !status.is_success() {
            let detail = body
                .get("error_description")
                .and_then(Value::as_str)
                .unwrap_or("credentials rejected");
            return Err(GatewayError::Auth(format!("HTTP {status}: {detail}")));
        }

        let access_token = body
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or_else(|| GatewayError::Auth("token response missing access_token".to_string()))?
            .to_string();
        let expires_in = body
            .get("expires_in")
            .and_then(Value::as_u64)
            .unwrap_or(1799);

        *guard = Some(CachedToken {
            access_token: access_token.clone(),
            expires_at: Instant::now() + Duration::from_secs(expires_in),
        });

        Ok(access_token)
    }
}

#[async_trait]
impl TravelGateway for AmadeusClient {
    async fn get(&self, endpoint: Endpoint, params: &ParamMap) -> Result<Value, GatewayError> {
        let token = self.bearer_token().await?;
        let url = format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.path()
        );
        debug!(url = %url, params = %params.as_value(), "upstream request");

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .query(&params.to_query_pairs())
            .send()
            .await
            .map_err(|err| GatewayError::Transport(format!("request failed: {err}")))?;

        let status = response.status();
        let body_text = response
            .text()
            .await
            .map_err(|err| GatewayError::Transport(format!("failed to read response: {err}")))?;

        let body: Value = serde_json::from_str(&body_text).map_err(|err| {
            GatewayError::Transport(format!("upstream response is not JSON: {err}"))
        })?;

        if status.is_success() {
            return Ok(body);
        }

        Err(classify_failure(status.as_u16(), &body))
    }
}

/// Map a non-success upstream response to a typed gateway failure.
///
/// Amadeus reports "no such resource" either as HTTP 404 or as HTTP 400 with
/// error code 1797 (title NOT FOUND) in the first entry of `errors`.
fn classify_failure(status: u16, body: &Value) -> GatewayError {
    let first_error = body.get("errors").and_then(|errors| errors.get(0));

    let code = first_error
        .and_then(|err| err.get("code"))
        .and_then(Value::as_u64);
    let title = first_error
        .and_then(|err| err.get("title"))
        .and_then(Value::as_str)
        .unwrap_or("unknown error");
    let detail = first_error
        .and_then(|err| err.get("detail"))
        .and_then(Value::as_str)
        .unwrap_or(title);

    let not_found = status == 404 || code == Some(1797) || title.eq_ignore_ascii_case("not found");
    if not_found {
        GatewayError::NotFound(detail.to_string())
    } else {
        GatewayError::Api {
            status,
            detail: detail.to_string(),
        }
    }
}
