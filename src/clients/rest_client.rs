//! REST client for the per-user preference resource.
//!
//! `GET {base}/users/{name}` returns the user including its `preferences` map;
//! `PUT {base}/users/{name}/preferences` replaces that map.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::{debug, warn};
use url::Url;

use crate::core::config::{AppConfig, Credentials};
use crate::core::models::{PreferenceMap, PreferencesUpdate, UserResponse};
use crate::errors::PreferenceError;

/// The server rejects writes without this header.
const REQUESTED_BY_HEADER: &str = "X-Requested-By";
const REQUESTED_BY_VALUE: &str = "prefsync";

/// Longest response body kept in an `ApiError`.
const MAX_ERROR_BODY: usize = 512;

/// Storage seam for per-user preference maps.
#[async_trait]
pub trait PreferenceTransport: Send + Sync {
    /// Fetch the stored map for `user_name`. `None` when the user has none.
    async fn fetch_preferences(
        &self,
        user_name: &str,
    ) -> Result<Option<PreferenceMap>, PreferenceError>;

    /// Replace the stored map for `user_name`.
    async fn store_preferences(
        &self,
        user_name: &str,
        preferences: &PreferenceMap,
    ) -> Result<(), PreferenceError>;
}

/// `{base}/users/{name}`, with the name encoded as one path segment.
#[must_use]
pub fn user_url(base: &Url, user_name: &str) -> String {
    format!(
        "{}/users/{}",
        base.as_str().trim_end_matches('/'),
        urlencoding::encode(user_name)
    )
}

#[must_use]
pub fn preferences_url(base: &Url, user_name: &str) -> String {
    format!("{}/preferences", user_url(base, user_name))
}

fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

/// reqwest-backed [`PreferenceTransport`].
pub struct RestClient {
    http: Client,
    base: Url,
    credentials: Credentials,
}

impl RestClient {
    /// # Errors
    ///
    /// Returns `ConfigError` if the HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, PreferenceError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            REQUESTED_BY_HEADER,
            HeaderValue::from_static(REQUESTED_BY_VALUE),
        );

        let http = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| PreferenceError::ConfigError(format!("HTTP client: {e}")))?;

        Ok(Self {
            http,
            base: config.api_url.clone(),
            credentials: config.credentials.clone(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.credentials {
            Credentials::None => request,
            Credentials::Basic { user, password } => request.basic_auth(user, Some(password)),
            Credentials::Token(token) => request.basic_auth(token, Some("token")),
        }
    }

    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, PreferenceError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        warn!("Preference request failed with HTTP {}", status);
        Err(PreferenceError::ApiError {
            status: status.as_u16(),
            body: truncate_body(&body),
        })
    }
}

#[async_trait]
impl PreferenceTransport for RestClient {
    async fn fetch_preferences(
        &self,
        user_name: &str,
    ) -> Result<Option<PreferenceMap>, PreferenceError> {
        let url = user_url(&self.base, user_name);
        debug!(%url, "GET user preferences");

        let resp = self.authorize(self.http.get(&url)).send().await?;
        let resp = Self::check_status(resp).await?;
        let user: UserResponse = resp.json().await?;
        Ok(user.preferences)
    }

    async fn store_preferences(
        &self,
        user_name: &str,
        preferences: &PreferenceMap,
    ) -> Result<(), PreferenceError> {
        let url = preferences_url(&self.base, user_name);
        debug!(%url, count = preferences.len(), "PUT user preferences");

        let body = PreferencesUpdate { preferences };
        let resp = self
            .authorize(self.http.put(&url))
            .json(&body)
            .send()
            .await?;
        Self::check_status(resp).await?;
        Ok(())
    }
}
