//! JSON REST client for the adoption backend
//!
//! Wraps reqwest with a per-attempt timeout and the configured user agent, bearer auth, and
//! retries of transient failures per [`RetryPolicy`].

use super::retry_policy::RetryPolicy;
use crate::shared::config::ClientConfig;
use crate::shared::domain::value_objects::Session;
use crate::shared::errors::{AppError, AppResult};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tokio::time::sleep;
use tracing::{debug, warn};

pub struct RestClient {
    client: Client,
    base_url: String,
    retry_policy: RetryPolicy,
}

impl RestClient {
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.attempt_timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| AppError::Connectivity(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            retry_policy: RetryPolicy::listing(config.fetch_retries),
        })
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path relative to the API root
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` and decode the JSON body, retrying transient failures
    pub async fn get_json<T>(&self, path: &str, session: Option<&Session>) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let mut attempt = 0;

        loop {
            match self.get_once(&url, session).await {
                Ok(value) => return Ok(value),
                Err(error) if self.retry_policy.should_retry(&error, attempt) => {
                    let delay = self.retry_policy.calculate_delay(attempt);
                    warn!(
                        "GET {} failed (attempt {}/{}): {}. Retrying in {:?}",
                        url,
                        attempt + 1,
                        self.retry_policy.total_attempts(),
                        error,
                        delay
                    );
                    sleep(delay).await;
                    attempt += 1;
                }
                Err(error) => {
                    debug!("GET {} giving up after {} attempt(s): {}", url, attempt + 1, error);
                    return Err(error);
                }
            }
        }
    }

    async fn get_once<T>(&self, url: &str, session: Option<&Session>) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let mut request = self.client.get(url).header(ACCEPT, "application/json");
        if let Some(session) = session.filter(|s| s.has_token()) {
            request = request.header(AUTHORIZATION, session.bearer());
        }

        let response = request.send().await?;
        debug!("GET {} -> {}", url, response.status());
        Self::parse_response(response).await
    }

    async fn parse_response<T>(response: Response) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::from_status(status, error_message(status.as_u16(), &body)));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(AppError::from)
    }
}

/// Best human-readable message for a failed response: the backend's
/// `message`/`error` field, else the raw body, else the status reason
pub(crate) fn error_message(status: u16, body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error"]
                .iter()
                .find_map(|key| value.get(*key).and_then(|v| v.as_str()).map(str::to_string))
        })
        .filter(|message| !message.trim().is_empty());

    if let Some(message) = from_json {
        return message;
    }

    let body = body.trim();
    if !body.is_empty() && !body.starts_with('<') && !body.starts_with('{') {
        return body.to_string();
    }

    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Request failed")
        .to_string()
}
