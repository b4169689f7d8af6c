//! Client configuration
//!
//! Read from the process environment (optionally seeded from a `.env` file).

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use chrono_tz::Tz;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const ENV_API_URL: &str = "ADOTA_API_URL";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "ADOTA_REQUEST_TIMEOUT_SECS";
pub const ENV_FETCH_RETRIES: &str = "ADOTA_FETCH_RETRIES";
pub const ENV_TIMEZONE: &str = "ADOTA_TIMEZONE";
pub const ENV_USER_AGENT: &str = "ADOTA_USER_AGENT";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
    /// Upper bound for one listing fetch, retries included.
    /// Each HTTP attempt gets an equal share, see [`ClientConfig::attempt_timeout`].
    pub request_timeout: Duration,
    pub fetch_retries: u32,
    /// Zone of the `dd/MM/yyyy HH:mm` wall-clock times sent by the backend
    pub timezone: Tz,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api".to_string(),
            request_timeout: Duration::from_secs(15),
            fetch_retries: 2,
            timezone: chrono_tz::America::Sao_Paulo,
            user_agent: "adota-client/0.1".to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_base_url = match value(ENV_API_URL) {
            Some(url) => {
                Validator::validate_base_url(&url)?;
                url.trim().trim_end_matches('/').to_string()
            }
            None => defaults.api_base_url,
        };

        let request_timeout = match value(ENV_REQUEST_TIMEOUT_SECS) {
            Some(raw) => {
                let secs: u64 = parse_var(ENV_REQUEST_TIMEOUT_SECS, &raw)?;
                if secs == 0 {
                    return Err(AppError::InvalidInput(format!(
                        "{} must be greater than zero",
                        ENV_REQUEST_TIMEOUT_SECS
                    )));
                }
                Duration::from_secs(secs)
            }
            None => defaults.request_timeout,
        };

        let fetch_retries = match value(ENV_FETCH_RETRIES) {
            Some(raw) => parse_var(ENV_FETCH_RETRIES, &raw)?,
            None => defaults.fetch_retries,
        };

        let timezone = match value(ENV_TIMEZONE) {
            Some(raw) => Tz::from_str(raw.trim()).map_err(|e| {
                AppError::InvalidInput(format!("{}: unknown time zone '{}' ({})", ENV_TIMEZONE, raw, e))
            })?,
            None => defaults.timezone,
        };

        let user_agent = value(ENV_USER_AGENT).unwrap_or(defaults.user_agent);

        Ok(Self {
            api_base_url,
            request_timeout,
            fetch_retries,
            timezone,
            user_agent,
        })
    }

    /// Timeout of a single HTTP attempt, so a hung attempt still leaves
    /// room for the retries inside `request_timeout`
    pub fn attempt_timeout(&self) -> Duration {
        self.request_timeout / self.fetch_retries.saturating_add(1)
    }
}

fn parse_var<T: FromStr>(key: &str, raw: &str) -> AppResult<T>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| AppError::InvalidInput(format!("{}: invalid value '{}' ({})", key, raw, e)))
}
