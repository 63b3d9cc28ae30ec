//! Client configuration options

use std::path::Path;
use std::time::Duration;

use secrecy::SecretString;
use serde::{Deserialize, Deserializer};

use crate::errors::{Result, SdkError};
use crate::utils::version_info;

pub const ENV_API_URL: &str = "FIT2CLOUD_API_URL";
pub const ENV_CONSUMER_KEY: &str = "FIT2CLOUD_CONSUMER_KEY";
pub const ENV_SECRET: &str = "FIT2CLOUD_SECRET";
pub const ENV_TIMEOUT_SECS: &str = "FIT2CLOUD_TIMEOUT_SECS";

/// Options used to build a [`crate::Fit2CloudClient`]
///
/// Can be loaded from a JSON settings file:
///
/// ```json
/// {
///   "rest_api_url": "https://console.fit2cloud.com/rest/",
///   "consumer_key": "...",
///   "secret": "...",
///   "timeout_secs": 30
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct ClientOptions {
    /// API endpoint, shown in the console under "Account info"
    pub rest_api_url: String,

    pub consumer_key: String,

    #[serde(deserialize_with = "deserialize_secret")]
    pub secret: SecretString,

    /// Request timeout, read from `timeout_secs`. Unset or zero means the
    /// transport default.
    #[serde(
        default,
        rename = "timeout_secs",
        deserialize_with = "deserialize_timeout"
    )]
    pub timeout: Option<Duration>,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    format!("fit2cloud-sdk-rust/{}", version_info().version)
}

fn deserialize_secret<'de, D>(deserializer: D) -> std::result::Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

fn deserialize_timeout<'de, D>(deserializer: D) -> std::result::Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<u64>::deserialize(deserializer).map(|secs| secs.and_then(non_zero_secs))
}

fn non_zero_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

impl ClientOptions {
    pub fn new(
        consumer_key: impl Into<String>,
        secret: impl Into<String>,
        rest_api_url: impl Into<String>,
    ) -> Self {
        Self {
            rest_api_url: rest_api_url.into(),
            consumer_key: consumer_key.into(),
            secret: SecretString::from(secret.into()),
            timeout: None,
            user_agent: default_user_agent(),
        }
    }

    /// Create options from environment variables.
    ///
    /// - `FIT2CLOUD_API_URL`: API endpoint (required)
    /// - `FIT2CLOUD_CONSUMER_KEY`: consumer key (required)
    /// - `FIT2CLOUD_SECRET`: secret key (required)
    /// - `FIT2CLOUD_TIMEOUT_SECS`: request timeout in seconds (optional, `0` disables it)
    pub fn from_env() -> Result<Self> {
        let rest_api_url = require_env(ENV_API_URL)?;
        let consumer_key = require_env(ENV_CONSUMER_KEY)?;
        let secret = require_env(ENV_SECRET)?;

        let timeout = match std::env::var(ENV_TIMEOUT_SECS) {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map(non_zero_secs)
                .map_err(|e| SdkError::Config(format!("invalid {}: {}", ENV_TIMEOUT_SECS, e)))?,
            Err(_) => None,
        };

        Ok(Self {
            timeout,
            ..Self::new(consumer_key, secret, rest_api_url)
        })
    }

    /// Load options from a JSON settings file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| SdkError::Config(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| SdkError::Config(format!("{}: {}", path.display(), e)))
    }

    /// A zero duration clears the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = (!timeout.is_zero()).then_some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Endpoint with trailing slashes removed, checked to be an absolute URL
    pub fn endpoint(&self) -> Result<String> {
        let endpoint = self.rest_api_url.trim().trim_end_matches('/');
        if endpoint.is_empty() {
            return Err(SdkError::Config("rest_api_url is empty".to_string()));
        }
        url::Url::parse(endpoint)
            .map_err(|e| SdkError::Config(format!("invalid rest_api_url {}: {}", endpoint, e)))?;
        Ok(endpoint.to_string())
    }
}

fn require_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(SdkError::Config(format!("{} is not set", name))),
    }
}
