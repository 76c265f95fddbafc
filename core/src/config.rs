//! Client configuration.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Deserializer};

/// Where the Cachet API lives and how to authenticate against it.
///
/// Immutable once built. Deserializable so it can sit inside a caller's own
/// configuration file:
///
/// ```
/// let config: cachet_core::ClientConfig = serde_json::from_str(
///     r#"{"base_url": "https://status.example.com/api/v1", "token": "T", "timeout_secs": 10}"#,
/// )
/// .unwrap();
/// assert_eq!(config.base_url(), "https://status.example.com/api/v1");
/// ```
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    base_url: String,
    token: String,
    #[serde(default, rename = "timeout_secs", deserialize_with = "timeout_from_secs")]
    timeout: Option<Duration>,
}

/// `timeout_secs` may be fractional, e.g. `0.5`.
fn timeout_from_secs<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer)?
        .map(|secs| Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom))
        .transpose()
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            timeout: None,
        }
    }

    /// Whole-request timeout handed to the bundled transport unchanged.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Base URL with trailing slashes removed. Paths are appended to this
    /// as-is.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
