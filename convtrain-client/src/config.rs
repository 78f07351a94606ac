//! Service and polling configuration.
//!
//! Every value has a named default so a run works without a config file;
//! `validate()` is still required before use.

use convtrain_core::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default service endpoint.
pub const DEFAULT_BASE_URL: &str = "https://gateway.watsonplatform.net/assistant/api";

/// Default API version date sent with every request.
pub const DEFAULT_API_VERSION: &str = "2018-07-10";

pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 10_000;
pub const DEFAULT_POLL_INCREMENT_MS: u64 = 10_000;
pub const DEFAULT_MAX_WAIT_MS: u64 = 600_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ServiceConfig {
    pub base_url: String,
    pub api_version: String,
    pub request_timeout_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl ServiceConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "service.base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                field: "service.base_url",
                reason: "must start with http:// or https://".to_string(),
            });
        }
        if self.api_version.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "service.api_version",
                reason: "must not be empty".to_string(),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "service.request_timeout_ms",
                reason: "must be > 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Fixed-interval polling parameters.
///
/// The poller sleeps `interval_ms` between queries and adds `increment_ms`
/// to its elapsed-time counter after each one. The two are independent, so
/// `ceil(max_wait_ms / increment_ms)` status queries are issued before
/// giving up, whatever the actual sleep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct PollConfig {
    pub interval_ms: u64,
    pub increment_ms: u64,
    pub max_wait_ms: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_POLL_INTERVAL_MS,
            increment_ms: DEFAULT_POLL_INCREMENT_MS,
            max_wait_ms: DEFAULT_MAX_WAIT_MS,
        }
    }
}

impl PollConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn increment(&self) -> Duration {
        Duration::from_millis(self.increment_ms)
    }

    pub fn max_wait(&self) -> Duration {
        Duration::from_millis(self.max_wait_ms)
    }

    /// Number of status queries issued before a timeout.
    pub fn max_polls(&self) -> u64 {
        if self.increment_ms == 0 {
            return 0;
        }
        self.max_wait_ms.div_ceil(self.increment_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "polling.interval_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.increment_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "polling.increment_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.max_wait_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "polling.max_wait_ms",
                reason: "must be > 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Service credentials. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
