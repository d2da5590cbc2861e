//! Application configuration.
//!
//! Built from environment variables at startup, with builder-style overrides
//! for tests and embedding.

use std::time::Duration;

/// Default API base URL (local development backend).
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default notification poll interval in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;

/// Runtime configuration for the shell.
#[derive(Debug, Clone)]
pub struct PlazaConfig {
    /// Base URL of the storefront API, without trailing slash.
    pub api_base_url: String,
    /// Fixed interval between notification-count polls.
    pub poll_interval_secs: u64,
    /// Dev mode: skip the persisted-session requirement and talk to the
    /// local backend unauthenticated (set via PLAZA_DEV=1).
    pub dev_mode: bool,
}

impl Default for PlazaConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            dev_mode: false,
        }
    }
}

impl PlazaConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the notification poll interval.
    pub fn with_poll_interval_secs(mut self, secs: u64) -> Self {
        self.poll_interval_secs = secs;
        self
    }

    /// Enable dev mode.
    pub fn with_dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }

    /// Read configuration from the environment.
    ///
    /// - `PLAZA_API_URL`: API base URL.
    /// - `PLAZA_POLL_INTERVAL`: poll interval in seconds; non-numeric values
    ///   fall back to the default.
    /// - `PLAZA_DEV`: any value enables dev mode.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("PLAZA_API_URL") {
            if !url.is_empty() {
                config.api_base_url = url;
            }
        }

        if let Ok(interval) = std::env::var("PLAZA_POLL_INTERVAL") {
            match interval.parse() {
                Ok(secs) => config.poll_interval_secs = secs,
                Err(_) => {
                    tracing::warn!(value = %interval, "PLAZA_POLL_INTERVAL not numeric, using default");
                }
            }
        }

        config.dev_mode = std::env::var("PLAZA_DEV").is_ok();
        config
    }

    /// Poll interval as a [`Duration`].
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}
