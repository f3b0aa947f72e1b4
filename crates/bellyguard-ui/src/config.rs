// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Guard configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the access guard and its liveness watcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// URL of the login page, the target of every authentication redirect.
    pub login_url: String,
    /// URL of the dashboard, the target of forbidden-page redirects.
    pub dashboard_url: String,
    /// How often the liveness watcher re-reads the logged-in flag.
    #[serde(with = "humantime_serde")]
    pub liveness_interval: Duration,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            login_url: "login_admin.html".to_string(),
            dashboard_url: "dashboard.html".to_string(),
            liveness_interval: Duration::from_secs(300),
        }
    }
}

impl GuardConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the login page URL.
    pub fn with_login_url(mut self, url: impl Into<String>) -> Self {
        self.login_url = url.into();
        self
    }

    /// Sets the dashboard URL.
    pub fn with_dashboard_url(mut self, url: impl Into<String>) -> Self {
        self.dashboard_url = url.into();
        self
    }

    /// Sets the liveness re-check interval.
    pub fn with_liveness_interval(mut self, interval: Duration) -> Self {
        self.liveness_interval = interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GuardConfig::default();
        assert_eq!(config.login_url, "login_admin.html");
        assert_eq!(config.dashboard_url, "dashboard.html");
        assert_eq!(config.liveness_interval, Duration::from_secs(300));
    }

    #[test]
    fn test_serde_defaults_and_humantime() {
        let config: GuardConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.liveness_interval, Duration::from_secs(300));

        let config: GuardConfig =
            serde_json::from_str(r#"{"liveness_interval": "1m"}"#).unwrap();
        assert_eq!(config.liveness_interval, Duration::from_secs(60));
    }

    #[test]
    fn test_builder_style() {
        let config = GuardConfig::new()
            .with_login_url("signin.html")
            .with_liveness_interval(Duration::from_secs(30));
        assert_eq!(config.login_url, "signin.html");
        assert_eq!(config.liveness_interval, Duration::from_secs(30));
    }
}
