//! Best-effort analytics sink
//!
//! After a case is valued, the input and results can be POSTed as JSON to a
//! collecting endpoint. One attempt per calculation, no retry. Failures are
//! logged and dropped: they never reach the caller and never change a result.
//!
//! Configured from the environment:
//!   ANALYTICS_ENABLED       "true" to enable
//!   ANALYTICS_URL           destination of the POST
//!   ANALYTICS_TIMEOUT_SECS  request timeout (default 10)

use log::{debug, warn};
use reqwest::Client;
use std::env;
use std::time::Duration;
use thiserror::Error;

use crate::valuation::CalculationRecord;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where and whether to send calculation records
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsConfig {
    pub enabled: bool,
    pub url: Option<String>,
    pub timeout: Duration,
}

impl AnalyticsConfig {
    /// Config that never sends
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Read ANALYTICS_* variables from the process environment
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from any variable lookup
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let enabled = lookup("ANALYTICS_ENABLED")
            .map(|v| v.trim() == "true")
            .unwrap_or(false);

        let url = lookup("ANALYTICS_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let timeout_secs = match lookup("ANALYTICS_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
                warn!("ANALYTICS_TIMEOUT_SECS '{}' is not a number; using {}s", raw, DEFAULT_TIMEOUT_SECS);
                DEFAULT_TIMEOUT_SECS
            }),
            None => DEFAULT_TIMEOUT_SECS,
        };

        if enabled && url.is_none() {
            warn!("ANALYTICS_ENABLED is set but ANALYTICS_URL is empty; analytics disabled");
        }

        Self {
            enabled,
            url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Enabled and has somewhere to send
    pub fn is_active(&self) -> bool {
        self.enabled && self.url.is_some()
    }
}

/// Why a single POST did not land
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("endpoint answered with status {0}")]
    Status(u16),
}

/// Sends calculation records to the configured endpoint
#[derive(Debug, Clone)]
pub struct AnalyticsSink {
    url: Option<String>,
    client: Option<Client>,
}

impl AnalyticsSink {
    pub fn new(config: &AnalyticsConfig) -> Self {
        if !config.is_active() {
            return Self::disabled();
        }

        match Client::builder().timeout(config.timeout).build() {
            Ok(client) => Self {
                url: config.url.clone(),
                client: Some(client),
            },
            Err(e) => {
                warn!("cannot build analytics HTTP client, analytics disabled: {}", e);
                Self::disabled()
            }
        }
    }

    /// Sink that drops every record
    pub fn disabled() -> Self {
        Self { url: None, client: None }
    }

    pub fn is_active(&self) -> bool {
        self.url.is_some() && self.client.is_some()
    }

    async fn post(&self, client: &Client, url: &str, record: &CalculationRecord) -> Result<u16, AnalyticsError> {
        // Body is not read back: the endpoint may answer with an opaque response
        let response = client.post(url).json(record).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AnalyticsError::Status(status.as_u16()));
        }
        Ok(status.as_u16())
    }

    /// POST one record; errors are logged, never returned
    pub async fn send(&self, record: &CalculationRecord) {
        let (Some(client), Some(url)) = (&self.client, &self.url) else {
            debug!("analytics disabled; record not sent");
            return;
        };

        match self.post(client, url, record).await {
            Ok(status) => debug!("analytics record accepted ({})", status),
            Err(e) => warn!("failed to log calculation data: {}", e),
        }
    }
}
