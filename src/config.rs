//! Validator client configuration (defaults overridable from the environment).

use std::time::Duration;

use tracing::warn;

/// Validator address used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
/// Request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Overrides the validator base URL.
pub const API_URL_ENV: &str = "PIPELINE_API_URL";
/// Overrides the request timeout, in whole seconds.
pub const API_TIMEOUT_ENV: &str = "PIPELINE_API_TIMEOUT_SECS";

/// Settings for [crate::submit::HttpPipelineClient].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
  pub base_url: String,
  pub timeout: Duration,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_API_URL.to_string(),
      timeout: DEFAULT_TIMEOUT,
    }
  }
}

impl ClientConfig {
  /// Defaults, overridden by `PIPELINE_API_URL` / `PIPELINE_API_TIMEOUT_SECS` when set.
  pub fn from_env() -> Self {
    Self::default().with_overrides(|key| std::env::var(key).ok())
  }

  /// Applies overrides found through `lookup` (keyed by the `*_ENV` names).
  ///
  /// Empty values are ignored; an unparseable timeout is logged and ignored.
  pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
    if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
      self.base_url = url.trim().to_string();
    }
    if let Some(raw) = lookup(API_TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
      match raw.trim().parse::<u64>() {
        Ok(secs) => self.timeout = Duration::from_secs(secs),
        Err(e) => warn!(value = %raw, error = %e, "ignoring invalid {API_TIMEOUT_ENV}"),
      }
    }
    self
  }

  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }
}
