//! Configuration management for the FMP client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the FMP client
///
/// The v3 API is keyless, so configuration is only the base URL and the
/// request timeout.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Base URL for the FMP API, always normalized to end with a slash so
  /// relative-URL joins keep the `api/v3` segment intact
  pub base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let base_url = env::var("FMP_BASE_URL").unwrap_or_else(|_| crate::FMP_BASE_URL.to_string());

    let timeout_secs = env::var("FMP_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid FMP_TIMEOUT_SECS".to_string()))?;

    Ok(Config { base_url: normalize_base_url(base_url), timeout_secs })
  }

  /// Create a config pointing at a non-default base URL (mock servers, proxies)
  pub fn with_base_url(base_url: impl Into<String>) -> Self {
    Config {
      base_url: normalize_base_url(base_url.into()),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
    }
  }
}

impl Default for Config {
  fn default() -> Self {
    Config { base_url: crate::FMP_BASE_URL.to_string(), timeout_secs: crate::DEFAULT_TIMEOUT_SECS }
  }
}

/// A base URL without a trailing slash would make `Url::join` replace its
/// last path segment instead of appending below it.
fn normalize_base_url(mut base_url: String) -> String {
  if !base_url.ends_with('/') {
    base_url.push('/');
  }
  base_url
}
