//! HTTP transport layer for FMP API requests

use fmp_core::{Config, Error, QueryParams, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

/// HTTP transport layer for making requests to the FMP API
///
/// Holds no per-call state; one instance is shared by every endpoint group
/// of a client, so concurrent calls need no coordination.
#[derive(Debug)]
pub struct Transport {
  client: Client,
  base_url: Url,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .user_agent(concat!("fmp-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Transport(format!("Failed to create HTTP client: {e}")))?;

    let base_url = Url::parse(&config.base_url)?;

    Ok(Self { client, base_url })
  }

  /// Make a GET request to the FMP API
  ///
  /// `path` is the relative path under the base URL, already carrying the
  /// identifier segment. A `datatype=json` parameter is injected unless the
  /// caller set one. Every failure mode comes back as an `Err` value:
  /// transport errors, any status other than 200 (`HTTPError: <status>`),
  /// and bodies that are not valid JSON. A 200 with a valid JSON body is
  /// returned as-is, with no schema imposed.
  #[instrument(skip(self, params), fields(path = %path))]
  pub async fn get(&self, path: &str, mut params: QueryParams) -> Result<Value> {
    ensure_datatype(&mut params);
    let url = self.resolve(path)?;
    debug!("GET {path}");

    let response = self
      .client
      .get(url)
      .query(&params)
      .send()
      .await
      .map_err(|e| Error::Transport(format!("Request failed: {e}")))?;

    let status = response.status();
    if status != StatusCode::OK {
      warn!("request for {path} returned status {status}");
      return Err(Error::Http(status.as_u16()));
    }

    let text =
      response.text().await.map_err(|e| Error::Transport(format!("Failed to read body: {e}")))?;

    Ok(serde_json::from_str(&text)?)
  }

  /// Resolve a relative path against the base URL
  fn resolve(&self, path: &str) -> Result<Url> {
    Ok(self.base_url.join(path)?)
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    self.base_url.as_str()
  }
}

/// Default the response encoding to JSON; a caller-supplied `datatype`
/// entry is left untouched.
fn ensure_datatype(params: &mut QueryParams) {
  params.entry("datatype".to_string()).or_insert_with(|| "json".to_string());
}
