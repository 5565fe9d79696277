use thiserror::Error;

/// The main error type for the fmp-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Configuration error (bad environment values, duplicate group names)
  #[error("Configuration error: {0}")]
  Config(String),

  /// Network-level failure reaching the API
  #[error("Transport error: {0}")]
  Transport(String),

  /// Any response status other than 200. The display text is the exact
  /// failure message the upstream wrapper reported for these.
  #[error("HTTPError: {0}")]
  Http(u16),

  /// Response body was not valid JSON
  #[error("Parse error: {0}")]
  Parse(#[from] serde_json::Error),

  /// Malformed base or resolved URL
  #[error("Invalid URL: {0}")]
  Url(#[from] url::ParseError),
}

/// Result type alias for fmp-* crates
pub type Result<T> = std::result::Result<T, Error>;
