pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::{DataType, Endpoint, HistoricalPriceQuery, Period, QueryParams, SerieType};

/// Base URL for the FMP v3 API. The trailing slash matters: relative-URL
/// resolution against a slash-less base would drop the `v3` segment.
pub const FMP_BASE_URL: &str = "https://financialmodelingprep.com/api/v3/";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
