//! # fmp-client
//!
//! A Rust client for the keyless FinancialModelingPrep (FMP) v3 API.
//!
//! ## Features
//!
//! - **Endpoint groups**: company valuation, stock time series, stock market
//!   summaries, cryptocurrencies and forex, attached to one client
//! - **Async/Await**: built on tokio and reqwest
//! - **Uniform failures**: transport errors, non-200 statuses and undecodable
//!   bodies all come back as `Err` values, never panics
//! - **Typed switches**: reporting period, series shape, date ranges and
//!   lookback windows are closed enumerations, not raw strings
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fmp_client::FmpClient;
//! use fmp_core::{Config, DataType, Period};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FmpClient::new(Config::from_env()?)?;
//!
//!     let ratings = client.company_valuation().company_rating(&["AAPL", "MSFT"]).await?;
//!     println!("{ratings}");
//!
//!     let actives = client.stock_market().stock_market_actives().await?;
//!     println!("{actives}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! Every method returns `Result<serde_json::Value, fmp_core::Error>`. The
//! body is passed through exactly as the API returned it; interpreting it is
//! the caller's responsibility.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export the main client and common types
pub use client::FmpClient;
pub use fmp_core::{
  Config, DataType, Endpoint, Error, HistoricalPriceQuery, Period, QueryParams, Result, SerieType,
};

// Re-export endpoint groups for direct access if needed
pub use endpoints::{
  EndpointBase, EndpointGroup, company_valuation::CompanyValuation, crypto::Cryptocurrencies,
  forex::Forex, stock_market::StockMarket, stock_time_series::StockTimeSeries,
};
