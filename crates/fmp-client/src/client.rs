//! The top-level client and its endpoint-group registry

use crate::endpoints::{
  EndpointGroup, company_valuation::CompanyValuation, crypto::Cryptocurrencies, forex::Forex,
  stock_market::StockMarket, stock_time_series::StockTimeSeries,
};
use crate::transport::Transport;
use fmp_core::{Config, Error, Result};
use std::collections::HashSet;
use std::sync::Arc;

/// The declared endpoint-group registry. Construction validates it, so two
/// groups claiming the same name fail loudly instead of one silently
/// shadowing the other. Order is irrelevant; no group depends on another.
const GROUP_NAMES: &[&str] = &[
  CompanyValuation::NAME,
  StockTimeSeries::NAME,
  StockMarket::NAME,
  Cryptocurrencies::NAME,
  Forex::NAME,
];

/// Main FMP API client
///
/// Owns the single [`Transport`] instance and hands out the endpoint groups
/// constructed over it. Each group is built exactly once, at construction.
///
/// # Examples
///
/// ```rust,no_run
/// use fmp_client::FmpClient;
/// use fmp_core::{Config, DataType, Period};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = FmpClient::new(Config::default())?;
///
///     let profile = client.company_valuation().profile(&["AAPL"]).await?;
///     println!("{profile}");
///
///     let statements = client
///         .company_valuation()
///         .income_statement(&["AAPL"], Period::Quarter, DataType::Json)
///         .await?;
///     println!("{statements}");
///
///     Ok(())
/// }
/// ```
pub struct FmpClient {
  transport: Arc<Transport>,
  company_valuation: CompanyValuation,
  stock_time_series: StockTimeSeries,
  stock_market: StockMarket,
  cryptocurrencies: Cryptocurrencies,
  forex: Forex,
}

impl FmpClient {
  /// Create a new FMP API client
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created, the base URL is
  /// malformed, or the group registry declares a duplicate name.
  pub fn new(config: Config) -> Result<Self> {
    check_unique_names(GROUP_NAMES)?;

    let transport = Arc::new(Transport::new(&config)?);

    Ok(Self {
      company_valuation: CompanyValuation::new(transport.clone()),
      stock_time_series: StockTimeSeries::new(transport.clone()),
      stock_market: StockMarket::new(transport.clone()),
      cryptocurrencies: Cryptocurrencies::new(transport.clone()),
      forex: Forex::new(transport.clone()),
      transport,
    })
  }

  /// Company valuation endpoints: profiles, statements, ratios, ratings
  pub fn company_valuation(&self) -> &CompanyValuation {
    &self.company_valuation
  }

  /// Stock time series endpoints: real-time and historical prices
  pub fn stock_time_series(&self) -> &StockTimeSeries {
    &self.stock_time_series
  }

  /// Stock market endpoints: indexes, movers, trading hours
  pub fn stock_market(&self) -> &StockMarket {
    &self.stock_market
  }

  /// Cryptocurrency endpoints
  pub fn cryptocurrencies(&self) -> &Cryptocurrencies {
    &self.cryptocurrencies
  }

  /// Foreign exchange endpoints
  pub fn forex(&self) -> &Forex {
    &self.forex
  }

  /// Names of every endpoint group attached to this client
  pub fn group_names() -> &'static [&'static str] {
    GROUP_NAMES
  }

  /// The base URL requests are resolved against
  pub fn base_url(&self) -> &str {
    self.transport.base_url()
  }
}

impl std::fmt::Debug for FmpClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("FmpClient")
      .field("transport", &self.transport)
      .field("groups", &GROUP_NAMES)
      .finish()
  }
}

fn check_unique_names(names: &[&str]) -> Result<()> {
  let mut seen = HashSet::new();
  for name in names {
    if !seen.insert(*name) {
      return Err(Error::Config(format!("duplicate endpoint group name: {name}")));
    }
  }
  Ok(())
}
