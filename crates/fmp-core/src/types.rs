//! Shared request types: endpoint paths and the closed switch enumerations

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::num::NonZeroU32;

/// Query parameters for a single request. A fresh map is built per call;
/// nothing is shared or reused between calls.
pub type QueryParams = HashMap<String, String>;

/// The supported FMP v3 endpoints. Each variant carries the fixed relative
/// path used to build the request URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
  // Company valuation
  Profile,
  IncomeStatement,
  BalanceSheetStatement,
  CashFlowStatement,
  FinancialRatios,
  EnterpriseValue,
  KeyMetrics,
  FinancialGrowth,
  CompanyRating,
  DiscountedCashFlow,
  HistoricalDiscountedCashFlow,

  // Stock time series
  RealTimePrice,
  HistoricalPriceFull,
  SymbolsList,

  // Stock market
  MajorsIndexes,
  Actives,
  Gainers,
  Losers,
  MarketOpen,
  SectorsPerformance,

  // Cryptocurrencies
  Cryptocurrencies,

  // Forex
  Forex,
}

impl Endpoint {
  /// The relative path under the API base URL, without a leading slash.
  pub fn path(&self) -> &'static str {
    match self {
      Endpoint::Profile => "company/profile",
      Endpoint::IncomeStatement => "financials/income-statement",
      Endpoint::BalanceSheetStatement => "financials/balance-sheet-statement",
      Endpoint::CashFlowStatement => "financials/cash-flow-statement",
      Endpoint::FinancialRatios => "financial-ratios",
      Endpoint::EnterpriseValue => "enterprise-value",
      Endpoint::KeyMetrics => "company-key-metrics",
      Endpoint::FinancialGrowth => "financial-growth",
      Endpoint::CompanyRating => "company/rating",
      Endpoint::DiscountedCashFlow => "company/discounted-cash-flow",
      Endpoint::HistoricalDiscountedCashFlow => "company/historical-discounted-cash-flow",
      Endpoint::RealTimePrice => "stock/real-time-price",
      Endpoint::HistoricalPriceFull => "historical-price-full",
      Endpoint::SymbolsList => "company/stock/list",
      Endpoint::MajorsIndexes => "majors-indexes",
      Endpoint::Actives => "stock/actives",
      Endpoint::Gainers => "stock/gainers",
      Endpoint::Losers => "stock/losers",
      Endpoint::MarketOpen => "is-the-market-open",
      Endpoint::SectorsPerformance => "sectors-performance",
      Endpoint::Cryptocurrencies => "cryptocurrencies",
      Endpoint::Forex => "forex",
    }
  }
}

impl std::fmt::Display for Endpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.path())
  }
}

/// Reporting period for financial statements.
///
/// The server treats anything other than `quarter` as the annual default,
/// so the annual variant emits no parameter at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
  /// Server-side default (annual reporting)
  #[default]
  Annual,
  /// Quarterly reporting, sent as `period=quarter`
  Quarter,
}

impl Period {
  /// The query-parameter value, if this period requires one.
  pub fn as_param(&self) -> Option<&'static str> {
    match self {
      Period::Annual => None,
      Period::Quarter => Some("quarter"),
    }
  }
}

/// Series shape for historical price queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SerieType {
  /// Full OHLCV series (server default, no parameter)
  #[default]
  Full,
  /// Closing-price line only, sent as `serietype=line`
  Line,
}

impl SerieType {
  /// The query-parameter value, if this serie type requires one.
  pub fn as_param(&self) -> Option<&'static str> {
    match self {
      SerieType::Full => None,
      SerieType::Line => Some("line"),
    }
  }
}

/// Response encoding requested from the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
  /// JSON body (the default everywhere)
  #[default]
  Json,
  /// CSV body, where the endpoint documents it
  Csv,
}

impl DataType {
  /// The `datatype` query-parameter value.
  pub fn as_param(&self) -> &'static str {
    match self {
      DataType::Json => "json",
      DataType::Csv => "csv",
    }
  }
}

/// Optional switches shared by the historical price endpoint.
///
/// Date ranges are both-or-neither by construction and the lookback window
/// is positive by construction, so no per-call validation is needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoricalPriceQuery {
  /// Series shape (`serietype=line` when [`SerieType::Line`])
  pub serie_type: SerieType,
  /// Inclusive date range, applied as `from`/`to` in ISO-8601
  pub date_range: Option<(NaiveDate, NaiveDate)>,
  /// Number of most recent data points, applied as `timeseries=<n>`
  pub timeseries: Option<NonZeroU32>,
}

impl HistoricalPriceQuery {
  /// Render the switches into query parameters per the documented rule table.
  pub fn apply(&self, params: &mut QueryParams) {
    if let Some(serietype) = self.serie_type.as_param() {
      params.insert("serietype".to_string(), serietype.to_string());
    }
    if let Some((from, to)) = self.date_range {
      params.insert("from".to_string(), from.format("%Y-%m-%d").to_string());
      params.insert("to".to_string(), to.format("%Y-%m-%d").to_string());
    }
    if let Some(n) = self.timeseries {
      params.insert("timeseries".to_string(), n.to_string());
    }
  }
}
