//! Stock market summary endpoints: indexes, movers and trading hours

use super::EndpointBase;
use crate::endpoints::impl_endpoint_group;
use crate::transport::Transport;
use fmp_core::{Endpoint, QueryParams, Result};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// Stock market endpoint group
pub struct StockMarket {
  transport: Arc<Transport>,
}

impl StockMarket {
  /// Major market indexes, scoped to `indexes` or all of them when empty
  #[instrument(skip(self))]
  pub async fn stock_market_index(&self, indexes: &[&str]) -> Result<Value> {
    self.request(Endpoint::MajorsIndexes, indexes, QueryParams::new()).await
  }

  /// Most active stocks of the session
  #[instrument(skip(self))]
  pub async fn stock_market_actives(&self) -> Result<Value> {
    self.request(Endpoint::Actives, &[], QueryParams::new()).await
  }

  /// Biggest gainers of the session
  #[instrument(skip(self))]
  pub async fn stock_market_gainers(&self) -> Result<Value> {
    self.request(Endpoint::Gainers, &[], QueryParams::new()).await
  }

  /// Biggest losers of the session
  #[instrument(skip(self))]
  pub async fn stock_market_losers(&self) -> Result<Value> {
    self.request(Endpoint::Losers, &[], QueryParams::new()).await
  }

  /// Whether the NYSE is currently open, plus the holiday calendar
  #[instrument(skip(self))]
  pub async fn nyse_trading_hours(&self) -> Result<Value> {
    self.request(Endpoint::MarketOpen, &[], QueryParams::new()).await
  }

  /// Per-sector performance summary
  #[instrument(skip(self))]
  pub async fn sectors_performance(&self) -> Result<Value> {
    self.request(Endpoint::SectorsPerformance, &[], QueryParams::new()).await
  }
}

impl_endpoint_group!(StockMarket, "stock_market");
