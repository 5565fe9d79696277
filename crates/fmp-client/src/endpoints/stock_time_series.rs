//! Stock time series endpoints: real-time prices and price history

use super::EndpointBase;
use crate::endpoints::impl_endpoint_group;
use crate::transport::Transport;
use fmp_core::{Endpoint, HistoricalPriceQuery, QueryParams, Result};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// Stock time series endpoint group
pub struct StockTimeSeries {
  transport: Arc<Transport>,
}

impl StockTimeSeries {
  /// Real-time price for the given tickers, or for the whole market when
  /// the list is empty
  #[instrument(skip(self))]
  pub async fn stock_realtime_price(&self, tickers: &[&str]) -> Result<Value> {
    self.request(Endpoint::RealTimePrice, tickers, QueryParams::new()).await
  }

  /// Historical daily prices for the given tickers
  ///
  /// `query` carries the optional switches: series shape, inclusive date
  /// range and lookback window. See [`HistoricalPriceQuery`].
  #[instrument(skip(self))]
  pub async fn stock_historical_price(
    &self,
    tickers: &[&str],
    query: HistoricalPriceQuery,
  ) -> Result<Value> {
    let mut params = QueryParams::new();
    query.apply(&mut params);
    self.request(Endpoint::HistoricalPriceFull, tickers, params).await
  }

  /// All symbols available through the API
  #[instrument(skip(self))]
  pub async fn symbols_list(&self) -> Result<Value> {
    self.request(Endpoint::SymbolsList, &[], QueryParams::new()).await
  }
}

impl_endpoint_group!(StockTimeSeries, "stock_time_series");
