//! Company valuation endpoints: profiles, statements, ratios and ratings

use super::EndpointBase;
use crate::endpoints::impl_endpoint_group;
use crate::transport::Transport;
use fmp_core::{DataType, Endpoint, Period, QueryParams, Result};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// Company valuation endpoint group
pub struct CompanyValuation {
  transport: Arc<Transport>,
}

/// `period` is only ever sent for the quarterly variant; annual is the
/// server default and gets no parameter.
fn period_params(period: Period) -> QueryParams {
  let mut params = QueryParams::new();
  if let Some(period) = period.as_param() {
    params.insert("period".to_string(), period.to_string());
  }
  params
}

fn statement_params(period: Period, datatype: DataType) -> QueryParams {
  let mut params = period_params(period);
  params.insert("datatype".to_string(), datatype.as_param().to_string());
  params
}

impl CompanyValuation {
  /// Company profile: price, beta, average volume, market cap, dividend,
  /// 52-week range, sector/industry and descriptive fields.
  ///
  /// This endpoint only serves JSON, so the encoding is pinned rather than
  /// left to the transport default.
  #[instrument(skip(self))]
  pub async fn profile(&self, tickers: &[&str]) -> Result<Value> {
    let mut params = QueryParams::new();
    params.insert("datatype".to_string(), DataType::Json.as_param().to_string());
    self.request(Endpoint::Profile, tickers, params).await
  }

  /// Income statements for the given tickers
  #[instrument(skip(self))]
  pub async fn income_statement(
    &self,
    tickers: &[&str],
    period: Period,
    datatype: DataType,
  ) -> Result<Value> {
    self.request(Endpoint::IncomeStatement, tickers, statement_params(period, datatype)).await
  }

  /// Balance sheet statements for the given tickers
  #[instrument(skip(self))]
  pub async fn balance_sheet_statement(
    &self,
    tickers: &[&str],
    period: Period,
    datatype: DataType,
  ) -> Result<Value> {
    self
      .request(Endpoint::BalanceSheetStatement, tickers, statement_params(period, datatype))
      .await
  }

  /// Cash flow statements for the given tickers
  #[instrument(skip(self))]
  pub async fn cash_flow_statement(
    &self,
    tickers: &[&str],
    period: Period,
    datatype: DataType,
  ) -> Result<Value> {
    self.request(Endpoint::CashFlowStatement, tickers, statement_params(period, datatype)).await
  }

  /// Financial ratios for the given tickers
  #[instrument(skip(self))]
  pub async fn financial_ratios(&self, tickers: &[&str]) -> Result<Value> {
    self.request(Endpoint::FinancialRatios, tickers, QueryParams::new()).await
  }

  /// Enterprise value for the given tickers
  #[instrument(skip(self))]
  pub async fn enterprise_value(&self, tickers: &[&str], period: Period) -> Result<Value> {
    self.request(Endpoint::EnterpriseValue, tickers, period_params(period)).await
  }

  /// Company key metrics for the given tickers
  #[instrument(skip(self))]
  pub async fn key_metrics(&self, tickers: &[&str], period: Period) -> Result<Value> {
    self.request(Endpoint::KeyMetrics, tickers, period_params(period)).await
  }

  /// Financial growth metrics for the given tickers
  #[instrument(skip(self))]
  pub async fn financial_growth(&self, tickers: &[&str], period: Period) -> Result<Value> {
    self.request(Endpoint::FinancialGrowth, tickers, period_params(period)).await
  }

  /// Company ratings, recalculated daily
  #[instrument(skip(self))]
  pub async fn company_rating(&self, tickers: &[&str]) -> Result<Value> {
    self.request(Endpoint::CompanyRating, tickers, QueryParams::new()).await
  }

  /// Real-time discounted cash flow value
  #[instrument(skip(self))]
  pub async fn discounted_cash_flow_value(&self, tickers: &[&str]) -> Result<Value> {
    self.request(Endpoint::DiscountedCashFlow, tickers, QueryParams::new()).await
  }

  /// Historical discounted cash flow values
  #[instrument(skip(self))]
  pub async fn historical_discounted_cash_flow_value(
    &self,
    tickers: &[&str],
    period: Period,
  ) -> Result<Value> {
    self.request(Endpoint::HistoricalDiscountedCashFlow, tickers, period_params(period)).await
  }
}

impl_endpoint_group!(CompanyValuation, "company_valuation");
