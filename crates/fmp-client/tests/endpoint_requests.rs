//! End-to-end request shape tests against a mock HTTP server.
//!
//! These pin the URL paths, identifier segments, query parameters and the
//! uniform failure shapes without touching the real API.

use fmp_client::FmpClient;
use fmp_core::{Config, DataType, Error, HistoricalPriceQuery, Period, SerieType};
use serde_json::json;
use std::num::NonZeroU32;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> FmpClient {
  FmpClient::new(Config::with_base_url(server.uri())).expect("client construction")
}

#[tokio::test]
async fn income_statement_quarter_builds_expected_request() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/financials/income-statement/AAPL"))
    .and(query_param("period", "quarter"))
    .and(query_param("datatype", "json"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"financials": []})))
    .expect(1)
    .mount(&server)
    .await;

  let body = client_for(&server)
    .company_valuation()
    .income_statement(&["AAPL"], Period::Quarter, DataType::Json)
    .await
    .unwrap();
  assert_eq!(body, json!({"financials": []}));
}

#[tokio::test]
async fn annual_period_omits_period_parameter() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/enterprise-value/MSFT"))
    .and(query_param("datatype", "json"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server);
  client.company_valuation().enterprise_value(&["MSFT"], Period::Annual).await.unwrap();

  // The captured request must not carry a period parameter at all.
  let requests = server.received_requests().await.unwrap();
  assert_eq!(requests.len(), 1);
  assert!(!requests[0].url.query_pairs().any(|(k, _)| k == "period"));
}

#[tokio::test]
async fn actives_uses_bare_path_and_default_datatype() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/stock/actives"))
    .and(query_param("datatype", "json"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"mostActiveStock": []})))
    .expect(1)
    .mount(&server)
    .await;

  client_for(&server).stock_market().stock_market_actives().await.unwrap();
}

#[tokio::test]
async fn profile_joins_multiple_tickers_with_commas() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/company/profile/AAPL,MSFT"))
    .and(query_param("datatype", "json"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
    .expect(1)
    .mount(&server)
    .await;

  client_for(&server).company_valuation().profile(&["AAPL", "MSFT"]).await.unwrap();
}

#[tokio::test]
async fn caller_datatype_is_not_overridden() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/financials/balance-sheet-statement/IBM"))
    .and(query_param("datatype", "csv"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
    .expect(1)
    .mount(&server)
    .await;

  client_for(&server)
    .company_valuation()
    .balance_sheet_statement(&["IBM"], Period::Annual, DataType::Csv)
    .await
    .unwrap();
}

#[tokio::test]
async fn historical_price_switches_are_translated() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/historical-price-full/AAPL"))
    .and(query_param("serietype", "line"))
    .and(query_param("from", "2019-01-02"))
    .and(query_param("to", "2019-03-04"))
    .and(query_param("timeseries", "5"))
    .and(query_param("datatype", "json"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"historical": []})))
    .expect(1)
    .mount(&server)
    .await;

  let query = HistoricalPriceQuery {
    serie_type: SerieType::Line,
    date_range: Some((
      chrono::NaiveDate::from_ymd_opt(2019, 1, 2).unwrap(),
      chrono::NaiveDate::from_ymd_opt(2019, 3, 4).unwrap(),
    )),
    timeseries: NonZeroU32::new(5),
  };
  client_for(&server).stock_time_series().stock_historical_price(&["AAPL"], query).await.unwrap();
}

#[tokio::test]
async fn identifier_free_endpoints_resolve_without_trailing_slash() {
  let server = MockServer::start().await;
  for endpoint in
    ["/company/stock/list", "/is-the-market-open", "/sectors-performance", "/forex", "/cryptocurrencies"]
  {
    Mock::given(method("GET"))
      .and(path(endpoint))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
      .expect(1)
      .mount(&server)
      .await;
  }

  let client = client_for(&server);
  client.stock_time_series().symbols_list().await.unwrap();
  client.stock_market().nyse_trading_hours().await.unwrap();
  client.stock_market().sectors_performance().await.unwrap();
  client.forex().foreign_exchange_rate(&[]).await.unwrap();
  client.cryptocurrencies().cryptocurrencies(&[]).await.unwrap();
}

#[tokio::test]
async fn non_200_status_is_a_value_not_a_panic() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(404))
    .mount(&server)
    .await;

  let err =
    client_for(&server).stock_market().stock_market_gainers().await.unwrap_err();
  assert!(matches!(err, Error::Http(404)));
  assert_eq!(err.to_string(), "HTTPError: 404");
}

#[tokio::test]
async fn undecodable_body_is_a_parse_error() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
    .mount(&server)
    .await;

  let err = client_for(&server).stock_market().stock_market_losers().await.unwrap_err();
  assert!(matches!(err, Error::Parse(_)));
}

#[tokio::test]
async fn json_body_passes_through_unchanged() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/stock/real-time-price/AAPL"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"foo": 1})))
    .mount(&server)
    .await;

  let body =
    client_for(&server).stock_time_series().stock_realtime_price(&["AAPL"]).await.unwrap();
  assert_eq!(body, json!({"foo": 1}));
}

#[tokio::test]
async fn concurrent_calls_share_one_transport() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/majors-indexes"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/stock/gainers"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
    .mount(&server)
    .await;

  let client = client_for(&server);
  let (indexes, gainers) = tokio::join!(
    client.stock_market().stock_market_index(&[]),
    client.stock_market().stock_market_gainers(),
  );
  indexes.unwrap();
  gainers.unwrap();
}
