//! Cryptocurrency endpoints

use super::EndpointBase;
use crate::endpoints::impl_endpoint_group;
use crate::transport::Transport;
use fmp_core::{Endpoint, QueryParams, Result};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// Cryptocurrency endpoint group
pub struct Cryptocurrencies {
  transport: Arc<Transport>,
}

impl Cryptocurrencies {
  /// Quotes for the given crypto symbols, or the whole listing when empty
  #[instrument(skip(self))]
  pub async fn cryptocurrencies(&self, symbols: &[&str]) -> Result<Value> {
    self.request(Endpoint::Cryptocurrencies, symbols, QueryParams::new()).await
  }
}

impl_endpoint_group!(Cryptocurrencies, "cryptocurrencies");
