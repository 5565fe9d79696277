//! Foreign exchange endpoints

use super::EndpointBase;
use crate::endpoints::impl_endpoint_group;
use crate::transport::Transport;
use fmp_core::{Endpoint, QueryParams, Result};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// Forex endpoint group
pub struct Forex {
  transport: Arc<Transport>,
}

impl Forex {
  /// Exchange rates for the given currency pairs, or all pairs when empty
  #[instrument(skip(self))]
  pub async fn foreign_exchange_rate(&self, pairs: &[&str]) -> Result<Value> {
    self.request(Endpoint::Forex, pairs, QueryParams::new()).await
  }
}

impl_endpoint_group!(Forex, "forex");
