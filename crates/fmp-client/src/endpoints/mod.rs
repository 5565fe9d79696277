//! Endpoint groups and the shared request-building base

pub mod company_valuation;
pub mod crypto;
pub mod forex;
pub mod stock_market;
pub mod stock_time_series;

use crate::transport::Transport;
use fmp_core::{Endpoint, QueryParams, Result};
use serde_json::Value;
use std::sync::Arc;

/// Join an endpoint path with a comma-separated identifier segment.
///
/// An empty identifier list yields the bare endpoint path: no trailing
/// slash, so the resolved URL never carries a dangling separator.
pub fn join_identifiers(endpoint: Endpoint, identifiers: &[&str]) -> String {
  if identifiers.is_empty() {
    endpoint.path().to_string()
  } else {
    format!("{}/{}", endpoint.path(), identifiers.join(","))
  }
}

/// Base trait for endpoint implementations
///
/// Provides the single request-building path every endpoint group reuses.
pub trait EndpointBase {
  /// Get a reference to the shared transport layer
  fn transport(&self) -> &Arc<Transport>;

  /// Issue a GET for `endpoint` scoped to `identifiers`, delegating to the
  /// shared transport. Returns the decoded JSON body unchanged.
  async fn request(
    &self,
    endpoint: Endpoint,
    identifiers: &[&str],
    params: QueryParams,
  ) -> Result<Value> {
    let path = join_identifiers(endpoint, identifiers);
    self.transport().get(&path, params).await
  }
}

/// Named endpoint group attachable to a client
///
/// Groups own nothing but a handle to the shared transport, and each is
/// constructed exactly once during client construction.
pub trait EndpointGroup: EndpointBase + Sized {
  /// The name this group is registered under
  const NAME: &'static str;

  /// Construct the group over the shared transport
  fn new(transport: Arc<Transport>) -> Self;
}

/// Macro to wire an endpoint struct into the group traits
macro_rules! impl_endpoint_group {
  ($struct_name:ident, $name:literal) => {
    impl crate::endpoints::EndpointBase for $struct_name {
      fn transport(&self) -> &std::sync::Arc<crate::transport::Transport> {
        &self.transport
      }
    }

    impl crate::endpoints::EndpointGroup for $struct_name {
      const NAME: &'static str = $name;

      fn new(transport: std::sync::Arc<crate::transport::Transport>) -> Self {
        Self { transport }
      }
    }
  };
}

pub(crate) use impl_endpoint_group;
