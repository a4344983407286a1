//! `/stock/market/batch`

use super::{DirectRateLimiter, EndpointBase};
use crate::endpoints::impl_endpoint_base;
use crate::transport::Transport;
use iex_core::{DataType, Error, Result};
use iex_models::BatchResponse;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Path of the multi-symbol batch endpoint
pub const BATCH_PATH: &str = "/stock/market/batch";

/// Market-wide endpoints (multi-symbol batch requests)
pub struct MarketEndpoints {
  transport: Arc<Transport>,
  rate_limiter: Arc<DirectRateLimiter>,
}

impl_endpoint_base!(MarketEndpoints);

impl MarketEndpoints {
  /// Create a new market endpoints instance
  pub fn new(transport: Arc<Transport>, rate_limiter: Arc<DirectRateLimiter>) -> Self {
    Self { transport, rate_limiter }
  }

  /// Fetch the requested data types for a comma separated group of symbols
  ///
  /// One HTTP GET is issued. Symbols that IEX Cloud does not return are
  /// simply absent from the map; callers treat them as missing data.
  ///
  /// # Arguments
  ///
  /// * `symbols` - Comma separated tickers, at most 100 (e.g. "AAPL,MSFT")
  /// * `types` - Data groups to include in each symbol's entry
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let batch = client.market().batch("AAPL,MSFT", &[DataType::Quote]).await?;
  /// let price = batch.get("AAPL").and_then(|d| d.latest_price());
  /// ```
  #[instrument(skip(self, types), fields(types = %DataType::join(types)))]
  pub async fn batch(&self, symbols: &str, types: &[DataType]) -> Result<BatchResponse> {
    if types.is_empty() {
      return Err(Error::Config("at least one data type is required".to_string()));
    }

    let count = symbols.split(',').filter(|s| !s.trim().is_empty()).count();
    if count == 0 {
      debug!("Empty symbol group, skipping request");
      return Ok(BatchResponse::new());
    }
    if count > iex_core::MAX_BATCH_SYMBOLS {
      return Err(Error::Config(format!(
        "batch of {} symbols exceeds the limit of {}",
        count,
        iex_core::MAX_BATCH_SYMBOLS
      )));
    }

    self.wait_for_rate_limit().await?;

    let params = [("symbols", symbols.to_string()), ("types", DataType::join(types))];

    self.transport.get(BATCH_PATH, &params).await
  }
}
