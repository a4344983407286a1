/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Top-level IEX Cloud client

use crate::endpoints::{DirectRateLimiter, market::MarketEndpoints};
use crate::transport::Transport;
use governor::{Quota, RateLimiter};
use iex_core::{Config, Result};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Main IEX Cloud API client
///
/// Holds the transport (with the API token injected from [`Config`]) and a
/// rate limiter that paces requests. Requests are never retried.
///
/// # Examples
///
/// ```ignore
/// use iex_client::IexClient;
/// use iex_core::{Config, DataType};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_env()?;
///     let client = IexClient::new(config)?;
///
///     let batch = client.market().batch("AAPL,MSFT", &[DataType::Quote]).await?;
///     println!("AAPL: {:?}", batch.get("AAPL").and_then(|d| d.latest_price()));
///
///     Ok(())
/// }
/// ```
pub struct IexClient {
  rate_limiter: Arc<DirectRateLimiter>,
  transport: Arc<Transport>,
  batch_size: usize,
}

impl IexClient {
  /// Create a new IEX Cloud API client
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    // Ensure rate_limit is non-zero, fallback to default if invalid
    let rate_limit_value = NonZeroU32::new(config.rate_limit)
      .or(NonZeroU32::new(iex_core::DEFAULT_RATE_LIMIT))
      .unwrap_or(NonZeroU32::MIN);
    let quota = Quota::per_second(rate_limit_value);
    let rate_limiter = Arc::new(RateLimiter::direct(quota));

    Self::with_rate_limiter(config, rate_limiter)
  }

  /// Create a new client with custom rate limiting
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn with_rate_limiter(config: Config, rate_limiter: Arc<DirectRateLimiter>) -> Result<Self> {
    let transport = Arc::new(Transport::new(&config)?);
    Ok(Self { transport, rate_limiter, batch_size: config.batch_size })
  }

  /// Get access to the market-wide batch endpoints
  pub fn market(&self) -> MarketEndpoints {
    MarketEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Symbols per batch request, as configured
  pub fn batch_size(&self) -> usize {
    self.batch_size
  }
}

impl std::fmt::Debug for IexClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("IexClient")
      .field("transport", &self.transport)
      .field("rate_limiter", &"RateLimiter")
      .field("batch_size", &self.batch_size)
      .finish()
  }
}
