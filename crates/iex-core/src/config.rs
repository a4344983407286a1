//! Configuration management for the IEX Cloud client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the IEX Cloud client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// IEX Cloud API token
  pub api_token: String,

  /// Request pacing (requests per second)
  pub rate_limit: u32,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Symbols per batch request
  pub batch_size: usize,

  /// Base URL for IEX Cloud, including the version segment
  pub base_url: String,
}

impl Config {
  /// Load configuration from environment variables, reading `.env` first.
  pub fn from_env() -> Result<Self> {
    dotenv().ok();
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Build a configuration from an arbitrary key lookup.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let api_token = lookup("IEX_CLOUD_API_TOKEN")
      .filter(|token| !token.trim().is_empty())
      .ok_or_else(|| Error::ApiKey("IEX_CLOUD_API_TOKEN not set".to_string()))?;

    let rate_limit = lookup("IEX_RATE_LIMIT")
      .unwrap_or_else(|| crate::DEFAULT_RATE_LIMIT.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid IEX_RATE_LIMIT".to_string()))?;

    let timeout_secs = lookup("IEX_TIMEOUT_SECS")
      .unwrap_or_else(|| "30".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid IEX_TIMEOUT_SECS".to_string()))?;

    let batch_size: usize = lookup("IEX_BATCH_SIZE")
      .unwrap_or_else(|| crate::MAX_BATCH_SYMBOLS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid IEX_BATCH_SIZE".to_string()))?;

    if batch_size == 0 || batch_size > crate::MAX_BATCH_SYMBOLS {
      return Err(Error::Config(format!(
        "IEX_BATCH_SIZE must be between 1 and {}",
        crate::MAX_BATCH_SYMBOLS
      )));
    }

    let base_url = lookup("IEX_BASE_URL").unwrap_or_else(|| crate::IEX_SANDBOX_BASE_URL.to_string());

    Ok(Config { api_token, rate_limit, timeout_secs, batch_size, base_url })
  }

  /// Create a config with default values (for testing)
  pub fn default_with_key(api_token: String) -> Self {
    Config {
      api_token,
      rate_limit: crate::DEFAULT_RATE_LIMIT,
      timeout_secs: 30,
      batch_size: crate::MAX_BATCH_SYMBOLS,
      base_url: crate::IEX_SANDBOX_BASE_URL.to_string(),
    }
  }

  /// Point the config at a different host, e.g. a mock server.
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }
}
