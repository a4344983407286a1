use anyhow::{Context, Result};
use iex_core::Config as CoreConfig;
use std::env;
use std::path::PathBuf;

/// Ticker file used when neither `--tickers` nor `TICKERS_CSV` is given
pub const DEFAULT_TICKERS_CSV: &str = "sp_500_stocks.csv";

#[derive(Debug, Clone)]
pub struct Config {
  pub api_config: CoreConfig,
  pub tickers_csv: PathBuf,
}

impl Config {
  pub fn from_env() -> Result<Self> {
    let api_config = CoreConfig::from_env().context("Failed to load IEX Cloud configuration")?;

    let tickers_csv = env::var("TICKERS_CSV").unwrap_or_else(|_| DEFAULT_TICKERS_CSV.to_string()).into();

    Ok(Self { api_config, tickers_csv })
  }
}
