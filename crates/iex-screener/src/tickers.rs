//! Ticker list loader
//!
//! Reads the static S&P 500 constituent file. The file has a header row and
//! the symbols live in the `Ticker` column; if no such header exists the
//! first column is used.

use csv::{Reader, ReaderBuilder};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::ScreenerResult;

/// Header of the symbol column
pub const TICKER_HEADER: &str = "Ticker";

#[derive(Debug, Default)]
pub struct TickerLoader;

impl TickerLoader {
  pub fn new() -> Self {
    Self
  }

  /// Load tickers from a CSV file on disk
  pub fn load<P: AsRef<Path>>(&self, path: P) -> ScreenerResult<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let symbols = self.read_from(file)?;
    info!("Loaded {} tickers from {}", symbols.len(), path.display());
    Ok(symbols)
  }

  /// Load tickers from any CSV source
  pub fn read_from<R: Read>(&self, reader: R) -> ScreenerResult<Vec<String>> {
    let mut reader: Reader<R> = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = reader.headers()?;
    let symbol_index = headers
      .iter()
      .position(|h| h.trim().eq_ignore_ascii_case(TICKER_HEADER))
      .unwrap_or(0);
    debug!("Using column {} for tickers", symbol_index);

    let mut symbols = Vec::new();
    for result in reader.records() {
      let record = result?;
      if let Some(symbol) = record.get(symbol_index) {
        let symbol = symbol.trim();
        if !symbol.is_empty() {
          symbols.push(symbol.to_string());
        }
      }
    }

    Ok(symbols)
  }
}
