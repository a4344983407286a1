//! Equal-weight S&P 500: every constituent with a price, same dollar amount each

use iex_core::DataType;
use iex_models::BatchResponse;
use tracing::warn;

use super::{ScreenedRow, Strategy};
use crate::export::{Cell, ColumnFormat, FormatKind, OutputTarget};

#[derive(Debug, Clone, Copy, Default)]
pub struct EqualWeight;

impl Strategy for EqualWeight {
  fn name(&self) -> &'static str {
    "equal-weight"
  }

  fn data_types(&self) -> &'static [DataType] {
    &[DataType::Quote]
  }

  fn build_rows(&self, symbols: &[String], batch: &BatchResponse) -> Vec<ScreenedRow> {
    symbols
      .iter()
      .filter_map(|symbol| {
        let data = batch.get(symbol);
        let price = data.and_then(|d| d.latest_price());
        if price.is_none() {
          warn!("{}: no price returned, dropping", symbol);
          return None;
        }
        let mut row = ScreenedRow::new(symbol, price);
        row.market_cap = data.and_then(|d| d.market_cap());
        Some(row)
      })
      .collect()
  }

  fn rank(&self, rows: Vec<ScreenedRow>) -> Vec<ScreenedRow> {
    rows
  }

  fn columns(&self) -> Vec<ColumnFormat> {
    vec![
      ColumnFormat::new("Ticker", FormatKind::String),
      ColumnFormat::new("Price", FormatKind::Dollar),
      ColumnFormat::new("Market Capitalization", FormatKind::Dollar),
      ColumnFormat::new("Number of Shares to Buy", FormatKind::Integer),
    ]
  }

  fn cells(&self, row: &ScreenedRow) -> Vec<Cell> {
    vec![
      Cell::Text(row.symbol.clone()),
      row.price.into(),
      row.market_cap.into(),
      row.shares.map(|s| s as f64).into(),
    ]
  }

  fn default_output(&self) -> OutputTarget {
    OutputTarget::new("output/recommended_trades.xlsx", "Recommended Trades")
  }
}
