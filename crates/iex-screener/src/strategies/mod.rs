//! Screening strategies
//!
//! A strategy decides which data types to request, turns the batch payload
//! into rows, ranks them into a shortlist and lays out the exported sheet.
//! Fetching, sizing and writing are shared and live in [`crate::pipeline`].

pub mod equal_weight;
pub mod momentum;
pub mod value;

pub use equal_weight::EqualWeight;
pub use momentum::Momentum;
pub use value::Value;

use iex_core::DataType;
use iex_models::{BatchResponse, SymbolData};
use tracing::debug;

use crate::export::{Cell, ColumnFormat, FormatKind, OutputTarget};
use crate::metrics::{composite_score, impute_mean, percentile_ranks};

/// One scored metric for one symbol
#[derive(Debug, Clone, PartialEq)]
pub struct MetricScore {
  /// Value as received (or derived); `None` if missing
  pub raw: Option<f64>,
  /// Value used for ranking, after mean imputation
  pub value: f64,
  /// Share of the candidate set at or below `value`
  pub percentile: f64,
}

impl MetricScore {
  pub fn imputed(&self) -> bool {
    self.raw.is_none()
  }
}

/// A symbol moving through the pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenedRow {
  pub symbol: String,
  pub price: Option<f64>,
  pub market_cap: Option<f64>,
  /// Scores in the strategy's metric order
  pub metrics: Vec<MetricScore>,
  /// Composite score (mean of metric percentiles)
  pub score: Option<f64>,
  /// Recommended whole shares, set by position sizing
  pub shares: Option<u64>,
}

impl ScreenedRow {
  pub fn new(symbol: &str, price: Option<f64>) -> Self {
    Self {
      symbol: symbol.to_string(),
      price,
      market_cap: None,
      metrics: Vec::new(),
      score: None,
      shares: None,
    }
  }
}

/// A ranked input column: where to read it and how to label it
#[derive(Debug, Clone, Copy)]
pub struct Metric {
  pub label: &'static str,
  pub percentile_label: &'static str,
  pub kind: FormatKind,
  pub extract: fn(&SymbolData) -> Option<f64>,
}

/// Behaviour that differs between the screens
pub trait Strategy {
  /// Name used in logs
  fn name(&self) -> &'static str;

  /// Data types to request from the batch endpoint
  fn data_types(&self) -> &'static [DataType];

  /// One row per symbol, in ticker order, with scores filled in
  fn build_rows(&self, symbols: &[String], batch: &BatchResponse) -> Vec<ScreenedRow>;

  /// Order the candidates and cut the shortlist
  fn rank(&self, rows: Vec<ScreenedRow>) -> Vec<ScreenedRow>;

  /// Exported columns, in order
  fn columns(&self) -> Vec<ColumnFormat>;

  /// Exported cells for one row, matching [`Strategy::columns`]
  fn cells(&self, row: &ScreenedRow) -> Vec<Cell>;

  /// Default workbook and sheet
  fn default_output(&self) -> OutputTarget;
}

/// The three built-in screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
  EqualWeight,
  Momentum,
  Value,
}

impl StrategyKind {
  pub fn strategy(&self) -> Box<dyn Strategy> {
    match self {
      StrategyKind::EqualWeight => Box::new(EqualWeight),
      StrategyKind::Momentum => Box::new(Momentum),
      StrategyKind::Value => Box::new(Value),
    }
  }
}

/// Build scored rows: extract each metric, impute the column mean, rank
/// every column against the full candidate set and average the
/// percentiles into the composite score.
pub fn score_rows(symbols: &[String], batch: &BatchResponse, metrics: &[Metric]) -> Vec<ScreenedRow> {
  let empty = SymbolData::default();
  let data: Vec<&SymbolData> = symbols.iter().map(|s| batch.get(s).unwrap_or(&empty)).collect();

  let mut rows: Vec<ScreenedRow> = symbols
    .iter()
    .zip(&data)
    .map(|(symbol, d)| ScreenedRow::new(symbol, d.latest_price()))
    .collect();

  for metric in metrics {
    let raw: Vec<Option<f64>> = data.iter().map(|d| (metric.extract)(d)).collect();
    let missing = raw.iter().filter(|v| v.is_none()).count();
    if missing > 0 {
      debug!("{}: imputing {} of {} values with the column mean", metric.label, missing, raw.len());
    }

    let values = impute_mean(&raw);
    let percentiles = percentile_ranks(&values);

    for (row, ((raw, value), percentile)) in rows.iter_mut().zip(raw.into_iter().zip(values).zip(percentiles)) {
      row.metrics.push(MetricScore { raw, value, percentile });
    }
  }

  for row in rows.iter_mut() {
    let percentiles: Vec<f64> = row.metrics.iter().map(|m| m.percentile).collect();
    row.score = Some(composite_score(&percentiles));
  }

  for row in rows.iter().filter(|r| r.metrics.iter().any(MetricScore::imputed)) {
    let imputed: Vec<&str> = metrics
      .iter()
      .zip(&row.metrics)
      .filter(|(_, m)| m.imputed())
      .map(|(metric, _)| metric.label)
      .collect();
    debug!("{} has imputed values for {:?}", row.symbol, imputed);
  }

  rows
}

/// Ticker, price, shares, then value + percentile for each metric, then the score
pub fn metric_columns(metrics: &[Metric], score_label: &str) -> Vec<ColumnFormat> {
  let mut columns = vec![
    ColumnFormat::new("Ticker", FormatKind::String),
    ColumnFormat::new("Price", FormatKind::Dollar),
    ColumnFormat::new("Number of Shares to Buy", FormatKind::Integer),
  ];
  for metric in metrics {
    columns.push(ColumnFormat::new(metric.label, metric.kind));
    columns.push(ColumnFormat::new(metric.percentile_label, FormatKind::Percent));
  }
  columns.push(ColumnFormat::new(score_label, FormatKind::Percent));
  columns
}

/// Cells matching [`metric_columns`]
pub fn metric_cells(row: &ScreenedRow) -> Vec<Cell> {
  let mut cells = vec![
    Cell::Text(row.symbol.clone()),
    row.price.into(),
    row.shares.map(|s| s as f64).into(),
  ];
  for metric in &row.metrics {
    cells.push(Cell::Number(metric.value));
    cells.push(Cell::Number(metric.percentile));
  }
  cells.push(row.score.into());
  cells
}

#[cfg(test)]
pub(crate) mod test_support {
  use iex_models::{AdvancedStats, BatchResponse, KeyStats, Quote, SymbolData};

  pub fn symbols(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
  }

  pub fn quote(price: Option<f64>, market_cap: Option<f64>, pe_ratio: Option<f64>) -> Quote {
    Quote { latest_price: price, market_cap, pe_ratio }
  }

  pub fn stats(y1: Option<f64>, m6: Option<f64>, m3: Option<f64>, m1: Option<f64>) -> KeyStats {
    KeyStats {
      year1_change_percent: y1,
      month6_change_percent: m6,
      month3_change_percent: m3,
      month1_change_percent: m1,
    }
  }

  pub fn advanced(
    pb: Option<f64>,
    ps: Option<f64>,
    ev: Option<f64>,
    ebitda: Option<f64>,
    gp: Option<f64>,
  ) -> AdvancedStats {
    AdvancedStats {
      price_to_book: pb,
      price_to_sales: ps,
      enterprise_value: ev,
      ebitda,
      gross_profit: gp,
    }
  }

  pub fn batch(entries: Vec<(&str, SymbolData)>) -> BatchResponse {
    entries.into_iter().map(|(s, d)| (s.to_string(), d)).collect()
  }
}
