//! Robust value (RV)
//!
//! Blends five valuation multiples. Lower multiples mean cheaper stocks, so
//! the shortlist is the lowest composite scores.

use iex_core::DataType;
use iex_models::{AdvancedStats, BatchResponse, SymbolData};

use super::{metric_cells, metric_columns, score_rows, Metric, ScreenedRow, Strategy};
use crate::export::{Cell, ColumnFormat, FormatKind, OutputTarget};
use crate::metrics::safe_ratio;
use crate::ranking::{rank_and_select, RankOrder};

pub const VALUE_SHORTLIST: usize = 50;

pub const RV_SCORE_LABEL: &str = "RV Score";

fn advanced(data: &SymbolData, pick: fn(&AdvancedStats) -> Option<f64>) -> Option<f64> {
  data.advanced_stats.as_ref().and_then(pick)
}

pub fn ev_to_ebitda(data: &SymbolData) -> Option<f64> {
  advanced(data, |a| safe_ratio(a.enterprise_value, a.ebitda))
}

pub fn ev_to_gross_profit(data: &SymbolData) -> Option<f64> {
  advanced(data, |a| safe_ratio(a.enterprise_value, a.gross_profit))
}

pub const VALUE_METRICS: [Metric; 5] = [
  Metric {
    label: "Price-to-Earnings Ratio",
    percentile_label: "PE Percentile",
    kind: FormatKind::Float,
    extract: SymbolData::pe_ratio,
  },
  Metric {
    label: "Price-to-Book Ratio",
    percentile_label: "PB Percentile",
    kind: FormatKind::Float,
    extract: |d| advanced(d, |a| a.price_to_book),
  },
  Metric {
    label: "Price-to-Sales Ratio",
    percentile_label: "PS Percentile",
    kind: FormatKind::Float,
    extract: |d| advanced(d, |a| a.price_to_sales),
  },
  Metric {
    label: "EV/EBITDA",
    percentile_label: "EV/EBITDA Percentile",
    kind: FormatKind::Float,
    extract: ev_to_ebitda,
  },
  Metric {
    label: "EV/GP",
    percentile_label: "EV/GP Percentile",
    kind: FormatKind::Float,
    extract: ev_to_gross_profit,
  },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Value;

impl Strategy for Value {
  fn name(&self) -> &'static str {
    "value"
  }

  fn data_types(&self) -> &'static [DataType] {
    &[DataType::Quote, DataType::AdvancedStats]
  }

  fn build_rows(&self, symbols: &[String], batch: &BatchResponse) -> Vec<ScreenedRow> {
    score_rows(symbols, batch, &VALUE_METRICS)
  }

  fn rank(&self, rows: Vec<ScreenedRow>) -> Vec<ScreenedRow> {
    rank_and_select(rows, |r| r.score.unwrap_or(f64::INFINITY), RankOrder::Ascending, VALUE_SHORTLIST)
  }

  fn columns(&self) -> Vec<ColumnFormat> {
    metric_columns(&VALUE_METRICS, RV_SCORE_LABEL)
  }

  fn cells(&self, row: &ScreenedRow) -> Vec<Cell> {
    metric_cells(row)
  }

  fn default_output(&self) -> OutputTarget {
    OutputTarget::new("output/value_strategy.xlsx", "Value Strategy")
  }
}
