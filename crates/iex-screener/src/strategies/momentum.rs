//! High-quality momentum (HQM)
//!
//! Favors steady outperformance: a stock ranks well only if its 1-year,
//! 6-month, 3-month and 1-month returns are all high relative to the index.

use iex_core::DataType;
use iex_models::{BatchResponse, SymbolData};

use super::{metric_cells, metric_columns, score_rows, Metric, ScreenedRow, Strategy};
use crate::export::{Cell, ColumnFormat, FormatKind, OutputTarget};
use crate::ranking::{rank_and_select, RankOrder};

/// Rows kept after ranking
pub const MOMENTUM_SHORTLIST: usize = 51;

pub const HQM_SCORE_LABEL: &str = "HQM Score";

fn stat(data: &SymbolData, pick: fn(&iex_models::KeyStats) -> Option<f64>) -> Option<f64> {
  data.stats.as_ref().and_then(pick)
}

pub const MOMENTUM_METRICS: [Metric; 4] = [
  Metric {
    label: "One-Year Price Return",
    percentile_label: "One-Year Return Percentile",
    kind: FormatKind::Percent,
    extract: |d| stat(d, |s| s.year1_change_percent),
  },
  Metric {
    label: "Six-Month Price Return",
    percentile_label: "Six-Month Return Percentile",
    kind: FormatKind::Percent,
    extract: |d| stat(d, |s| s.month6_change_percent),
  },
  Metric {
    label: "Three-Month Price Return",
    percentile_label: "Three-Month Return Percentile",
    kind: FormatKind::Percent,
    extract: |d| stat(d, |s| s.month3_change_percent),
  },
  Metric {
    label: "One-Month Price Return",
    percentile_label: "One-Month Return Percentile",
    kind: FormatKind::Percent,
    extract: |d| stat(d, |s| s.month1_change_percent),
  },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Momentum;

impl Strategy for Momentum {
  fn name(&self) -> &'static str {
    "momentum"
  }

  fn data_types(&self) -> &'static [DataType] {
    &[DataType::Stats, DataType::Quote]
  }

  fn build_rows(&self, symbols: &[String], batch: &BatchResponse) -> Vec<ScreenedRow> {
    score_rows(symbols, batch, &MOMENTUM_METRICS)
  }

  fn rank(&self, rows: Vec<ScreenedRow>) -> Vec<ScreenedRow> {
    rank_and_select(rows, |r| r.score.unwrap_or(f64::NEG_INFINITY), RankOrder::Descending, MOMENTUM_SHORTLIST)
  }

  fn columns(&self) -> Vec<ColumnFormat> {
    metric_columns(&MOMENTUM_METRICS, HQM_SCORE_LABEL)
  }

  fn cells(&self, row: &ScreenedRow) -> Vec<Cell> {
    metric_cells(row)
  }

  fn default_output(&self) -> OutputTarget {
    OutputTarget::new("output/momentum_strategy.xlsx", "Momentum Strategy")
  }
}

#[cfg(test)]
mod tests {
  use super::super::test_support::*;
  use super::*;
  use iex_core::test_utils::assert_score_eq;
  use pretty_assertions::assert_eq;

  fn entry(price: f64, y1: Option<f64>, m6: Option<f64>, m3: Option<f64>, m1: Option<f64>) -> SymbolData {
    SymbolData {
      quote: Some(quote(Some(price), None, None)),
      stats: Some(stats(y1, m6, m3, m1)),
      ..Default::default()
    }
  }

  #[test]
  fn test_hqm_score_and_order() {
    let names = symbols(&["SLOW", "FAST", "MID", "GAP"]);
    let batch = batch(vec![
      ("SLOW", entry(10.0, Some(0.01), Some(0.01), Some(0.01), Some(0.01))),
      ("FAST", entry(20.0, Some(0.90), Some(0.50), Some(0.20), Some(0.05))),
      ("MID", entry(30.0, Some(0.30), Some(0.20), Some(0.10), Some(0.03))),
      ("GAP", entry(40.0, None, Some(0.30), None, Some(0.04))),
    ]);

    let rows = Momentum.build_rows(&names, &batch);
    for row in &rows {
      let mean = row.metrics.iter().map(|m| m.percentile).sum::<f64>() / 4.0;
      assert_score_eq(row.score.unwrap(), mean);
    }

    // GAP year1 imputed with mean(0.01, 0.90, 0.30) = 0.4033..
    let gap = rows.iter().find(|r| r.symbol == "GAP").unwrap();
    assert!(gap.metrics[0].imputed());
    assert_score_eq(gap.metrics[0].value, (0.01 + 0.90 + 0.30) / 3.0);

    let ranked = Momentum.rank(rows);
    let order: Vec<&str> = ranked.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(order, vec!["FAST", "GAP", "MID", "SLOW"]);
  }

  #[test]
  fn test_keeps_top_51() {
    let names: Vec<String> = (0..80).map(|i| format!("S{:02}", i)).collect();
    let batch: BatchResponse = names
      .iter()
      .enumerate()
      .map(|(i, s)| {
        let r = i as f64 / 100.0;
        (s.clone(), entry(10.0, Some(r), Some(r), Some(r), Some(r)))
      })
      .collect();

    let ranked = Momentum.rank(Momentum.build_rows(&names, &batch));

    assert_eq!(ranked.len(), MOMENTUM_SHORTLIST);
    assert_eq!(ranked[0].symbol, "S79");
    assert_eq!(ranked[50].symbol, "S29");
    assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
  }

  #[test]
  fn test_columns_layout() {
    let columns = Momentum.columns();
    assert_eq!(columns.len(), 12);
    assert_eq!(columns[3].header, "One-Year Price Return");
    assert_eq!(columns[10].header, "One-Month Return Percentile");
    assert_eq!(columns[11].header, HQM_SCORE_LABEL);
    assert!(columns[3..].iter().all(|c| c.kind == FormatKind::Percent));
  }
}
