//! Ranking and shortlist selection

use tracing::debug;

/// Sort direction for the composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankOrder {
  /// Lowest score first (value: cheaper is better)
  Ascending,
  /// Highest score first (momentum)
  Descending,
}

/// Stable-sort `rows` by `score` and keep the first `limit`.
///
/// Equal scores keep their original relative order.
pub fn rank_and_select<T, F>(mut rows: Vec<T>, score: F, order: RankOrder, limit: usize) -> Vec<T>
where
  F: Fn(&T) -> f64,
{
  match order {
    RankOrder::Ascending => rows.sort_by(|a, b| score(a).total_cmp(&score(b))),
    RankOrder::Descending => rows.sort_by(|a, b| score(b).total_cmp(&score(a))),
  }
  debug!("Ranked {} rows {:?}, keeping {}", rows.len(), order, limit.min(rows.len()));
  rows.truncate(limit);
  rows
}
