//! Scoring math shared by the momentum and value screens
//!
//! Missing values are imputed with the column mean before ranking, so every
//! row always gets a percentile. A percentile is the share of the column that
//! is less than or equal to the value, in `[0, 1]`.

/// Arithmetic mean of the present values, `None` if there are none
pub fn column_mean(values: &[Option<f64>]) -> Option<f64> {
  let present: Vec<f64> = values.iter().flatten().copied().collect();
  if present.is_empty() {
    None
  } else {
    Some(present.iter().sum::<f64>() / present.len() as f64)
  }
}

/// Replace every missing value with the mean of the present ones.
///
/// A column with no values at all is filled with `0.0`.
pub fn impute_mean(values: &[Option<f64>]) -> Vec<f64> {
  let fill = column_mean(values).unwrap_or(0.0);
  values.iter().map(|v| v.unwrap_or(fill)).collect()
}

/// Fraction of `values` that are `<= score`
pub fn percentile_of_score(values: &[f64], score: f64) -> f64 {
  if values.is_empty() {
    return 0.0;
  }
  let at_or_below = values.iter().filter(|v| **v <= score).count();
  at_or_below as f64 / values.len() as f64
}

/// Percentile of every value against its own column
pub fn percentile_ranks(values: &[f64]) -> Vec<f64> {
  let mut sorted = values.to_vec();
  sorted.sort_by(f64::total_cmp);
  let n = sorted.len() as f64;

  values
    .iter()
    .map(|x| sorted.partition_point(|v| v <= x) as f64 / n)
    .collect()
}

/// Unweighted mean of a row's percentiles
pub fn composite_score(percentiles: &[f64]) -> f64 {
  if percentiles.is_empty() {
    return 0.0;
  }
  percentiles.iter().sum::<f64>() / percentiles.len() as f64
}

/// `numerator / denominator`, or `None` when either side is missing, the
/// denominator is zero, or the result is not finite.
pub fn safe_ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
  match (numerator, denominator) {
    (Some(n), Some(d)) if d != 0.0 => Some(n / d).filter(|r| r.is_finite()),
    _ => None,
  }
}
