//! Equal-weight position sizing

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::strategies::ScreenedRow;
use crate::{ScreenerError, ScreenerResult};

/// A validated portfolio value: finite and strictly positive
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PortfolioValue(f64);

impl PortfolioValue {
  pub fn new(value: f64) -> ScreenerResult<Self> {
    if value.is_finite() && value > 0.0 {
      Ok(Self(value))
    } else {
      Err(ScreenerError::InvalidInput(format!("portfolio value must be a positive number, got {}", value)))
    }
  }

  pub fn get(&self) -> f64 {
    self.0
  }
}

impl FromStr for PortfolioValue {
  type Err = ScreenerError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let trimmed = s.trim();
    let value: f64 = trimmed
      .parse()
      .map_err(|_| ScreenerError::InvalidInput(format!("'{}' is not a number", trimmed)))?;
    Self::new(value)
  }
}

impl fmt::Display for PortfolioValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "${:.2}", self.0)
  }
}

/// Totals after sizing a shortlist
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingSummary {
  /// Dollar amount allocated to each symbol
  pub position_size: f64,
  /// Dollar amount actually spent on whole shares
  pub invested: f64,
}

/// Portfolio value split evenly over `count` positions
pub fn position_size(portfolio: PortfolioValue, count: usize) -> ScreenerResult<f64> {
  if count == 0 {
    return Err(ScreenerError::InvalidData("no symbols to size positions for".to_string()));
  }
  Ok(portfolio.get() / count as f64)
}

/// Whole shares affordable with `position` at `price`
pub fn shares_to_buy(symbol: &str, position: f64, price: Option<f64>) -> ScreenerResult<u64> {
  match price {
    Some(p) if p.is_finite() && p > 0.0 => Ok((position / p).floor() as u64),
    other => Err(ScreenerError::InvalidPrice { symbol: symbol.to_string(), price: other }),
  }
}

/// Fill in `shares` for every row of the shortlist
pub fn size_positions(rows: &mut [ScreenedRow], portfolio: PortfolioValue) -> ScreenerResult<SizingSummary> {
  let position = position_size(portfolio, rows.len())?;
  debug!("Position size {:.2} over {} symbols", position, rows.len());

  let mut invested = 0.0;
  for row in rows.iter_mut() {
    let shares = shares_to_buy(&row.symbol, position, row.price)?;
    invested += shares as f64 * row.price.unwrap_or_default();
    row.shares = Some(shares);
  }

  Ok(SizingSummary { position_size: position, invested })
}
