pub mod config;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::Config;
pub use error::{Error, Result};

/// Data groups the IEX Cloud batch endpoint can return per symbol.
///
/// Each variant maps to one value of the `types` query parameter and to one
/// key in the per-symbol object of the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
  /// Latest quote: price, market cap, P/E
  Quote,
  /// Key stats: 1/3/6/12-month price change
  Stats,
  /// Advanced stats: valuation ratios, enterprise value, EBITDA, gross profit
  AdvancedStats,
}

impl DataType {
  /// Join a set of types into the comma separated form the API expects.
  pub fn join(types: &[DataType]) -> String {
    types.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
  }
}

impl std::fmt::Display for DataType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      DataType::Quote => write!(f, "quote"),
      DataType::Stats => write!(f, "stats"),
      DataType::AdvancedStats => write!(f, "advanced-stats"),
    }
  }
}

/// Base URL for the IEX Cloud sandbox
pub const IEX_SANDBOX_BASE_URL: &str = "https://sandbox.iexapis.com/stable";

/// Maximum number of symbols the batch endpoint accepts per call
pub const MAX_BATCH_SYMBOLS: usize = 100;

/// Default request pacing (requests per second)
pub const DEFAULT_RATE_LIMIT: u32 = 10;
