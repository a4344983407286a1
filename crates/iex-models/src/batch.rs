/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Models for the `/stock/market/batch` endpoint
//!
//! The response is a JSON object keyed by ticker. Each value is an object
//! keyed by the requested data type (`quote`, `stats`, `advanced-stats`).

use crate::common::{lenient_f64, lenient_section};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Full batch response, keyed by symbol
pub type BatchResponse = HashMap<String, SymbolData>;

/// Everything returned for one symbol in a batch call
///
/// An entry that is not an object (e.g. `null`) deserializes to the default,
/// so one bad symbol never fails the whole batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct SymbolData {
  pub quote: Option<Quote>,

  /// Key stats (price change windows)
  pub stats: Option<KeyStats>,

  #[serde(rename = "advanced-stats")]
  pub advanced_stats: Option<AdvancedStats>,
}

#[derive(Deserialize)]
struct RawSymbolData {
  #[serde(default, deserialize_with = "lenient_section")]
  quote: Option<Quote>,

  #[serde(default, deserialize_with = "lenient_section")]
  stats: Option<KeyStats>,

  #[serde(rename = "advanced-stats", default, deserialize_with = "lenient_section")]
  advanced_stats: Option<AdvancedStats>,
}

impl From<Value> for SymbolData {
  fn from(value: Value) -> Self {
    match serde_json::from_value::<RawSymbolData>(value) {
      Ok(raw) => SymbolData { quote: raw.quote, stats: raw.stats, advanced_stats: raw.advanced_stats },
      Err(_) => SymbolData::default(),
    }
  }
}

impl SymbolData {
  pub fn latest_price(&self) -> Option<f64> {
    self.quote.as_ref().and_then(|q| q.latest_price)
  }

  pub fn market_cap(&self) -> Option<f64> {
    self.quote.as_ref().and_then(|q| q.market_cap)
  }

  pub fn pe_ratio(&self) -> Option<f64> {
    self.quote.as_ref().and_then(|q| q.pe_ratio)
  }
}

/// Quote section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
  /// Latest traded price
  #[serde(default, deserialize_with = "lenient_f64")]
  pub latest_price: Option<f64>,

  #[serde(default, deserialize_with = "lenient_f64")]
  pub market_cap: Option<f64>,

  /// Price to earnings ratio
  #[serde(default, deserialize_with = "lenient_f64")]
  pub pe_ratio: Option<f64>,
}

/// Key stats section. Change percentages are fractions (0.12 = 12%).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyStats {
  #[serde(default, deserialize_with = "lenient_f64")]
  pub year1_change_percent: Option<f64>,

  #[serde(default, deserialize_with = "lenient_f64")]
  pub month6_change_percent: Option<f64>,

  #[serde(default, deserialize_with = "lenient_f64")]
  pub month3_change_percent: Option<f64>,

  #[serde(default, deserialize_with = "lenient_f64")]
  pub month1_change_percent: Option<f64>,
}

/// Advanced stats section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedStats {
  #[serde(default, deserialize_with = "lenient_f64")]
  pub price_to_book: Option<f64>,

  #[serde(default, deserialize_with = "lenient_f64")]
  pub price_to_sales: Option<f64>,

  #[serde(default, deserialize_with = "lenient_f64")]
  pub enterprise_value: Option<f64>,

  /// Earnings before interest, taxes, depreciation and amortization
  #[serde(rename = "EBITDA", default, deserialize_with = "lenient_f64")]
  pub ebitda: Option<f64>,

  #[serde(default, deserialize_with = "lenient_f64")]
  pub gross_profit: Option<f64>,
}
