/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
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

//! Batch request partitioning
//!
//! The batch endpoint accepts at most 100 symbols per call, so the ticker
//! list is split into contiguous groups and each group is joined with commas.

use std::num::NonZeroUsize;

use crate::{ScreenerError, ScreenerResult};

/// Configuration for batch partitioning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
  /// Maximum number of symbols in a single request
  batch_size: NonZeroUsize,
}

impl Default for BatchConfig {
  fn default() -> Self {
    Self { batch_size: NonZeroUsize::new(iex_core::MAX_BATCH_SYMBOLS).unwrap_or(NonZeroUsize::MIN) }
  }
}

impl BatchConfig {
  /// Create a config, rejecting zero and anything above the API limit
  pub fn new(batch_size: usize) -> ScreenerResult<Self> {
    match NonZeroUsize::new(batch_size) {
      Some(size) if batch_size <= iex_core::MAX_BATCH_SYMBOLS => Ok(Self { batch_size: size }),
      _ => Err(ScreenerError::ConfigurationError(format!(
        "batch size must be between 1 and {}, got {}",
        iex_core::MAX_BATCH_SYMBOLS,
        batch_size
      ))),
    }
  }

  pub fn batch_size(&self) -> usize {
    self.batch_size.get()
  }

  /// Split symbols into contiguous groups; the last group may be shorter
  pub fn partition<S: AsRef<str>>(&self, symbols: &[S]) -> Vec<Vec<String>> {
    partition(symbols, self.batch_size)
  }

  /// Comma-joined symbol groups, one per request
  pub fn symbol_strings<S: AsRef<str>>(&self, symbols: &[S]) -> Vec<String> {
    self.partition(symbols).iter().map(|group| group.join(",")).collect()
  }
}

/// Split `symbols` into `ceil(len / chunk_size)` order-preserving chunks
pub fn partition<S: AsRef<str>>(symbols: &[S], chunk_size: NonZeroUsize) -> Vec<Vec<String>> {
  symbols
    .chunks(chunk_size.get())
    .map(|chunk| chunk.iter().map(|s| s.as_ref().to_string()).collect())
    .collect()
}
