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

//! # iex-screener
//!
//! S&P 500 screens over IEX Cloud batch data.
//!
//! This crate provides:
//! - Ticker list loading from CSV
//! - Batch partitioning for the multi-symbol endpoint
//! - Mean imputation, percentile ranks and composite scores
//! - Equal-weight, high-quality momentum and robust value strategies
//! - Equal-weight position sizing and the portfolio prompt
//! - Styled `.xlsx` export

pub mod batch;
pub mod error;
pub mod export;
pub mod metrics;
pub mod pipeline;
pub mod prompt;
pub mod ranking;
pub mod sizing;
pub mod strategies;
pub mod tickers;

// Re-export commonly used types
pub use batch::{partition, BatchConfig};
pub use error::{ScreenerError, ScreenerResult};
pub use export::{Cell, ColumnFormat, FormatKind, OutputTarget, SpreadsheetExporter};
pub use pipeline::{Pipeline, PipelineConfig, RunSummary};
pub use prompt::{FixedPortfolio, InteractivePrompt, PortfolioSource};
pub use ranking::{rank_and_select, RankOrder};
pub use sizing::{PortfolioValue, SizingSummary};
pub use strategies::{EqualWeight, Momentum, ScreenedRow, Strategy, StrategyKind, Value};
pub use tickers::TickerLoader;

// Prelude for convenient imports
pub mod prelude {
  pub use crate::{
    BatchConfig, FixedPortfolio, InteractivePrompt, OutputTarget, Pipeline, PipelineConfig, PortfolioSource,
    PortfolioValue, RunSummary, ScreenerError, ScreenerResult, Strategy, StrategyKind, TickerLoader,
  };
}
