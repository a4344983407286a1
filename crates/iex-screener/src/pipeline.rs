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

//! End-to-end screen: fetch, score, rank, size, export

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use iex_client::IexClient;
use iex_core::DataType;
use iex_models::BatchResponse;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, instrument};

use crate::batch::BatchConfig;
use crate::export::{OutputTarget, SpreadsheetExporter};
use crate::prompt::PortfolioSource;
use crate::sizing::size_positions;
use crate::strategies::Strategy;
use crate::{ScreenerError, ScreenerResult};

/// Configuration for a screening run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
  /// Symbol grouping for batch requests
  pub batch: BatchConfig,

  /// Show a progress bar while fetching
  pub show_progress: bool,
}

impl Default for PipelineConfig {
  fn default() -> Self {
    Self { batch: BatchConfig::default(), show_progress: true }
  }
}

/// What a finished run produced
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
  pub strategy: &'static str,
  /// Rows built from the fetched data
  pub candidates: usize,
  /// Rows kept after ranking, i.e. rows written
  pub shortlisted: usize,
  pub position_size: f64,
  pub invested: f64,
  pub output: PathBuf,
  pub generated_at: DateTime<Utc>,
}

/// Drives a [`Strategy`] against the IEX Cloud batch endpoint
pub struct Pipeline {
  client: Arc<IexClient>,
  config: PipelineConfig,
}

impl Pipeline {
  pub fn new(client: Arc<IexClient>, config: PipelineConfig) -> Self {
    Self { client, config }
  }

  pub fn config(&self) -> &PipelineConfig {
    &self.config
  }

  /// Request every batch in order and merge the results.
  ///
  /// Batches are fetched one after another; the first failure aborts the
  /// whole fetch.
  pub async fn fetch(&self, symbols: &[String], types: &[DataType]) -> ScreenerResult<BatchResponse> {
    let groups = self.config.batch.symbol_strings(symbols);
    info!("Fetching {} for {} symbols in {} batches", DataType::join(types), symbols.len(), groups.len());

    let progress = if self.config.show_progress {
      let pb = ProgressBar::new(groups.len() as u64);
      pb.set_style(
        ProgressStyle::default_bar()
          .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")
          .unwrap_or_else(|_| ProgressStyle::default_bar())
          .progress_chars("##-"),
      );
      pb.set_message("Fetching batches");
      Some(pb)
    } else {
      None
    };

    let market = self.client.market();
    let mut merged = BatchResponse::with_capacity(symbols.len());

    for (idx, group) in groups.iter().enumerate() {
      let batch = match market.batch(group, types).await {
        Ok(batch) => batch,
        Err(e) => {
          if let Some(pb) = &progress {
            pb.abandon_with_message(format!("Batch {} failed", idx + 1));
          }
          return Err(e.into());
        }
      };
      debug!("Batch {}/{} returned {} symbols", idx + 1, groups.len(), batch.len());
      merged.extend(batch);

      if let Some(pb) = &progress {
        pb.inc(1);
      }
    }

    if let Some(pb) = progress {
      pb.finish_with_message(format!("Fetched {} symbols", merged.len()));
    }

    Ok(merged)
  }

  /// Run one screen from ticker list to workbook.
  #[instrument(skip_all, fields(strategy = strategy.name()))]
  pub async fn run<S: Strategy + ?Sized>(
    &self,
    strategy: &S,
    symbols: &[String],
    portfolio: &mut dyn PortfolioSource,
    target: &OutputTarget,
  ) -> ScreenerResult<RunSummary> {
    if symbols.is_empty() {
      return Err(ScreenerError::InvalidData("ticker list is empty".to_string()));
    }

    let batch = self.fetch(symbols, strategy.data_types()).await?;

    let rows = strategy.build_rows(symbols, &batch);
    let candidates = rows.len();
    let mut shortlist = strategy.rank(rows);
    if shortlist.is_empty() {
      return Err(ScreenerError::InvalidData(format!("{} screen produced no rows", strategy.name())));
    }
    info!("{}: {} candidates, {} shortlisted", strategy.name(), candidates, shortlist.len());

    let portfolio_value = portfolio.portfolio_value()?;
    let sizing = size_positions(&mut shortlist, portfolio_value)?;
    info!(
      "Portfolio {} split into {} positions of ${:.2}, ${:.2} invested",
      portfolio_value,
      shortlist.len(),
      sizing.position_size,
      sizing.invested
    );

    for row in &shortlist {
      debug!(
        "{:<6} price={:?} shares={:?} score={:?}",
        row.symbol,
        row.price,
        row.shares,
        row.score
      );
    }

    let cells: Vec<_> = shortlist.iter().map(|row| strategy.cells(row)).collect();
    SpreadsheetExporter::new().write(target, &strategy.columns(), &cells)?;

    Ok(RunSummary {
      strategy: strategy.name(),
      candidates,
      shortlisted: shortlist.len(),
      position_size: sizing.position_size,
      invested: sizing.invested,
      output: target.path.clone(),
      generated_at: Utc::now(),
    })
  }
}
