use anyhow::{Context, Result};
use clap::Args;
use iex_client::IexClient;
use iex_screener::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::config::Config;

#[derive(Args, Debug)]
pub struct ScreenArgs {
  /// CSV file with a `Ticker` column (defaults to TICKERS_CSV or sp_500_stocks.csv)
  #[arg(short, long)]
  pub tickers: Option<PathBuf>,

  /// Workbook to write instead of the strategy's default under output/
  #[arg(short, long)]
  pub output: Option<PathBuf>,

  /// Portfolio value in dollars; prompts on stdin when omitted
  #[arg(short, long)]
  pub portfolio: Option<f64>,

  /// Hide the progress bar
  #[arg(long)]
  pub no_progress: bool,
}

pub async fn execute(kind: StrategyKind, args: ScreenArgs, config: Config) -> Result<()> {
  let strategy = kind.strategy();
  info!("Running {} screen", strategy.name());

  let tickers_path = args.tickers.unwrap_or(config.tickers_csv);
  let symbols = TickerLoader::new()
    .load(&tickers_path)
    .with_context(|| format!("Failed to read tickers from {}", tickers_path.display()))?;

  let client = Arc::new(IexClient::new(config.api_config).context("Failed to create IEX Cloud client")?);
  let batch = BatchConfig::new(client.batch_size())?;
  let pipeline = Pipeline::new(client, PipelineConfig { batch, show_progress: !args.no_progress });

  let mut portfolio: Box<dyn PortfolioSource> = match args.portfolio {
    Some(value) => Box::new(FixedPortfolio(PortfolioValue::new(value)?)),
    None => Box::new(InteractivePrompt::stdio()),
  };

  let mut target = strategy.default_output();
  if let Some(path) = args.output {
    target = target.with_path(path);
  }

  let summary = pipeline
    .run(strategy.as_ref(), &symbols, portfolio.as_mut(), &target)
    .await
    .with_context(|| format!("{} screen failed", strategy.name()))?;

  println!(
    "{}: {} of {} stocks, ${:.2} per position, ${:.2} invested",
    summary.strategy, summary.shortlisted, summary.candidates, summary.position_size, summary.invested
  );
  println!("Wrote {} at {}", summary.output.display(), summary.generated_at.format("%Y-%m-%d %H:%M:%S UTC"));

  Ok(())
}
