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

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use iex_screener::StrategyKind;
use tracing_subscriber::EnvFilter;

mod commands;
use commands::screen::ScreenArgs;

mod config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "screener")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Equal-weight every S&P 500 constituent
  EqualWeight(ScreenArgs),

  /// Top 51 stocks by high-quality momentum
  Momentum(ScreenArgs),

  /// Top 50 stocks by robust value
  Value(ScreenArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  // Parse CLI arguments
  let cli = Cli::parse();

  // Initialize logging; RUST_LOG wins over --verbose
  let log_level = if cli.verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

  // Load configuration
  let config = config::Config::from_env()?;

  // Execute command
  match cli.command {
    Commands::EqualWeight(args) => commands::screen::execute(StrategyKind::EqualWeight, args, config).await?,
    Commands::Momentum(args) => commands::screen::execute(StrategyKind::Momentum, args, config).await?,
    Commands::Value(args) => commands::screen::execute(StrategyKind::Value, args, config).await?,
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::CommandFactory;

  #[test]
  fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_parse_subcommand_args() {
    let cli = Cli::try_parse_from([
      "screener",
      "-v",
      "momentum",
      "--tickers",
      "data/sp_500_stocks.csv",
      "--portfolio",
      "25000",
      "--no-progress",
    ])
    .unwrap();

    assert!(cli.verbose);
    match cli.command {
      Commands::Momentum(args) => {
        assert_eq!(args.tickers.as_deref(), Some(std::path::Path::new("data/sp_500_stocks.csv")));
        assert_eq!(args.portfolio, Some(25000.0));
        assert!(args.no_progress);
        assert!(args.output.is_none());
      }
      other => panic!("unexpected command {:?}", other),
    }
  }
}
