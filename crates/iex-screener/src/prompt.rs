//! Portfolio value input
//!
//! The interactive prompt gives exactly one second chance: a first answer
//! that is not a positive number triggers one re-prompt, and a second bad
//! answer ends the run with an error rather than looping.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::warn;

use crate::sizing::PortfolioValue;
use crate::{ScreenerError, ScreenerResult};

pub const PORTFOLIO_PROMPT: &str = "Enter the value of your portfolio:";
pub const RETRY_MESSAGE: &str = "That's not a number! \n Try again:";

/// Where the portfolio value comes from
pub trait PortfolioSource {
  fn portfolio_value(&mut self) -> ScreenerResult<PortfolioValue>;
}

/// A value supplied up front, e.g. on the command line
#[derive(Debug, Clone, Copy)]
pub struct FixedPortfolio(pub PortfolioValue);

impl PortfolioSource for FixedPortfolio {
  fn portfolio_value(&mut self) -> ScreenerResult<PortfolioValue> {
    Ok(self.0)
  }
}

/// Line-oriented prompt over any reader/writer pair
pub struct InteractivePrompt<R, W> {
  input: R,
  output: W,
}

impl InteractivePrompt<StdinLock<'static>, Stdout> {
  /// Prompt on the process's stdin/stdout
  pub fn stdio() -> Self {
    Self::new(io::stdin().lock(), io::stdout())
  }
}

impl<R: BufRead, W: Write> InteractivePrompt<R, W> {
  pub fn new(input: R, output: W) -> Self {
    Self { input, output }
  }

  fn ask(&mut self) -> ScreenerResult<String> {
    write!(self.output, "{}", PORTFOLIO_PROMPT)?;
    self.output.flush()?;

    let mut line = String::new();
    self.input.read_line(&mut line)?;
    Ok(line)
  }

  pub fn into_inner(self) -> (R, W) {
    (self.input, self.output)
  }
}

impl<R: BufRead, W: Write> PortfolioSource for InteractivePrompt<R, W> {
  fn portfolio_value(&mut self) -> ScreenerResult<PortfolioValue> {
    let first = self.ask()?;
    match first.parse::<PortfolioValue>() {
      Ok(value) => Ok(value),
      Err(err) => {
        warn!("Rejected portfolio value: {}", err);
        writeln!(self.output, "{}", RETRY_MESSAGE)?;
        let second = self.ask()?;
        second.parse::<PortfolioValue>().map_err(|err| match err {
          ScreenerError::InvalidInput(msg) => {
            ScreenerError::InvalidInput(format!("{} (second attempt)", msg))
          }
          other => other,
        })
      }
    }
  }
}
