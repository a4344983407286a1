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

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ScreenerError {
  #[error("API error: {0}")]
  ApiError(String),

  #[error("CSV parsing error: {0}")]
  CsvError(String),

  #[error("IO error: {0}")]
  IoError(String),

  #[error("Spreadsheet error: {0}")]
  SpreadsheetError(String),

  #[error("Invalid input: {0}")]
  InvalidInput(String),

  #[error("Invalid price for {symbol}: {price:?}")]
  InvalidPrice { symbol: String, price: Option<f64> },

  #[error("Invalid data: {0}")]
  InvalidData(String),

  #[error("Configuration error: {0}")]
  ConfigurationError(String),
}

// Implement conversions manually
impl From<csv::Error> for ScreenerError {
  fn from(err: csv::Error) -> Self {
    ScreenerError::CsvError(err.to_string())
  }
}

impl From<std::io::Error> for ScreenerError {
  fn from(err: std::io::Error) -> Self {
    ScreenerError::IoError(err.to_string())
  }
}

impl From<rust_xlsxwriter::XlsxError> for ScreenerError {
  fn from(err: rust_xlsxwriter::XlsxError) -> Self {
    ScreenerError::SpreadsheetError(err.to_string())
  }
}

impl From<iex_core::Error> for ScreenerError {
  fn from(err: iex_core::Error) -> Self {
    ScreenerError::ApiError(err.to_string())
  }
}

pub type ScreenerResult<T> = Result<T, ScreenerError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_screener_error_display_api_error() {
    let err = ScreenerError::ApiError("connection failed".to_string());
    assert_eq!(err.to_string(), "API error: connection failed");
  }

  #[test]
  fn test_screener_error_display_invalid_price() {
    let err = ScreenerError::InvalidPrice { symbol: "XYZ".to_string(), price: Some(0.0) };
    assert_eq!(err.to_string(), "Invalid price for XYZ: Some(0.0)");

    let err = ScreenerError::InvalidPrice { symbol: "XYZ".to_string(), price: None };
    assert_eq!(err.to_string(), "Invalid price for XYZ: None");
  }

  #[test]
  fn test_screener_error_display_invalid_input() {
    let err = ScreenerError::InvalidInput("abc is not a number".to_string());
    assert_eq!(err.to_string(), "Invalid input: abc is not a number");
  }

  #[test]
  fn test_screener_error_from_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
    let err = ScreenerError::from(io_err);
    assert!(matches!(err, ScreenerError::IoError(_)));
    assert!(err.to_string().contains("read-only"));
  }

  #[test]
  fn test_screener_error_from_iex_core_error() {
    let core_err = iex_core::Error::Http("timed out".to_string());
    let err = ScreenerError::from(core_err);
    assert!(matches!(err, ScreenerError::ApiError(_)));
    assert!(err.to_string().contains("timed out"));
  }

  #[test]
  fn test_screener_error_clone() {
    let err = ScreenerError::CsvError("bad header".to_string());
    let cloned = err.clone();
    assert_eq!(err.to_string(), cloned.to_string());
  }
}
