use thiserror::Error;

/// The main error type for iex-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// API token error
  #[error("Failed to retrieve API token: {0}")]
  ApiKey(String),

  /// Serialization/Deserialization error
  #[error("Serialization error")]
  Serde(#[from] serde_json::Error),

  /// Malformed base URL
  #[error("Invalid URL: {0}")]
  Url(#[from] url::ParseError),

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// Error status or message returned by IEX Cloud
  #[error("API error: {0}")]
  Api(String),

  /// Response body could not be parsed
  #[error("Parse error: {0}")]
  Parse(String),
}

/// Result type alias for iex-* crates
pub type Result<T> = std::result::Result<T, Error>;
