//! # iex-client
//!
//! A small IEX Cloud API client for the batch quote/stats endpoint.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use iex_client::IexClient;
//! use iex_core::{Config, DataType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = IexClient::new(config)?;
//!
//!     let batch = client
//!         .market()
//!         .batch("AAPL,MSFT", &[DataType::Quote, DataType::Stats])
//!         .await?;
//!     println!("{} symbols returned", batch.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, iex_core::Error>`. Transport failures,
//! error statuses and malformed JSON are not retried.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export the main client and common types
pub use client::IexClient;
pub use endpoints::market::MarketEndpoints;
pub use iex_core::{Config, DataType, Error, Result};
pub use iex_models::*;
