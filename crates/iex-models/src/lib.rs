//! # iex-models
//!
//! Data models for IEX Cloud API responses.
//!
//! Only the batch endpoint is modelled: quote, key stats and advanced stats,
//! which is everything the screening strategies consume.
//!
//! ## Usage
//!
//! ```ignore
//! use iex_models::BatchResponse;
//!
//! let batch: BatchResponse = serde_json::from_str(&response_json)?;
//! let price = batch.get("AAPL").and_then(|d| d.latest_price());
//! ```

#![warn(clippy::all)]

pub mod batch;
pub mod common;

pub use batch::*;
pub use common::*;
