// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Client for the Insight blockchain explorer HTTP API
//!
//! This crate provides a stateless client for Insight deployments serving
//! Litecoin-like networks. One [`insight::InsightClient`] talks to one
//! endpoint; every operation maps to a single HTTP request and resolves to a
//! single `Result`.
//!
//! # Architecture
//!
//! - **Client**: [`insight::InsightClient`] with its configuration and the
//!   request parameter types
//! - **Models**: [`address_info::AddressInfo`] - the validated address
//!   summary built from Insight responses
//! - **Errors**: [`error::InsightError`] - one error enum for transport,
//!   API, decoding, and argument failures
//!
//! # Example
//!
//! ```no_run
//! use insight_client::{InsightClient, UtxoQuery};
//! use litecoin_types::{Address, Network};
//!
//! # async fn example() -> Result<(), insight_client::InsightError> {
//! let client = InsightClient::for_network(Network::Livenet)?;
//! let address: Address = "LKKHMBjCU89fyFNgSRprDoD8Jb25N8uWvd"
//!     .parse()
//!     .map_err(|e| insight_client::InsightError::InvalidArgument(format!("{e}")))?;
//! let utxos = client
//!     .get_utxos(UtxoQuery::from(address).with_minconf(6))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod address_info;
pub mod error;
pub mod insight;

pub use address_info::*;
pub use error::*;
pub use insight::*;
