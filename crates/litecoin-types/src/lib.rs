// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Litecoin value types for the Insight explorer client
//!
//! This crate provides the validated domain types shared across the Insight
//! client workspace: network parameters, on-chain addresses, transaction and
//! block identifiers, raw transaction payloads, and the canonical
//! unspent-output representation. Every type validates its invariants at
//! construction, so holding a value means holding a well-formed one.

pub mod address;
pub mod ids;
pub mod network;
pub mod transaction;
pub mod utxo;

pub use address::{Address, AddressError, AddressKind};
pub use ids::{BlockHash, IdError, Txid};
pub use network::{Network, NetworkParseError};
pub use transaction::{RawTransaction, TransactionError};
pub use utxo::{UnspentOutput, UtxoError};
