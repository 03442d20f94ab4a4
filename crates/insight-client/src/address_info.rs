// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Validated address summaries
//!
//! This module provides [`AddressInfo`], the immutable model built from
//! Insight's address endpoint, and [`AddressSummary`], the wire shape it is
//! decoded from. Rather than trusting the remote field names and formats
//! downstream, `AddressInfo` validates everything at construction: once a
//! value exists, its address and transaction ids are well-formed and its
//! amounts are integers.

use litecoin_types::{Address, Txid};
use serde::{Deserialize, Serialize};

use crate::error::InsightError;

/// Address summary as returned by Insight's `/api/addr/{address}` endpoint
///
/// This is the raw wire shape; use [`AddressInfo::from_summary`] to obtain
/// the validated model.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressSummary {
    /// The address in its string form
    pub addr_str: String,
    /// Confirmed balance in satoshis
    pub balance_sat: u64,
    /// Total received in satoshis
    pub total_received_sat: u64,
    /// Total sent in satoshis
    pub total_sent_sat: u64,
    /// Unconfirmed balance delta in satoshis, negative while outgoing
    /// transactions await confirmation
    pub unconfirmed_balance_sat: i64,
    /// Ids of the transactions touching this address
    pub transactions: Vec<String>,
}

/// A validated, immutable summary of an address
///
/// Field meanings follow the explorer: `balance` is the confirmed balance,
/// `unconfirmed_balance` the signed delta of pending transactions, and
/// `transaction_ids` every transaction touching the address, newest first as
/// served. All amounts are satoshis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInfo {
    address: Address,
    balance: u64,
    total_sent: u64,
    total_received: u64,
    unconfirmed_balance: i64,
    transaction_ids: Vec<Txid>,
}

impl AddressInfo {
    /// Create an `AddressInfo` from canonical fields
    ///
    /// Every transaction id must be a 64-character hexadecimal string;
    /// otherwise construction fails with
    /// [`InsightError::InvalidArgument`].
    pub fn new(
        address: Address,
        balance: u64,
        total_sent: u64,
        total_received: u64,
        unconfirmed_balance: i64,
        transaction_ids: Vec<String>,
    ) -> Result<Self, InsightError> {
        let transaction_ids = transaction_ids
            .into_iter()
            .map(|id| {
                id.parse::<Txid>().map_err(|e| {
                    InsightError::InvalidArgument(format!("transaction id {id:?}: {e}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            address,
            balance,
            total_sent,
            total_received,
            unconfirmed_balance,
            transaction_ids,
        })
    }

    /// Build an `AddressInfo` from a raw Insight response body
    ///
    /// Malformed JSON is reported as [`InsightError::Json`], never papered
    /// over with defaults.
    pub fn from_insight(json: &str) -> Result<Self, InsightError> {
        let summary: AddressSummary = serde_json::from_str(json)?;
        Self::from_summary(summary)
    }

    /// Build an `AddressInfo` from an already-decoded summary
    pub fn from_summary(summary: AddressSummary) -> Result<Self, InsightError> {
        let address = summary.addr_str.parse::<Address>().map_err(|e| {
            InsightError::InvalidArgument(format!("address {:?}: {e}", summary.addr_str))
        })?;
        Self::new(
            address,
            summary.balance_sat,
            summary.total_sent_sat,
            summary.total_received_sat,
            summary.unconfirmed_balance_sat,
            summary.transactions,
        )
    }

    /// The summarized address
    pub const fn address(&self) -> &Address {
        &self.address
    }

    /// Confirmed balance in satoshis
    pub const fn balance(&self) -> u64 {
        self.balance
    }

    /// Total sent in satoshis
    pub const fn total_sent(&self) -> u64 {
        self.total_sent
    }

    /// Total received in satoshis
    pub const fn total_received(&self) -> u64 {
        self.total_received
    }

    /// Unconfirmed balance delta in satoshis, may be negative
    pub const fn unconfirmed_balance(&self) -> i64 {
        self.unconfirmed_balance
    }

    /// Ids of the transactions touching this address
    pub fn transaction_ids(&self) -> &[Txid] {
        &self.transaction_ids
    }
}
