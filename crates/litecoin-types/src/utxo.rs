// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Canonical unspent transaction outputs

use serde::Serialize;

use crate::{address::Address, ids::Txid};

/// An unspent transaction output in its canonical form
///
/// Values are satoshis. The locking script is kept as validated hex; an
/// empty script is allowed. Serialization uses the explorer-style field
/// names (`scriptPubKey`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnspentOutput {
    address: Address,
    txid: Txid,
    vout: u32,
    script_pub_key: String,
    satoshis: u64,
}

impl UnspentOutput {
    /// Create an `UnspentOutput`, validating the locking script hex
    pub fn new(
        address: Address,
        txid: Txid,
        vout: u32,
        script_pub_key: impl Into<String>,
        satoshis: u64,
    ) -> Result<Self, UtxoError> {
        let script_pub_key = script_pub_key.into();
        hex::decode(&script_pub_key)?;
        Ok(Self {
            address,
            txid,
            vout,
            script_pub_key,
            satoshis,
        })
    }

    /// Address holding this output
    pub const fn address(&self) -> &Address {
        &self.address
    }

    /// Id of the funding transaction
    pub const fn txid(&self) -> &Txid {
        &self.txid
    }

    /// Output index within the funding transaction
    pub const fn vout(&self) -> u32 {
        self.vout
    }

    /// Locking script in hexadecimal form
    pub fn script_pub_key(&self) -> &str {
        &self.script_pub_key
    }

    /// Output value in satoshis
    pub const fn satoshis(&self) -> u64 {
        self.satoshis
    }
}

/// Error type for unspent output construction
#[derive(Debug, thiserror::Error)]
pub enum UtxoError {
    /// The locking script is not valid hexadecimal
    #[error("invalid script hex: {0}")]
    Script(#[from] hex::FromHexError),
}
