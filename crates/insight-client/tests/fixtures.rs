// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0
#![allow(missing_docs, dead_code, clippy::cast_precision_loss)]

//! Insight API test fixtures
//!
//! Provides canned responses in the explorer's wire shape and mock setup
//! helpers for the client tests.

use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// Livenet pay-to-pubkey-hash address
pub const P2PKH_ADDRESS: &str = "LKKHMBjCU89fyFNgSRprDoD8Jb25N8uWvd";
/// Livenet pay-to-script-hash address
pub const P2SH_ADDRESS: &str = "M7zVKQKmtV5Rc7erVGVVC3khZbXxsS5HEX";
/// Livenet segwit address
pub const SEGWIT_ADDRESS: &str = "ltc1qqypqxpq9qcrsszg2pvxq6rs0zqg3yyc5dyg36p";

pub const TXID_A: &str = "b39dd6c1e4dd57aeb2167bfae9b46ab86e0ea0a1e5fc6a3ba6c23dee40e6cc26";
pub const TXID_B: &str = "ad8f571a16d01a4a27e1d29ea6b23bb2b394cfdd86df613e5b8795d0e050c7ef";
pub const BLOCK_HASH: &str = "0000000000000003b7e9a0c8d5f24e6a1b8c9d0e2f3a4b5c6d7e8f9012345678";
pub const PREV_BLOCK_HASH: &str =
    "00000000000000016a2c3f4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f7081";

/// A structurally complete one-input one-output transaction
pub const RAW_TX: &str = "0100000001b39dd6c1e4dd57aeb2167bfae9b46ab86e0ea0a1e5fc6a3ba6c23dee40e6cc260000000000ffffffff0150c30000000000001976a914010203040506070809101112131415161718192088ac00000000";

/// Pay-to-pubkey-hash locking script in hexadecimal
pub const SCRIPT: &str = "76a914010203040506070809101112131415161718192088ac";

/// Canned Insight API responses
#[derive(Debug)]
pub struct InsightFixture;

impl InsightFixture {
    /// Mount happy-path mocks for the whole API surface
    pub async fn setup_explorer_mocks(mock_server: &MockServer) {
        Mock::given(method("GET"))
            .and(path(format!("/api/tx/{TXID_A}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(Self::transaction(TXID_A)))
            .mount(mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/api/addrs/utxo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Self::utxo_set()))
            .mount(mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/api/tx/send"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"txid": TXID_B})))
            .mount(mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path(format!("/api/addr/{P2PKH_ADDRESS}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(Self::address_summary()))
            .mount(mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/blocks/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Self::block_list()))
            .mount(mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path(format!("/api/block/{BLOCK_HASH}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(Self::block(BLOCK_HASH)))
            .mount(mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/sync"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Self::sync_finished()))
            .mount(mock_server)
            .await;
    }

    /// A transaction in the explorer's verbose shape
    pub fn transaction(txid: &str) -> Value {
        json!({
            "txid": txid,
            "version": 1,
            "locktime": 0,
            "vin": [{
                "txid": TXID_B,
                "vout": 0,
                "sequence": 4_294_967_295_u64,
                "n": 0,
                "addr": P2PKH_ADDRESS,
                "valueSat": 100_000,
                "value": 0.001
            }],
            "vout": [{
                "value": "0.00050000",
                "n": 0,
                "scriptPubKey": {
                    "hex": SCRIPT,
                    "type": "pubkeyhash",
                    "addresses": [P2SH_ADDRESS]
                },
                "spentTxId": null
            }],
            "blockhash": BLOCK_HASH,
            "blockheight": 2_750_001,
            "confirmations": 42,
            "time": 1_724_668_800,
            "blocktime": 1_724_668_800,
            "valueOut": 0.0005,
            "size": 191,
            "valueIn": 0.001,
            "fees": 0.0005
        })
    }

    /// An unspent output record
    pub fn utxo(address: &str, txid: &str, vout: u32, satoshis: u64, confirmations: u64) -> Value {
        json!({
            "address": address,
            "txid": txid,
            "vout": vout,
            "scriptPubKey": SCRIPT,
            "amount": satoshis as f64 / 100_000_000.0,
            "satoshis": satoshis,
            "height": 2_750_000,
            "confirmations": confirmations
        })
    }

    /// Three confirmed unspent outputs across the standard addresses
    pub fn utxo_set() -> Value {
        json!([
            Self::utxo(P2PKH_ADDRESS, TXID_A, 0, 50_000, 120),
            Self::utxo(P2SH_ADDRESS, TXID_B, 1, 1_500_000, 7),
            Self::utxo(SEGWIT_ADDRESS, TXID_A, 2, 250_000, 45),
        ])
    }

    /// Address summary for [`P2PKH_ADDRESS`]
    ///
    /// Field names follow the explorer, including its `txApperances`
    /// spelling.
    pub fn address_summary() -> Value {
        json!({
            "addrStr": P2PKH_ADDRESS,
            "balance": 0.000_005,
            "balanceSat": 500,
            "totalReceived": 0.000_015,
            "totalReceivedSat": 1500,
            "totalSent": 0.000_01,
            "totalSentSat": 1000,
            "unconfirmedBalance": 0,
            "unconfirmedBalanceSat": 0,
            "unconfirmedTxApperances": 0,
            "txApperances": 2,
            "transactions": [TXID_A, TXID_B]
        })
    }

    /// Most recent page of the block index
    pub fn block_list() -> Value {
        json!({
            "blocks": [
                {
                    "height": 2_750_001,
                    "size": 14_123,
                    "hash": BLOCK_HASH,
                    "time": 1_724_668_800,
                    "txlength": 12,
                    "poolInfo": {}
                },
                {
                    "height": 2_750_000,
                    "size": 2_973,
                    "hash": PREV_BLOCK_HASH,
                    "time": 1_724_668_650,
                    "txlength": 3,
                    "poolInfo": {}
                }
            ],
            "length": 2,
            "pagination": {
                "current": "2024-08-26",
                "isToday": true,
                "more": false
            }
        })
    }

    /// A block in the explorer's shape
    pub fn block(hash: &str) -> Value {
        json!({
            "hash": hash,
            "size": 14_123,
            "height": 2_750_001,
            "version": 536_870_912,
            "merkleroot": TXID_A,
            "tx": [TXID_A, TXID_B],
            "time": 1_724_668_800,
            "nonce": 3_604_201_488_u64,
            "bits": "1a01c3a9",
            "difficulty": 28_415_947.51,
            "previousblockhash": PREV_BLOCK_HASH,
            "confirmations": 10,
            "reward": 6.25,
            "isMainChain": true,
            "poolInfo": {}
        })
    }

    /// A fully synchronized server
    pub fn sync_finished() -> Value {
        json!({
            "status": "finished",
            "blockChainHeight": 2_750_001,
            "syncPercentage": 100,
            "height": 2_750_001,
            "error": null,
            "type": "bitcore node"
        })
    }

    /// A server still building its index
    pub fn sync_in_progress() -> Value {
        json!({
            "status": "syncing",
            "blockChainHeight": 2_750_001,
            "syncPercentage": 42,
            "height": 1_155_000,
            "error": null,
            "type": "bitcore node"
        })
    }
}
