// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Insight block explorer API integration
//!
//! This module provides the HTTP client for the Insight REST API served by
//! Litecoin block explorers. Every operation is a stateless request/response
//! cycle; the client holds nothing but its connection pool and configuration,
//! so one instance can be shared freely across tasks.

use std::time::Duration;

use litecoin_types::{Address, BlockHash, Network, RawTransaction, Txid, UnspentOutput};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::{address_info::AddressInfo, error::InsightError};

/// Public Insight server for the live network
pub const LIVENET_URL: &str = "https://insight.litecore.io";

/// Public Insight server for the test network
pub const TESTNET_URL: &str = "https://testnet.litecore.io";

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Satoshis per whole coin, for servers that only report fractional amounts
const SATOSHIS_PER_COIN: f64 = 100_000_000.0;

/// Configuration for the Insight API client
#[derive(Debug, Clone)]
pub struct InsightConfig {
    /// Base URL of the Insight server, without the `/api` suffix
    pub base_url: String,
    /// Network the server indexes
    pub network: Network,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl InsightConfig {
    /// Configuration for the public Insight server of `network`
    pub fn for_network(network: Network) -> Self {
        let base_url = match network {
            Network::Livenet => LIVENET_URL,
            Network::Testnet => TESTNET_URL,
        };
        Self {
            base_url: base_url.to_string(),
            network,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Configuration for a self-hosted Insight server
    pub fn new(base_url: impl Into<String>, network: Network) -> Self {
        Self {
            base_url: base_url.into(),
            network,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self::for_network(Network::default())
    }
}

/// Insight API client
#[derive(Debug, Clone)]
pub struct InsightClient {
    client: Client,
    config: InsightConfig,
}

/// Parameters for [`InsightClient::get_utxos`]
///
/// Converts from a single [`Address`] or a `Vec<Address>` for the common
/// cases; use [`UtxoQuery::with_minconf`] to drop young outputs.
#[derive(Debug, Clone)]
pub struct UtxoQuery {
    addresses: Vec<Address>,
    minconf: u32,
}

impl UtxoQuery {
    /// Query the unspent outputs of `addresses`
    pub fn new(addresses: Vec<Address>) -> Self {
        Self {
            addresses,
            minconf: 0,
        }
    }

    /// Only keep outputs with at least `minconf` confirmations
    #[must_use]
    pub fn with_minconf(mut self, minconf: u32) -> Self {
        self.minconf = minconf;
        self
    }

    /// Addresses to query
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    /// Confirmation threshold, zero accepts mempool outputs
    pub const fn minconf(&self) -> u32 {
        self.minconf
    }
}

impl From<Address> for UtxoQuery {
    fn from(address: Address) -> Self {
        Self::new(vec![address])
    }
}

impl From<Vec<Address>> for UtxoQuery {
    fn from(addresses: Vec<Address>) -> Self {
        Self::new(addresses)
    }
}

/// Parameters for [`InsightClient::address`]
///
/// `from` and `to` page through the transaction id list; both are optional
/// and forwarded to the server untouched.
#[derive(Debug, Clone)]
pub struct AddressQuery {
    address: Address,
    from: Option<u64>,
    to: Option<u64>,
}

impl AddressQuery {
    /// Summarize `address` with its full transaction history
    pub fn new(address: Address) -> Self {
        Self {
            address,
            from: None,
            to: None,
        }
    }

    /// Start the transaction id list at index `from`
    #[must_use]
    pub fn with_from(mut self, from: u64) -> Self {
        self.from = Some(from);
        self
    }

    /// End the transaction id list at index `to`
    #[must_use]
    pub fn with_to(mut self, to: u64) -> Self {
        self.to = Some(to);
        self
    }

    /// Address to summarize
    pub const fn address(&self) -> &Address {
        &self.address
    }
}

impl From<Address> for AddressQuery {
    fn from(address: Address) -> Self {
        Self::new(address)
    }
}

/// Unspent output record as returned by Insight's `/api/addrs/utxo` endpoint
///
/// This is the raw wire shape. [`InsightClient::get_utxos`] converts it into
/// [`UnspentOutput`], which is where validation happens.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtxoRecord {
    /// Address holding the output
    pub address: String,
    /// Id of the transaction carrying the output
    pub txid: String,
    /// Output index within the transaction
    pub vout: u32,
    /// Locking script in hexadecimal
    pub script_pub_key: String,
    /// Value in satoshis, preferred when present
    pub satoshis: Option<u64>,
    /// Value in whole coins, older servers report only this
    pub amount: Option<f64>,
    /// Number of confirmations, zero while in the mempool
    #[serde(default)]
    pub confirmations: u64,
    /// Height of the containing block
    pub height: Option<u64>,
    /// Unix timestamp of the containing block
    pub ts: Option<u64>,
}

#[derive(Debug, Serialize)]
struct UtxoRequest {
    addrs: String,
}

#[derive(Debug, Serialize)]
struct BroadcastRequest<'a> {
    rawtx: &'a str,
}

#[derive(Debug, Deserialize)]
struct BroadcastResponse {
    #[serde(default)]
    txid: Option<Txid>,
}

/// Synchronization state as returned by Insight's `/api/sync` endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatus {
    /// Current state, `"finished"` once the index is caught up
    pub status: String,
    /// Chain height the backing node reports
    pub block_chain_height: Option<u64>,
    /// Percentage of the chain indexed so far
    pub sync_percentage: Option<f64>,
    /// Height the index has reached
    pub height: Option<u64>,
    /// Error reported by the indexer, if any
    pub error: Option<String>,
    /// Kind of backing node
    #[serde(rename = "type")]
    pub node_type: Option<String>,
}

impl SyncStatus {
    /// Whether the server reports a fully synchronized index
    pub fn is_finished(&self) -> bool {
        self.status == "finished"
    }
}

impl InsightClient {
    /// Create a new Insight client
    ///
    /// Trailing slashes on the base URL are stripped so endpoint paths can be
    /// appended verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty or unparseable, or if the
    /// HTTP client cannot be created
    pub fn new(config: InsightConfig) -> Result<Self, InsightError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(InsightError::Config(
                "base URL cannot be empty".to_string(),
            ));
        }
        Url::parse(&base_url)
            .map_err(|e| InsightError::Config(format!("invalid base URL {base_url:?}: {e}")))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("insight-client/0.1.0")
            .build()
            .map_err(InsightError::Http)?;

        Ok(Self {
            client,
            config: InsightConfig { base_url, ..config },
        })
    }

    /// Create a client for the public Insight server of `network`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created
    pub fn for_network(network: Network) -> Result<Self, InsightError> {
        Self::new(InsightConfig::for_network(network))
    }

    /// Base URL requests are issued against, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Network this client is configured for
    pub const fn network(&self) -> Network {
        self.config.network
    }

    /// Fetch a transaction by id
    ///
    /// The transaction shape served by Insight is rich and varies between
    /// server versions, so the decoded JSON is returned as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if `txid` is not a well-formed transaction id, the
    /// request fails, or the server responds with an error status
    pub async fn get_transaction(&self, txid: &str) -> Result<Value, InsightError> {
        let txid = txid
            .parse::<Txid>()
            .map_err(|e| InsightError::InvalidArgument(format!("transaction id {txid:?}: {e}")))?;

        let body = self.request_get(&format!("/api/tx/{txid}")).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch the unspent outputs of one or more addresses
    ///
    /// Outputs below the query's confirmation threshold are dropped; the
    /// rest are returned in server order as validated [`UnspentOutput`]s.
    ///
    /// # Errors
    ///
    /// Returns an error if the query is empty, the request fails, the server
    /// responds with an error status, or a returned record cannot be
    /// converted into an [`UnspentOutput`]
    pub async fn get_utxos(
        &self,
        query: impl Into<UtxoQuery>,
    ) -> Result<Vec<UnspentOutput>, InsightError> {
        let query = query.into();
        if query.addresses.is_empty() {
            return Err(InsightError::InvalidArgument(
                "no addresses to query unspent outputs for".to_string(),
            ));
        }

        let addrs = query
            .addresses
            .iter()
            .map(Address::as_str)
            .collect::<Vec<_>>()
            .join(",");

        debug!(
            addrs,
            minconf = query.minconf,
            "fetching unspent outputs from insight"
        );

        let body = self
            .request_post("/api/addrs/utxo", &UtxoRequest { addrs })
            .await?;
        let records: Vec<UtxoRecord> = serde_json::from_str(&body)?;

        records
            .iter()
            .filter(|record| record.confirmations >= u64::from(query.minconf))
            .map(|record| self.convert_utxo(record))
            .collect()
    }

    /// Broadcast a raw transaction
    ///
    /// Returns the id the server assigned to the transaction, or `None` when
    /// the server acknowledged the broadcast without reporting one.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the
    /// transaction
    pub async fn broadcast(&self, transaction: &RawTransaction) -> Result<Option<Txid>, InsightError> {
        debug!(
            bytes = transaction.as_str().len() / 2,
            "broadcasting raw transaction through insight"
        );

        let body = self
            .request_post(
                "/api/tx/send",
                &BroadcastRequest {
                    rawtx: transaction.as_str(),
                },
            )
            .await?;

        if body.trim().is_empty() {
            return Ok(None);
        }
        let response: BroadcastResponse = serde_json::from_str(&body)?;
        Ok(response.txid)
    }

    /// Fetch a validated summary of an address
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server responds with an
    /// error status, or the summary fails validation
    pub async fn address(&self, query: impl Into<AddressQuery>) -> Result<AddressInfo, InsightError> {
        let query = query.into();
        let url = self.url(&format!("/api/addr/{}", query.address.as_str()));

        debug!(
            url,
            from = query.from,
            to = query.to,
            "fetching address summary from insight"
        );

        let mut request = self.client.get(&url);
        if let Some(from) = query.from {
            request = request.query(&[("from", from)]);
        }
        if let Some(to) = query.to {
            request = request.query(&[("to", to)]);
        }

        let body = self.send(request).await?;
        AddressInfo::from_insight(&body)
    }

    /// Fetch the list of recent blocks
    ///
    /// The block list shape varies between server versions, so the decoded
    /// JSON is returned as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server responds with an
    /// error status
    pub async fn get_blocks(&self) -> Result<Value, InsightError> {
        // Insight serves the block index under a trailing slash only
        let body = self.request_get("/api/blocks/").await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch a block by hash
    ///
    /// # Errors
    ///
    /// Returns an error if `hash` is not a well-formed block hash, the
    /// request fails, or the server responds with an error status
    pub async fn get_block(&self, hash: &str) -> Result<Value, InsightError> {
        let hash = hash
            .parse::<BlockHash>()
            .map_err(|e| InsightError::InvalidArgument(format!("block hash {hash:?}: {e}")))?;

        let body = self.request_get(&format!("/api/block/{hash}")).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch the synchronization state of the server
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server responds with an
    /// error status
    pub async fn sync_status(&self) -> Result<SyncStatus, InsightError> {
        let body = self.request_get("/api/sync").await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    async fn request_get(&self, path: &str) -> Result<String, InsightError> {
        let url = self.url(path);
        debug!(url, "issuing GET request to insight");
        self.send(self.client.get(&url)).await
    }

    async fn request_post<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<String, InsightError> {
        let url = self.url(path);
        debug!(url, "issuing POST request to insight");
        self.send(self.client.post(&url).json(body)).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<String, InsightError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::OK {
            Ok(body)
        } else {
            warn!("insight API error: {} - {}", status.as_u16(), body);
            Err(InsightError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Convert a wire record into a validated unspent output
    ///
    /// The `satoshis` field wins when present; otherwise the value is derived
    /// from the fractional `amount`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn convert_utxo(&self, record: &UtxoRecord) -> Result<UnspentOutput, InsightError> {
        let address = record.address.parse::<Address>().map_err(|e| {
            InsightError::InvalidUtxoRecord(format!("address {:?}: {e}", record.address))
        })?;
        let txid = record
            .txid
            .parse::<Txid>()
            .map_err(|e| InsightError::InvalidUtxoRecord(format!("txid {:?}: {e}", record.txid)))?;

        let satoshis = match (record.satoshis, record.amount) {
            (Some(satoshis), _) => satoshis,
            (None, Some(amount)) if amount >= 0.0 => (amount * SATOSHIS_PER_COIN).round() as u64,
            (None, Some(amount)) => {
                return Err(InsightError::InvalidUtxoRecord(format!(
                    "negative amount {amount} for output {}:{}",
                    record.txid, record.vout
                )));
            }
            (None, None) => {
                return Err(InsightError::InvalidUtxoRecord(format!(
                    "no value reported for output {}:{}",
                    record.txid, record.vout
                )));
            }
        };

        UnspentOutput::new(
            address,
            txid,
            record.vout,
            record.script_pub_key.as_str(),
            satoshis,
        )
        .map_err(|e| InsightError::InvalidUtxoRecord(e.to_string()))
    }
}
