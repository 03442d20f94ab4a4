// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error types of the Insight client

use thiserror::Error;

/// Errors returned by the Insight client
///
/// Every operation fails with exactly one of these. Non-200 responses are
/// always reported as [`InsightError::Api`] with the status and the raw body,
/// regardless of which endpoint produced them.
#[derive(Debug, Error)]
pub enum InsightError {
    /// HTTP transport failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a status other than 200
    #[error("insight API error: {status} - {body}")]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// Raw response body
        body: String,
    },

    /// A response body could not be decoded as the expected JSON
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A caller-supplied argument was rejected before any request was sent
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A decoded unspent output record could not be mapped to the canonical type
    #[error("invalid unspent output record: {0}")]
    InvalidUtxoRecord(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}
