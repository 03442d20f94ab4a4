// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Serialized raw transactions
//!
//! [`RawTransaction`] wraps the hexadecimal rendering of a serialized
//! transaction. Construction from a string keeps the input byte-for-byte, so
//! a broadcast sends exactly what the caller validated.

use std::{fmt, str::FromStr};

/// A validated hexadecimal rendering of a serialized transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTransaction(Box<str>);

impl RawTransaction {
    /// Create a `RawTransaction` from already-serialized hex
    ///
    /// The string is stored unchanged; only well-formedness is checked.
    pub fn from_hex(s: impl Into<String>) -> Result<Self, TransactionError> {
        let s = s.into();
        if s.is_empty() {
            return Err(TransactionError::Empty);
        }
        hex::decode(&s)?;
        Ok(Self(s.into_boxed_str()))
    }

    /// Create a `RawTransaction` by hex-encoding serialized bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TransactionError> {
        if bytes.is_empty() {
            return Err(TransactionError::Empty);
        }
        Ok(Self(hex::encode(bytes).into_boxed_str()))
    }

    /// Get the hexadecimal rendering
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RawTransaction {
    type Err = TransactionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl AsRef<str> for RawTransaction {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Error type for raw transaction construction
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// The transaction payload is empty
    #[error("transaction payload is empty")]
    Empty,
    /// The input is not valid hexadecimal
    #[error("invalid transaction hex: {0}")]
    Hex(#[from] hex::FromHexError),
}
