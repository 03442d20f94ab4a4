// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction and block identifiers
//!
//! Both identifiers are 32-byte hashes rendered as 64 hexadecimal characters.
//! The wrappers validate the rendering at construction and are immutable
//! afterwards; case is preserved as given and comparison is textual.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

/// Length of a hash identifier in hexadecimal characters
const HASH_HEX_LEN: usize = 64;

fn validate_hash_hex(s: &str) -> Result<(), IdError> {
    if s.len() != HASH_HEX_LEN {
        return Err(IdError::Length {
            expected: HASH_HEX_LEN,
            found: s.len(),
        });
    }
    if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(IdError::NotHex(s.to_string()));
    }
    Ok(())
}

/// A validated transaction id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Txid(Box<str>);

impl Txid {
    /// Create a `Txid` from a 64-character hexadecimal string
    pub fn new(s: impl Into<String>) -> Result<Self, IdError> {
        let s = s.into();
        validate_hash_hex(&s)?;
        Ok(Self(s.into_boxed_str()))
    }

    /// Get the hexadecimal rendering
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Txid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Txid {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Txid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Txid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TxidVisitor;

        impl serde::de::Visitor<'_> for TxidVisitor {
            type Value = Txid;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a 64-character hexadecimal transaction id")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Txid::from_str(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(TxidVisitor)
    }
}

/// A validated block hash
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BlockHash(Box<str>);

impl BlockHash {
    /// Create a `BlockHash` from a 64-character hexadecimal string
    pub fn new(s: impl Into<String>) -> Result<Self, IdError> {
        let s = s.into();
        validate_hash_hex(&s)?;
        Ok(Self(s.into_boxed_str()))
    }

    /// Get the hexadecimal rendering
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BlockHash {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for BlockHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for BlockHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BlockHashVisitor;

        impl serde::de::Visitor<'_> for BlockHashVisitor {
            type Value = BlockHash;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a 64-character hexadecimal block hash")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                BlockHash::from_str(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(BlockHashVisitor)
    }
}

/// Error type for identifier parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// Wrong number of characters
    #[error("expected {expected} hexadecimal characters, found {found}")]
    Length {
        /// Required length
        expected: usize,
        /// Length of the rejected input
        found: usize,
    },
    /// Input contains a non-hexadecimal character
    #[error("not a hexadecimal string: {0:?}")]
    NotHex(String),
}
