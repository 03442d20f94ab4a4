// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Network selection and per-network address parameters
//!
//! This module provides type-safe network identifiers for Litecoin-like
//! chains, carrying the version bytes and bech32 prefixes that address
//! parsing depends on.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Supported networks
///
/// The constants carried by each variant are litecore's network parameters:
/// base58check version bytes for pay-to-pubkey-hash and pay-to-script-hash
/// addresses (including the pre-fork script-hash versions still seen in the
/// wild) and the bech32 human-readable part for segwit addresses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Network {
    /// The production network
    #[default]
    Livenet,
    /// The test network
    Testnet,
}

impl Network {
    /// Returns the lowercase name of the network
    pub const fn name(self) -> &'static str {
        match self {
            Self::Livenet => "livenet",
            Self::Testnet => "testnet",
        }
    }

    /// Returns all supported networks
    pub const fn all() -> &'static [Self] {
        &[Self::Livenet, Self::Testnet]
    }

    /// Returns whether this is the test network
    pub const fn is_testnet(self) -> bool {
        matches!(self, Self::Testnet)
    }

    /// Returns the base58check version byte of pay-to-pubkey-hash addresses
    pub const fn pubkeyhash_version(self) -> u8 {
        match self {
            Self::Livenet => 0x30,
            Self::Testnet => 0x6F,
        }
    }

    /// Returns the base58check version byte of pay-to-script-hash addresses
    pub const fn scripthash_version(self) -> u8 {
        match self {
            Self::Livenet => 0x32,
            Self::Testnet => 0x3A,
        }
    }

    /// Returns the deprecated pay-to-script-hash version byte
    ///
    /// Addresses with this version predate the script-hash version change
    /// and are still accepted on both networks.
    pub const fn legacy_scripthash_version(self) -> u8 {
        match self {
            Self::Livenet => 0x05,
            Self::Testnet => 0xC4,
        }
    }

    /// Returns the bech32 human-readable part of segwit addresses
    pub const fn bech32_hrp(self) -> &'static str {
        match self {
            Self::Livenet => "ltc",
            Self::Testnet => "tltc",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Network {
    type Err = NetworkParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "livenet" | "mainnet" => Ok(Self::Livenet),
            "testnet" => Ok(Self::Testnet),
            _ => Err(NetworkParseError::UnknownNetwork(s.to_string())),
        }
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NetworkVisitor;

        impl serde::de::Visitor<'_> for NetworkVisitor {
            type Value = Network;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a network name (livenet, testnet)")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Network::from_str(value).map_err(|_| {
                    E::invalid_value(
                        serde::de::Unexpected::Str(value),
                        &"a supported network name (livenet, testnet)",
                    )
                })
            }
        }

        deserializer.deserialize_str(NetworkVisitor)
    }
}

/// Error type for network name parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkParseError {
    /// Unknown network name
    #[error("unsupported network: {0}. Supported networks are: livenet, testnet")]
    UnknownNetwork(String),
}
