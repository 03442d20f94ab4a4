// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Validated on-chain addresses
//!
//! This module provides [`Address`], a wrapper that guarantees address
//! validity at construction. Parsing recognizes both encodings in use on
//! Litecoin-like networks:
//!
//! - base58check: a version byte, a 20-byte hash, and a 4-byte double-SHA256
//!   checksum. The version byte selects the network and the address kind,
//!   including the deprecated script-hash versions.
//! - bech32/bech32m segwit: the network's human-readable part followed by a
//!   witness version and program. Witness v0 programs of 20 and 32 bytes and
//!   v1 programs of 32 bytes are accepted.
//!
//! The network is inferred from the encoding, never trusted from context, so
//! an `Address` value always belongs to exactly one supported network.

use std::{fmt, str::FromStr};

use bech32::{Hrp, segwit};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::network::Network;

/// Decoded length of a base58check address: version + hash160 + checksum
const BASE58_PAYLOAD_LEN: usize = 25;
/// Length of the base58check checksum suffix
const CHECKSUM_LEN: usize = 4;

/// The script template an address pays to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressKind {
    /// Pay-to-pubkey-hash
    P2pkh,
    /// Pay-to-script-hash
    P2sh,
    /// Pay-to-witness-pubkey-hash (segwit v0, 20-byte program)
    P2wpkh,
    /// Pay-to-witness-script-hash (segwit v0, 32-byte program)
    P2wsh,
    /// Pay-to-taproot (segwit v1, 32-byte program)
    P2tr,
}

impl AddressKind {
    /// Returns the litecore-style name of the script template
    pub const fn name(self) -> &'static str {
        match self {
            Self::P2pkh => "pubkeyhash",
            Self::P2sh => "scripthash",
            Self::P2wpkh => "witnesspubkeyhash",
            Self::P2wsh => "witnessscripthash",
            Self::P2tr => "taproot",
        }
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A validated address on one of the supported networks
///
/// The original string is kept unchanged, so formatting an `Address` always
/// reproduces the caller's input. There are no mutators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    text: Box<str>,
    network: Network,
    kind: AddressKind,
}

impl Address {
    /// Get the address in its string form
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the network this address belongs to
    pub const fn network(&self) -> Network {
        self.network
    }

    /// Returns the script template this address pays to
    pub const fn kind(&self) -> AddressKind {
        self.kind
    }

    /// Whether `s` parses as an address on any supported network
    pub fn is_valid(s: &str) -> bool {
        s.parse::<Self>().is_ok()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AddressError::Empty);
        }
        let (network, kind) = if is_bech32_candidate(s) {
            // the prefix test is case-insensitive, so rare base58check
            // addresses match it too; keep the bech32 error when both
            // decodings fail
            parse_bech32(s).or_else(|err| parse_base58(s).map_err(|_| err))?
        } else {
            parse_base58(s)?
        };
        Ok(Self {
            text: s.into(),
            network,
            kind,
        })
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AddressVisitor;

        impl serde::de::Visitor<'_> for AddressVisitor {
            type Value = Address;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a base58check or bech32 address string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Address::from_str(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(AddressVisitor)
    }
}

/// Whether the string carries a known bech32 prefix
///
/// The test ignores case because bech32 permits all-uppercase strings. A
/// base58check address can spell the same prefix (`LTc1...`), so parsing
/// falls back to base58 when the bech32 decode fails.
fn is_bech32_candidate(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    Network::all().iter().any(|network| {
        lower
            .strip_prefix(network.bech32_hrp())
            .is_some_and(|rest| rest.starts_with('1'))
    })
}

fn checksum(payload: &[u8]) -> [u8; 4] {
    let digest = Sha256::digest(Sha256::digest(payload));
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}

fn parse_base58(s: &str) -> Result<(Network, AddressKind), AddressError> {
    let raw = bs58::decode(s)
        .into_vec()
        .map_err(|_| AddressError::Base58)?;
    if raw.len() != BASE58_PAYLOAD_LEN {
        return Err(AddressError::PayloadLength(raw.len()));
    }
    let (payload, suffix) = raw.split_at(BASE58_PAYLOAD_LEN - CHECKSUM_LEN);
    if suffix != &checksum(payload)[..] {
        return Err(AddressError::Checksum);
    }
    let version = payload[0];
    kind_for_version(version).ok_or(AddressError::UnknownVersion(version))
}

fn kind_for_version(version: u8) -> Option<(Network, AddressKind)> {
    for &network in Network::all() {
        if version == network.pubkeyhash_version() {
            return Some((network, AddressKind::P2pkh));
        }
        if version == network.scripthash_version()
            || version == network.legacy_scripthash_version()
        {
            return Some((network, AddressKind::P2sh));
        }
    }
    None
}

fn parse_bech32(s: &str) -> Result<(Network, AddressKind), AddressError> {
    let has_upper = s.bytes().any(|b| b.is_ascii_uppercase());
    let has_lower = s.bytes().any(|b| b.is_ascii_lowercase());
    if has_upper && has_lower {
        return Err(AddressError::MixedCase);
    }
    let lower = s.to_ascii_lowercase();
    let (hrp, version, program) =
        segwit::decode(&lower).map_err(|e| AddressError::Bech32(e.to_string()))?;
    let network = Network::all()
        .iter()
        .copied()
        .find(|network| Hrp::parse(network.bech32_hrp()).is_ok_and(|expected| hrp == expected))
        .ok_or_else(|| AddressError::UnknownHrp(lower))?;
    let kind = match (version.to_u8(), program.len()) {
        (0, 20) => AddressKind::P2wpkh,
        (0, 32) => AddressKind::P2wsh,
        (1, 32) => AddressKind::P2tr,
        (witness_version, length) => {
            return Err(AddressError::WitnessProgram {
                version: witness_version,
                length,
            });
        }
    };
    Ok((network, kind))
}

/// Error type for address parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// The input is empty
    #[error("address is empty")]
    Empty,
    /// The input is not valid base58
    #[error("invalid base58 encoding")]
    Base58,
    /// Decoded base58 payload has the wrong size
    #[error("invalid decoded length: {0} bytes, expected 25")]
    PayloadLength(usize),
    /// The base58check checksum does not match
    #[error("checksum mismatch")]
    Checksum,
    /// The version byte belongs to no supported network
    #[error("unknown version byte: {0:#04x}")]
    UnknownVersion(u8),
    /// Bech32 strings must be entirely upper or lower case
    #[error("bech32 strings may not mix upper and lower case")]
    MixedCase,
    /// The input is not valid bech32
    #[error("invalid bech32 encoding: {0}")]
    Bech32(String),
    /// The human-readable part belongs to no supported network
    #[error("unknown address prefix in {0:?}")]
    UnknownHrp(String),
    /// Witness version and program length are not a supported combination
    #[error("unsupported witness program: version {version}, length {length}")]
    WitnessProgram {
        /// Witness version of the rejected program
        version: u8,
        /// Byte length of the rejected program
        length: usize,
    },
}
