//! Core types for Bitcoin addresses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a RIPEMD-160 hash carried by an address.
pub const HASH160_LEN: usize = 20;

/// A 20-byte public key hash or script hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hash160(pub [u8; HASH160_LEN]);

impl Hash160 {
    /// Create from raw bytes.
    pub fn new(bytes: [u8; HASH160_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; HASH160_LEN] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Create from hex string.
    pub fn from_hex(hex_str: &str) -> Result<Self, crate::DecodeError> {
        let bytes = hex::decode(hex_str).map_err(|e| match e {
            hex::FromHexError::InvalidHexCharacter { c, index } => {
                crate::DecodeError::InvalidCharacter { character: c, index }
            }
            _ => crate::DecodeError::InvalidLength {
                expected: HASH160_LEN * 2,
                actual: hex_str.len(),
            },
        })?;

        Self::try_from(bytes.as_slice())
    }
}

impl TryFrom<&[u8]> for Hash160 {
    type Error = crate::DecodeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != HASH160_LEN {
            return Err(crate::DecodeError::InvalidLength {
                expected: HASH160_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; HASH160_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

impl fmt::Display for Hash160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Network an address belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Network {
    /// Bitcoin mainnet.
    #[default]
    Mainnet,
}

impl Network {
    /// Version byte of pay-to-public-key-hash addresses.
    pub fn pubkey_hash_version(&self) -> u8 {
        match self {
            Network::Mainnet => crate::MAINNET_PUBKEY_HASH_VERSION,
        }
    }

    /// Version byte of pay-to-script-hash addresses.
    pub fn script_hash_version(&self) -> u8 {
        match self {
            Network::Mainnet => crate::MAINNET_SCRIPT_HASH_VERSION,
        }
    }

    /// Version byte used for `address_type` on this network.
    pub fn version_byte(&self, address_type: AddressType) -> u8 {
        match address_type {
            AddressType::PubkeyHash => self.pubkey_hash_version(),
            AddressType::ScriptHash => self.script_hash_version(),
        }
    }

    /// Map a version byte to an address type on this network.
    pub fn address_type_of(&self, version: u8) -> Option<AddressType> {
        if version == self.pubkey_hash_version() {
            Some(AddressType::PubkeyHash)
        } else if version == self.script_hash_version() {
            Some(AddressType::ScriptHash)
        } else {
            None
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => f.write_str("mainnet"),
        }
    }
}

/// Address type which is either P2PKH or P2SH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressType {
    /// Pay-to-public-key-hash address
    PubkeyHash,
    /// Pay-to-script-hash address
    ScriptHash,
}

/// The validated contents of a Base58Check address.
///
/// The checksum is verified during decoding and not retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodedAddress {
    /// Leading version byte.
    pub version: u8,
    /// Type implied by the version byte.
    pub address_type: AddressType,
    /// Hashed public key or script.
    pub hash: Hash160,
    /// Network the version byte belongs to.
    pub network: Network,
}
