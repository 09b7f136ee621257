//! Base58Check decoding and checksum verification.

use crate::{AddressType, DecodeError, DecodedAddress, Hash160, Network, HASH160_LEN};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Number of checksum bytes appended to the payload.
pub const CHECKSUM_LEN: usize = 4;

/// Decoded address length (version + hash + checksum).
pub const ADDRESS_LEN: usize = 1 + HASH160_LEN + CHECKSUM_LEN; // 25 bytes

/// Stateless Base58Check address decoder.
///
/// The codec only carries which version bytes it accepts, so it is `Copy`
/// and can be shared freely or embedded in a host application's config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressCodec {
    /// Network whose version bytes are accepted.
    pub network: Network,
    /// Whether pay-to-script-hash addresses are accepted.
    pub accept_script_hash: bool,
}

impl Default for AddressCodec {
    fn default() -> Self {
        Self::new(Network::Mainnet)
    }
}

impl AddressCodec {
    /// Codec accepting both P2PKH and P2SH addresses on `network`.
    pub fn new(network: Network) -> Self {
        Self {
            network,
            accept_script_hash: true,
        }
    }

    /// Codec accepting only P2PKH addresses on `network`.
    pub fn pubkey_hash_only(network: Network) -> Self {
        Self {
            network,
            accept_script_hash: false,
        }
    }

    /// Decode and verify a Base58Check encoded address.
    ///
    /// # Arguments
    /// * `input` - The Base58Check encoded address string
    ///
    /// # Returns
    /// * `Ok(DecodedAddress)` - Version, hash and network of the address
    /// * `Err(DecodeError)` - Bad character, length, checksum or version
    ///
    /// # Example
    /// ```rust
    /// use bitcoin_address::{AddressCodec, AddressType};
    ///
    /// let decoded = AddressCodec::default()
    ///     .decode("1AGNa15ZQXAZUgFiqJ2i7Z2DPU2J6hW62i")
    ///     .unwrap();
    /// assert_eq!(decoded.address_type, AddressType::PubkeyHash);
    /// ```
    pub fn decode(&self, input: &str) -> Result<DecodedAddress, DecodeError> {
        let bytes = decode_base58(input)?;

        let checksum_start = bytes.len() - CHECKSUM_LEN;
        let payload = &bytes[..checksum_start];
        let mut provided_checksum = [0u8; CHECKSUM_LEN];
        provided_checksum.copy_from_slice(&bytes[checksum_start..]);

        let computed_checksum = compute_checksum(payload);
        if provided_checksum != computed_checksum {
            return Err(DecodeError::ChecksumMismatch {
                expected: computed_checksum,
                actual: provided_checksum,
            });
        }

        let version = payload[0];
        let address_type = self.address_type_of(version)?;
        let hash = Hash160::try_from(&payload[1..])?;

        log::trace!("Decoded {:?} address {}", address_type, input);

        Ok(DecodedAddress {
            version,
            address_type,
            hash,
            network: self.network,
        })
    }

    /// Whether `version` is accepted by this codec.
    pub fn accepts_version(&self, version: u8) -> bool {
        self.address_type_of(version).is_ok()
    }

    fn address_type_of(&self, version: u8) -> Result<AddressType, DecodeError> {
        let address_type = match self.network.address_type_of(version) {
            Some(AddressType::ScriptHash) if !self.accept_script_hash => None,
            other => other,
        };

        address_type.ok_or(DecodeError::UnsupportedVersion {
            version,
            network: self.network,
        })
    }
}

/// Decode an address with the default codec for `network`.
pub fn decode(input: &str, network: Network) -> Result<DecodedAddress, DecodeError> {
    AddressCodec::new(network).decode(input)
}

/// Convert Base58 text to exactly [`ADDRESS_LEN`] bytes.
///
/// Leading `1`s become zero bytes. Decoding writes into a fixed buffer and
/// stops as soon as the value outgrows it, so oversized input costs time
/// linear in its length.
fn decode_base58(input: &str) -> Result<[u8; ADDRESS_LEN], DecodeError> {
    let mut bytes = [0u8; ADDRESS_LEN];

    let len = bs58::decode(input).onto(&mut bytes).map_err(|e| match e {
        bs58::decode::Error::InvalidCharacter { character, index } => {
            DecodeError::InvalidCharacter { character, index }
        }
        bs58::decode::Error::NonAsciiCharacter { index } => DecodeError::InvalidCharacter {
            character: input
                .get(index..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER),
            index,
        },
        bs58::decode::Error::BufferTooSmall => DecodeError::InvalidLength {
            expected: ADDRESS_LEN,
            actual: ADDRESS_LEN + 1,
        },
        other => DecodeError::InvalidBase58(other.to_string()),
    })?;

    if len != ADDRESS_LEN {
        return Err(DecodeError::InvalidLength {
            expected: ADDRESS_LEN,
            actual: len,
        });
    }

    Ok(bytes)
}

/// Compute double SHA-256 checksum (first 4 bytes).
pub(crate) fn compute_checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash1 = Sha256::digest(payload);
    let hash2 = Sha256::digest(hash1);
    let mut checksum = [0u8; CHECKSUM_LEN];
    checksum.copy_from_slice(&hash2[..CHECKSUM_LEN]);
    checksum
}
