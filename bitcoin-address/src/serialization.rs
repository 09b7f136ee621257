//! Address serialization functions.

use crate::parsing::compute_checksum;
use crate::Hash160;

/// Serialize a version byte and hash to raw bytes (including checksum).
///
/// # Format
/// ```text
/// [version:1][hash160:20][checksum:4]
/// ```
pub fn address_to_bytes(version: u8, hash: &Hash160) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(crate::ADDRESS_LEN);

    bytes.push(version);
    bytes.extend_from_slice(hash.as_bytes());

    let checksum = compute_checksum(&bytes);
    bytes.extend_from_slice(&checksum);

    bytes
}

/// Encode a version byte and hash as a Base58Check string.
///
/// # Example
/// ```rust
/// use bitcoin_address::{encode_address, Hash160};
///
/// let hash = Hash160::from_hex("65a16059864a2fdbc7c99a4723a8395bc6f188eb").unwrap();
/// assert_eq!(encode_address(0x00, &hash), "1AGNa15ZQXAZUgFiqJ2i7Z2DPU2J6hW62i");
/// ```
pub fn encode_address(version: u8, hash: &Hash160) -> String {
    bs58::encode(address_to_bytes(version, hash)).into_string()
}
