//! Bitcoin Address Value Object
//!
//! This crate provides a validated, immutable Bitcoin address type backed
//! by a self-contained Base58Check decoder.
//!
//! # Overview
//!
//! A legacy Bitcoin address is the Base58 encoding of 25 bytes:
//! ```text
//! [version_byte][hash160:20][checksum:4]
//! ```
//! where the checksum is the first 4 bytes of SHA-256(SHA-256(version ++ hash160)).
//! Mainnet uses version `0x00` for P2PKH and `0x05` for P2SH.
//!
//! An [`Address`] can only be obtained from a string that decodes, checksums
//! and carries a recognized version byte. It keeps that string verbatim.
//!
//! # Example
//!
//! ```rust
//! use bitcoin_address::{Address, AddressCodec, Network};
//!
//! let address = Address::new("1AGNa15ZQXAZUgFiqJ2i7Z2DPU2J6hW62i").unwrap();
//! assert_eq!(address.to_string(), "1AGNa15ZQXAZUgFiqJ2i7Z2DPU2J6hW62i");
//!
//! // Reject P2SH addresses
//! let codec = AddressCodec::pubkey_hash_only(Network::Mainnet);
//! let strict = Address::with_codec("1AGNa15ZQXAZUgFiqJ2i7Z2DPU2J6hW62i", &codec);
//! assert_eq!(strict.unwrap(), address);
//!
//! match Address::new("1AGNa15ZQXAZUgFiqJ2i7Z2DPU2J6hW62j") {
//!     Ok(_) => unreachable!(),
//!     Err(e) => println!("Rejected: {}", e),
//! }
//! ```

mod address;
mod error;
mod parsing;
mod serialization;
mod types;
mod validation;

pub use address::{Address, AddressLike};
pub use error::{AddressError, DecodeError};
pub use parsing::{decode, AddressCodec, ADDRESS_LEN, CHECKSUM_LEN};
pub use serialization::{address_to_bytes, encode_address};
pub use types::{AddressType, DecodedAddress, Hash160, Network, HASH160_LEN};
pub use validation::{address_type_of, is_valid_address, validate_address, ValidationResult};

/// Version byte for mainnet pay-to-public-key-hash addresses.
pub const MAINNET_PUBKEY_HASH_VERSION: u8 = 0x00;

/// Version byte for mainnet pay-to-script-hash addresses.
pub const MAINNET_SCRIPT_HASH_VERSION: u8 = 0x05;
