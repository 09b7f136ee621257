//! Error types for address operations.

use thiserror::Error;

/// Errors that can occur while decoding a Base58Check address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input contains a character outside the Base58 alphabet.
    #[error("Invalid character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },

    /// The decoded payload has the wrong number of bytes.
    ///
    /// Base58 decoding stops once the payload outgrows a 25-byte address,
    /// so `actual` saturates at `expected + 1` for over-long input.
    #[error("Invalid address length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The trailing checksum does not match the payload.
    #[error("Invalid checksum: expected {}, got {}", hex::encode(.expected), hex::encode(.actual))]
    ChecksumMismatch { expected: [u8; 4], actual: [u8; 4] },

    /// Base58 decoding failed for a reason not covered above.
    #[error("Invalid Base58 encoding: {0}")]
    InvalidBase58(String),

    /// The version byte is not recognized for the network.
    #[error("Unsupported version byte 0x{version:02x} for {network}")]
    UnsupportedVersion {
        version: u8,
        network: crate::Network,
    },
}

/// Errors that can occur when constructing an [`Address`](crate::Address).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The input string is not a valid address.
    #[error("Given string is not a bitcoin address: {input:?} ({reason})")]
    InvalidAddress {
        input: String,
        #[source]
        reason: DecodeError,
    },
}

impl AddressError {
    /// The rejected input string.
    pub fn input(&self) -> &str {
        match self {
            AddressError::InvalidAddress { input, .. } => input,
        }
    }

    /// The underlying decoding failure.
    pub fn reason(&self) -> &DecodeError {
        match self {
            AddressError::InvalidAddress { reason, .. } => reason,
        }
    }
}
