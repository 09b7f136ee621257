//! Address validation functions.

use crate::{AddressCodec, AddressType, Network};

/// Result of address validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the address is valid.
    pub is_valid: bool,
    /// Network of a valid address.
    pub network: Option<Network>,
    /// Type of a valid address.
    pub address_type: Option<AddressType>,
    /// Why an invalid address was rejected.
    pub message: Option<String>,
}

impl ValidationResult {
    /// Create a valid result.
    pub fn valid(network: Network, address_type: AddressType) -> Self {
        Self {
            is_valid: true,
            network: Some(network),
            address_type: Some(address_type),
            message: None,
        }
    }

    /// Create an invalid result with an error message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            network: None,
            address_type: None,
            message: Some(message.into()),
        }
    }
}

/// Validate an address string without constructing an [`Address`](crate::Address).
///
/// # Example
/// ```rust
/// use bitcoin_address::{validate_address, AddressCodec};
///
/// let result = validate_address("42", &AddressCodec::default());
/// assert!(!result.is_valid);
/// println!("Invalid: {:?}", result.message);
/// ```
pub fn validate_address(address_str: &str, codec: &AddressCodec) -> ValidationResult {
    match codec.decode(address_str) {
        Ok(decoded) => ValidationResult::valid(decoded.network, decoded.address_type),
        Err(e) => ValidationResult::invalid(e.to_string()),
    }
}

/// Check whether `address_str` is a P2PKH or P2SH address on `network`.
pub fn is_valid_address(address_str: &str, network: Network) -> bool {
    AddressCodec::new(network).decode(address_str).is_ok()
}

/// Type of the address, or `None` if it does not validate on `network`.
pub fn address_type_of(address_str: &str, network: Network) -> Option<AddressType> {
    AddressCodec::new(network)
        .decode(address_str)
        .ok()
        .map(|decoded| decoded.address_type)
}
