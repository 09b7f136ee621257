//! The validated address value object.

use crate::{
    encode_address, AddressCodec, AddressError, AddressType, DecodedAddress, Hash160, Network,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::str::FromStr;
use std::sync::Arc;

/// A Bitcoin address that passed Base58Check validation.
///
/// The string given at construction is kept verbatim and is what
/// [`as_str`](Address::as_str), `Display` and serde produce. Equality and
/// hashing only look at that string.
///
/// Deserializing validates with `AddressCodec::default()`, which accepts
/// P2SH. Hosts that run a stricter codec should deserialize a `String` and
/// call [`Address::with_codec`] themselves.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address {
    value: String,
    address_type: AddressType,
    hash: Hash160,
    network: Network,
}

impl Address {
    /// Parse a mainnet address, accepting P2PKH and P2SH.
    ///
    /// # Example
    /// ```rust
    /// use bitcoin_address::Address;
    ///
    /// let address = Address::new("1AGNa15ZQXAZUgFiqJ2i7Z2DPU2J6hW62i").unwrap();
    /// assert_eq!(address.as_str(), "1AGNa15ZQXAZUgFiqJ2i7Z2DPU2J6hW62i");
    ///
    /// assert!(Address::new("foo").is_err());
    /// ```
    pub fn new(address_str: impl Into<String>) -> Result<Self, AddressError> {
        Self::with_codec(address_str, &AddressCodec::default())
    }

    /// Parse an address, accepting whatever `codec` accepts.
    pub fn with_codec(
        address_str: impl Into<String>,
        codec: &AddressCodec,
    ) -> Result<Self, AddressError> {
        let value = address_str.into();

        match codec.decode(&value) {
            Ok(decoded) => Ok(Self::from_decoded(value, decoded)),
            Err(reason) => {
                log::debug!("Rejected address {:?}: {}", value, reason);
                Err(AddressError::InvalidAddress {
                    input: value,
                    reason,
                })
            }
        }
    }

    /// Build the address for a hash of the given type.
    pub fn from_hash160(hash: Hash160, address_type: AddressType, network: Network) -> Self {
        Self {
            value: encode_address(network.version_byte(address_type), &hash),
            address_type,
            hash,
            network,
        }
    }

    fn from_decoded(value: String, decoded: DecodedAddress) -> Self {
        Self {
            value,
            address_type: decoded.address_type,
            hash: decoded.hash,
            network: decoded.network,
        }
    }

    /// The exact string this address was constructed from.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consume the address, returning its string.
    pub fn into_string(self) -> String {
        self.value
    }

    /// Whether this is a P2PKH or P2SH address.
    pub fn address_type(&self) -> AddressType {
        self.address_type
    }

    /// The hashed public key or script.
    pub fn hash160(&self) -> &Hash160 {
        &self.hash
    }

    /// The network this address belongs to.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Compare against any value.
    ///
    /// Returns `false` for anything that does not expose an address, so
    /// comparing with a string, number, `None` or a collection never fails.
    ///
    /// ```rust
    /// use bitcoin_address::Address;
    ///
    /// let a = Address::new("1AGNa15ZQXAZUgFiqJ2i7Z2DPU2J6hW62i").unwrap();
    /// let b = Address::new("1AGNa15ZQXAZUgFiqJ2i7Z2DPU2J6hW62i").unwrap();
    ///
    /// assert!(a.equals(&b));
    /// assert!(!a.equals("1AGNa15ZQXAZUgFiqJ2i7Z2DPU2J6hW62i"));
    /// assert!(!a.equals(&42));
    /// ```
    pub fn equals<T: AddressLike + ?Sized>(&self, other: &T) -> bool {
        other
            .as_address()
            .map_or(false, |other| self.value == other.value)
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Address {}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Address").field(&self.value).finish()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Address {
    type Error = AddressError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.value
    }
}

/// Values that may expose an [`Address`].
///
/// Implemented for `Address` and for wrappers around it. Other common
/// value types implement it by returning `None`.
pub trait AddressLike {
    /// The address this value carries, if any.
    fn as_address(&self) -> Option<&Address>;
}

impl AddressLike for Address {
    fn as_address(&self) -> Option<&Address> {
        Some(self)
    }
}

impl<T: AddressLike + ?Sized> AddressLike for &T {
    fn as_address(&self) -> Option<&Address> {
        (**self).as_address()
    }
}

impl<T: AddressLike + ?Sized> AddressLike for Box<T> {
    fn as_address(&self) -> Option<&Address> {
        (**self).as_address()
    }
}

impl<T: AddressLike + ?Sized> AddressLike for Rc<T> {
    fn as_address(&self) -> Option<&Address> {
        (**self).as_address()
    }
}

impl<T: AddressLike + ?Sized> AddressLike for Arc<T> {
    fn as_address(&self) -> Option<&Address> {
        (**self).as_address()
    }
}

impl<T: AddressLike> AddressLike for Option<T> {
    fn as_address(&self) -> Option<&Address> {
        self.as_ref().and_then(AddressLike::as_address)
    }
}

impl<T> AddressLike for [T] {
    fn as_address(&self) -> Option<&Address> {
        None
    }
}

impl<T, const N: usize> AddressLike for [T; N] {
    fn as_address(&self) -> Option<&Address> {
        None
    }
}

impl<T> AddressLike for Vec<T> {
    fn as_address(&self) -> Option<&Address> {
        None
    }
}

macro_rules! impl_not_address {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AddressLike for $ty {
                fn as_address(&self) -> Option<&Address> {
                    None
                }
            }
        )*
    };
}

impl_not_address!(
    str, String, char, bool, (), i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    f32, f64, Hash160, DecodedAddress,
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const A: &str = "1AGNa15ZQXAZUgFiqJ2i7Z2DPU2J6hW62i";
    const B: &str = "1Ax4gZtb7gAit2TivwejZHYtNNLT18PUXJ";

    #[test]
    fn test_as_str_is_verbatim() {
        let address = Address::new(A).unwrap();
        assert_eq!(address.as_str(), A);
        assert_eq!(address.to_string(), A);
        assert_eq!(format!("{}", address), A);
        let as_ref: &str = address.as_ref();
        assert_eq!(as_ref, A);
        assert_eq!(String::from(address.clone()), A);
        assert_eq!(address.into_string(), A);
    }

    #[test]
    fn test_accessors() {
        let address = Address::new(A).unwrap();
        assert_eq!(address.address_type(), AddressType::PubkeyHash);
        assert_eq!(address.network(), Network::Mainnet);
        assert_eq!(
            address.hash160().to_hex(),
            "65a16059864a2fdbc7c99a4723a8395bc6f188eb"
        );
    }

    #[test]
    fn test_invalid_address_error() {
        let err = Address::new("foo").unwrap_err();
        assert_eq!(err.input(), "foo");
        assert!(matches!(
            err.reason(),
            crate::DecodeError::InvalidLength { .. }
        ));
        assert!(err.to_string().contains("not a bitcoin address"));

        use std::error::Error;
        assert!(err.source().is_some());
    }

    #[test]
    fn test_equals_reflexive_and_symmetric() {
        let a = Address::new(A).unwrap();
        let a2 = Address::new(A.to_string()).unwrap();
        let b = Address::new(B).unwrap();

        assert!(a.equals(&a));
        assert!(a.equals(&a2));
        assert!(a2.equals(&a));
        assert_eq!(a, a2);

        assert!(!a.equals(&b));
        assert!(!b.equals(&a));
        assert_ne!(a, b);
    }

    #[test]
    fn test_equals_wrappers() {
        let a = Address::new(A).unwrap();

        assert!(a.equals(&Box::new(a.clone())));
        assert!(a.equals(&Rc::new(a.clone())));
        assert!(a.equals(&Arc::new(a.clone())));
        assert!(a.equals(&Some(a.clone())));
        assert!(!a.equals(&None::<Address>));
    }

    #[test]
    fn test_equals_non_address_values() {
        let a = Address::new(A).unwrap();

        assert!(!a.equals("foo"));
        assert!(!a.equals(A));
        assert!(!a.equals(&A.to_string()));
        assert!(!a.equals(&42));
        assert!(!a.equals(&false));
        assert!(!a.equals(&true));
        assert!(!a.equals(&()));
        assert!(!a.equals(&Vec::<u8>::new()));
        assert!(!a.equals(&[0u8; 0]));
        assert!(!a.equals(a.hash160()));
    }

    #[test]
    fn test_hash_matches_equality() {
        let mut set = HashSet::new();
        set.insert(Address::new(A).unwrap());
        set.insert(Address::new(A).unwrap());
        set.insert(Address::new(B).unwrap());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_from_str_and_try_from() {
        let parsed: Address = A.parse().unwrap();
        assert_eq!(parsed.as_str(), A);

        assert!(Address::try_from(B).is_ok());
        assert!(Address::try_from(String::from("42")).is_err());
        assert!("".parse::<Address>().is_err());
    }

    #[test]
    fn test_from_hash160() {
        let hash = Hash160::from_hex("65a16059864a2fdbc7c99a4723a8395bc6f188eb").unwrap();
        let address = Address::from_hash160(hash, AddressType::PubkeyHash, Network::Mainnet);
        assert_eq!(address.as_str(), A);
        assert_eq!(address, Address::new(A).unwrap());

        let script = Address::from_hash160(hash, AddressType::ScriptHash, Network::Mainnet);
        assert!(script.as_str().starts_with('3'));
        assert_eq!(Address::new(script.as_str()).unwrap(), script);
    }

    #[test]
    fn test_with_codec_rejects_script_hash() {
        let hash = Hash160::new([1u8; 20]);
        let script = Address::from_hash160(hash, AddressType::ScriptHash, Network::Mainnet);

        let strict = AddressCodec::pubkey_hash_only(Network::Mainnet);
        let err = Address::with_codec(script.as_str(), &strict).unwrap_err();
        assert!(matches!(
            err.reason(),
            crate::DecodeError::UnsupportedVersion { version: 0x05, .. }
        ));
    }

    #[test]
    fn test_serde_as_plain_string() {
        let address = Address::new(A).unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"{}\"", A));

        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);

        assert!(serde_json::from_str::<Address>("\"foo\"").is_err());
    }

    #[test]
    fn test_serde_uses_default_codec() {
        let script = Address::from_hash160(
            Hash160::new([5u8; 20]),
            AddressType::ScriptHash,
            Network::Mainnet,
        );
        let json = serde_json::to_string(&script).unwrap();

        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back.address_type(), AddressType::ScriptHash);

        let strict = AddressCodec::pubkey_hash_only(Network::Mainnet);
        let raw: String = serde_json::from_str(&json).unwrap();
        assert!(Address::with_codec(raw, &strict).is_err());
    }

    #[test]
    fn test_debug_format() {
        let address = Address::new(A).unwrap();
        assert_eq!(format!("{:?}", address), format!("Address(\"{}\")", A));
    }

    #[test]
    fn test_shared_across_threads() {
        let address = Arc::new(Address::new(A).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let address = Arc::clone(&address);
                std::thread::spawn(move || address.as_str().to_string())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), A);
        }
    }
}
