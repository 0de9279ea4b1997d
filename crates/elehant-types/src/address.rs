//! Bluetooth device addresses.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseError;

/// A 6-byte Bluetooth device address.
///
/// Parsing is case-insensitive and accepts colon-separated, dash-separated
/// and bare hex forms. The canonical text form is lowercase and
/// colon-separated, which is also how the address is serialized.
///
/// ```
/// use elehant_types::MacAddress;
///
/// let mac: MacAddress = "B0:01:02:AA:BB:CC".parse().unwrap();
/// assert_eq!(mac.octets()[0], 0xB0);
/// assert_eq!(mac.to_string(), "b0:01:02:aa:bb:cc");
///
/// let bare: MacAddress = "b00102aabbcc".parse().unwrap();
/// assert_eq!(bare, mac);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    /// Number of bytes in an address.
    pub const LEN: usize = 6;

    /// Create an address from its raw bytes, most significant first.
    #[must_use]
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    /// Raw address bytes, most significant first.
    #[must_use]
    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Single address byte by position (0 is the most significant byte).
    #[must_use]
    pub const fn octet(&self, index: usize) -> u8 {
        self.0[index]
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from(octets: [u8; 6]) -> Self {
        Self(octets)
    }
}

impl FromStr for MacAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| ParseError::InvalidAddress {
            input: s.to_string(),
            reason,
        };

        let trimmed = s.trim();
        let digits: String = if trimmed.contains([':', '-']) {
            let groups: Vec<&str> = trimmed.split([':', '-']).collect();
            if groups.len() != Self::LEN {
                return Err(invalid("expected 6 groups"));
            }
            if groups.iter().any(|g| g.len() != 2) {
                return Err(invalid("each group must be 2 hex digits"));
            }
            groups.concat()
        } else {
            trimmed.to_string()
        };

        let mut octets = [0u8; 6];
        hex::decode_to_slice(&digits, &mut octets).map_err(|e| match e {
            hex::FromHexError::InvalidHexCharacter { .. } => invalid("non-hex digit"),
            _ => invalid("expected 12 hex digits"),
        })?;

        Ok(Self(octets))
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            a, b, c, d, e, g
        )
    }
}

#[cfg(feature = "serde")]
impl Serialize for MacAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for MacAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
