//! Utility functions for elehant-core.

use elehant_types::{ParseError, ParseResult};

/// Parse a hex byte string as printed by BLE tools.
///
/// Accepts upper or lower case, an optional `0x` prefix, and spaces, colons
/// or dashes between bytes.
///
/// ```
/// use elehant_core::util::parse_hex;
///
/// assert_eq!(parse_hex("0x01FF").unwrap(), vec![0x01, 0xFF]);
/// assert_eq!(parse_hex("01 ff").unwrap(), vec![0x01, 0xFF]);
/// assert!(parse_hex("0").is_err());
/// ```
pub fn parse_hex(text: &str) -> ParseResult<Vec<u8>> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let compact: String = body
        .chars()
        .filter(|c| !matches!(c, ' ' | ':' | '-'))
        .collect();

    hex::decode(&compact).map_err(|e| ParseError::InvalidHex(e.to_string()))
}

/// Format bytes as upper-case hex, the way the meters' vendor tools show them.
#[must_use]
pub fn format_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}
