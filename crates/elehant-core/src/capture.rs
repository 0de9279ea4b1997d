//! Reading captured advertisements.
//!
//! Captures are JSON lines, one advertisement per line, in the shape BLE
//! scanners commonly dump them:
//!
//! ```text
//! {"address":"b0:01:01:00:00:01","rssi":-70,"manufacturer_data":{"65535":"800000010101D20400..."}}
//! ```
//!
//! Manufacturer ids may be written in decimal (`"65535"`) or hex
//! (`"0xFFFF"`); payloads are hex strings accepted by
//! [`parse_hex`](crate::util::parse_hex). Blank lines and lines starting with
//! `#` are skipped.

use std::collections::HashMap;
use std::io::{BufRead, Lines};

use serde::Deserialize;
use tracing::trace;

use elehant_types::MacAddress;

use crate::advertisement::Advertisement;
use crate::error::{Error, Result};
use crate::util::parse_hex;

#[derive(Debug, Deserialize)]
struct CaptureRecord {
    address: String,
    rssi: i16,
    #[serde(default)]
    manufacturer_data: HashMap<String, String>,
}

/// Parse a manufacturer id written in decimal or `0x`-prefixed hex.
///
/// # Errors
///
/// Returns [`Error::InvalidManufacturerId`] if the text is not a 16-bit id.
pub fn parse_manufacturer_id(text: &str) -> Result<u16> {
    let trimmed = text.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => trimmed.parse(),
    };
    parsed.map_err(|_| Error::InvalidManufacturerId(text.to_string()))
}

/// Parse one capture line.
///
/// `line` is the 1-based line number used in error messages.
///
/// # Errors
///
/// Returns [`Error::InvalidRecord`] for malformed JSON, and
/// [`Error::InvalidField`] for a bad address, manufacturer id or payload.
pub fn parse_record(line: usize, text: &str) -> Result<Advertisement> {
    let record: CaptureRecord =
        serde_json::from_str(text).map_err(|source| Error::InvalidRecord { line, source })?;

    let field_error = |source: Error| Error::InvalidField {
        line,
        source: Box::new(source),
    };
    let address: MacAddress = record
        .address
        .parse()
        .map_err(|e| field_error(Error::Parse(e)))?;
    let manufacturer_data = record
        .manufacturer_data
        .iter()
        .map(|(id, data)| Ok((parse_manufacturer_id(id)?, parse_hex(data)?)))
        .collect::<Result<HashMap<u16, Vec<u8>>>>()
        .map_err(field_error)?;

    trace!(line, %address, entries = manufacturer_data.len(), "Parsed capture record");

    Ok(Advertisement {
        address,
        manufacturer_data,
        rssi: record.rssi,
    })
}

/// Iterator over the advertisements of a capture.
pub struct CaptureReader<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> CaptureReader<R> {
    /// Read a capture from any buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }

    /// Number of lines consumed so far.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Iterator for CaptureReader<R> {
    type Item = Result<Advertisement>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = match self.lines.next()? {
                Ok(text) => text,
                Err(e) => return Some(Err(e.into())),
            };
            self.line += 1;

            let trimmed = text.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            return Some(parse_record(self.line, trimmed));
        }
    }
}
