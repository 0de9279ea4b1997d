//! Decode command implementation.

use std::collections::HashMap;

use anyhow::{Context, Result};
use elehant_core::capture::parse_manufacturer_id;
use elehant_core::{Advertisement, decode_advertisement, parse_hex};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::commands::OutputSpec;
use crate::config::Config;
use crate::format::{
    DecodedAdvertisement, format_outcomes_csv, format_outcomes_json, format_outcomes_text,
};
use crate::util::parse_address;

/// Arguments for the decode command.
pub struct DecodeArgs<'a> {
    pub address: &'a str,
    pub data: &'a str,
    pub rssi: i16,
    pub manufacturer_id: &'a str,
}

pub fn cmd_decode(
    args: DecodeArgs<'_>,
    config: &Config,
    output: &OutputSpec,
    quiet: bool,
) -> Result<()> {
    let address = parse_address(args.address, config, quiet)?;
    let manufacturer_id = parse_manufacturer_id(args.manufacturer_id)
        .context("Invalid --manufacturer-id")?;
    let payload = parse_hex(args.data).context("Invalid --data")?;

    let advertisement = Advertisement {
        address,
        manufacturer_data: HashMap::from([(manufacturer_id, payload)]),
        rssi: args.rssi,
    };
    let outcome = decode_advertisement(&advertisement);
    debug!(%address, kind = %outcome.kind(), "Decoded advertisement");

    let items = [DecodedAdvertisement { address, outcome }];
    let content = match output.format {
        OutputFormat::Text => format_outcomes_text(&items, &output.opts),
        OutputFormat::Json => format_outcomes_json(&items, &output.opts)?,
        OutputFormat::Csv => format_outcomes_csv(&items, &output.opts),
    };
    output.emit(&content)
}
