//! Classify command implementation.

use anyhow::Result;
use elehant_core::classify;

use crate::cli::OutputFormat;
use crate::commands::OutputSpec;
use crate::config::{Config, alias_for};
use crate::format::{
    ClassifiedAddress, format_classify_csv, format_classify_json, format_classify_text,
};
use crate::util::parse_address;

pub fn cmd_classify(
    addresses: &[String],
    config: &Config,
    output: &OutputSpec,
    quiet: bool,
) -> Result<()> {
    let items = addresses
        .iter()
        .map(|input| {
            let mac = parse_address(input, config, quiet)?;
            let alias = alias_for(&mac, config).map(str::to_string);
            Ok(ClassifiedAddress::new(classify(&mac), alias))
        })
        .collect::<Result<Vec<_>>>()?;

    let content = match output.format {
        OutputFormat::Text => format_classify_text(&items, &output.opts),
        OutputFormat::Json => format_classify_json(&items, &output.opts)?,
        OutputFormat::Csv => format_classify_csv(&items, &output.opts),
    };
    output.emit(&content)
}
