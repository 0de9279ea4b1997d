//! Sensors command implementation.

use anyhow::Result;
use elehant_core::{classify, describe};

use crate::cli::OutputFormat;
use crate::commands::OutputSpec;
use crate::config::Config;
use crate::format::{format_sensors_csv, format_sensors_json, format_sensors_text};
use crate::util::parse_address;

pub fn cmd_sensors(address: &str, config: &Config, output: &OutputSpec, quiet: bool) -> Result<()> {
    let mac = parse_address(address, config, quiet)?;
    let sensors = describe(&classify(&mac));

    let content = match output.format {
        OutputFormat::Text => format_sensors_text(&mac, &sensors, &output.opts),
        OutputFormat::Json => format_sensors_json(&mac, &sensors, &output.opts)?,
        OutputFormat::Csv => format_sensors_csv(&sensors, &output.opts),
    };
    output.emit(&content)
}
