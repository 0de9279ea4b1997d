//! Models command implementation.

use anyhow::Result;
use elehant_core::MeterType;

use crate::cli::OutputFormat;
use crate::commands::OutputSpec;
use crate::format::{format_models_csv, format_models_json, format_models_text, model_rows};

pub fn cmd_models(meter_type: Option<MeterType>, output: &OutputSpec) -> Result<()> {
    let rows = model_rows(meter_type);
    let content = match output.format {
        OutputFormat::Text => format_models_text(&rows, &output.opts),
        OutputFormat::Json => format_models_json(&rows, &output.opts)?,
        OutputFormat::Csv => format_models_csv(&rows, &output.opts),
    };
    output.emit(&content)
}
