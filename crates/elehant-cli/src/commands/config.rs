//! Config command implementation.

use anyhow::{Context, Result};

use crate::cli::{ConfigAction, OutputFormat};
use crate::commands::OutputSpec;
use crate::config::Config;
use crate::format::csv_escape;

pub fn cmd_config(action: ConfigAction, config: &Config, output: &OutputSpec) -> Result<()> {
    match action {
        ConfigAction::Path => output.emit(&format!("{}\n", Config::path().display())),
        ConfigAction::Show => {
            let content = match output.format {
                OutputFormat::Text => {
                    toml::to_string_pretty(config).context("Failed to serialize config")?
                }
                OutputFormat::Json => output.opts.as_json(config)?,
                OutputFormat::Csv => format_config_csv(config, output.opts.no_header),
            };
            output.emit(&content)
        }
    }
}

fn format_config_csv(config: &Config, no_header: bool) -> String {
    let mut rows = vec![
        (
            "format".to_string(),
            config.format.clone().unwrap_or_default(),
        ),
        ("no_color".to_string(), config.no_color.to_string()),
        ("compact".to_string(), config.compact.to_string()),
        (
            "log_level".to_string(),
            config.log_level.clone().unwrap_or_default(),
        ),
    ];
    rows.extend(
        config
            .aliases
            .iter()
            .map(|(name, address)| (format!("aliases.{}", name), address.clone())),
    );

    let mut output = String::new();
    if !no_header {
        output.push_str("key,value\n");
    }
    for (key, value) in rows {
        output.push_str(&format!("{},{}\n", csv_escape(&key), csv_escape(&value)));
    }
    output
}
