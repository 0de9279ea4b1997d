//! Alias command implementation.
//!
//! Manages friendly meter names (aliases) that map to meter addresses.

use anyhow::{Context, Result, bail};
use elehant_core::{MacAddress, classify};

use crate::cli::OutputFormat;
use crate::commands::OutputSpec;
use crate::config::Config;
use crate::format::csv_escape;

/// Alias subcommand actions
pub enum AliasAction {
    /// List all aliases
    List,
    /// Set an alias
    Set { name: String, address: String },
    /// Remove an alias
    Remove { name: String },
}

pub fn cmd_alias(
    action: AliasAction,
    mut config: Config,
    output: &OutputSpec,
    quiet: bool,
) -> Result<()> {
    match action {
        AliasAction::List => {
            let content = match output.format {
                OutputFormat::Text if config.aliases.is_empty() => {
                    if quiet {
                        String::new()
                    } else {
                        "No aliases configured.\n\n\
                         Add an alias with: elehant alias set <name> <address>\n"
                            .to_string()
                    }
                }
                OutputFormat::Text => {
                    let width = config.aliases.keys().map(|k| k.chars().count()).max();
                    let width = width.unwrap_or(0);
                    config
                        .aliases
                        .iter()
                        .map(|(name, address)| format!("  {:<width$}  {}\n", name, address))
                        .collect()
                }
                OutputFormat::Json => output.opts.as_json(&config.aliases)?,
                OutputFormat::Csv => {
                    let mut csv = String::new();
                    if !output.opts.no_header {
                        csv.push_str("alias,address\n");
                    }
                    for (name, address) in &config.aliases {
                        csv.push_str(&format!("{},{}\n", csv_escape(name), csv_escape(address)));
                    }
                    csv
                }
            };
            output.emit(&content)?;
        }
        AliasAction::Set { name, address } => {
            if looks_like_address(&name) {
                bail!(
                    "Alias name '{}' looks like a meter address. \
                     Use a friendly name instead (e.g., 'kitchen-gas', 'bath-hot').",
                    name
                );
            }
            let mac: MacAddress = address
                .parse()
                .with_context(|| format!("'{}' is not a meter address", address))?;
            if !quiet && !classify(&mac).valid {
                eprintln!("Warning: {} is not a supported Elehant meter", mac);
            }

            let was_update = config.aliases.contains_key(&name);
            config.aliases.insert(name.clone(), mac.to_string());
            config.save()?;

            if !quiet {
                if was_update {
                    println!("Updated alias '{}' → {}", name, mac);
                } else {
                    println!("Added alias '{}' → {}", name, mac);
                }
            }
        }
        AliasAction::Remove { name } => {
            if config.aliases.remove(&name).is_some() {
                config.save()?;
                if !quiet {
                    println!("Removed alias '{}'", name);
                }
            } else {
                bail!("Alias '{}' not found", name);
            }
        }
    }

    Ok(())
}

/// Check if a string looks like a meter address.
fn looks_like_address(s: &str) -> bool {
    s.parse::<MacAddress>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_like_address_mac() {
        assert!(looks_like_address("B0:01:01:DD:EE:FF"));
        assert!(looks_like_address("b0-01-01-dd-ee-ff"));
        assert!(looks_like_address("b00101ddeeff"));
    }

    #[test]
    fn test_looks_like_address_friendly_names() {
        assert!(!looks_like_address("kitchen-gas"));
        assert!(!looks_like_address("bath"));
        assert!(!looks_like_address("meter 1"));
    }

    #[test]
    fn test_looks_like_address_short_mac() {
        assert!(!looks_like_address("B0:01:01"));
        assert!(!looks_like_address(""));
    }
}
