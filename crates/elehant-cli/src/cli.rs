//! CLI argument definitions using clap.

use std::ffi::OsStr;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use elehant_core::MeterType;

/// Output format for commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    /// Parse a format name as written in the config file.
    pub fn from_config(value: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(value, true).ok()
    }
}

#[derive(Parser)]
#[command(name = "elehant")]
#[command(
    author,
    version,
    about = "Decode Elehant BLE utility meter advertisements",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format (overrides config)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output as JSON (shorthand for --format json)
    #[arg(long, global = true)]
    pub json: bool,

    /// Output compact JSON (no pretty-printing)
    #[arg(long, global = true)]
    pub compact: bool,

    /// Omit header row in CSV output (useful for appending)
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Disable colored output (also set by a non-empty NO_COLOR)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Environment variable that disables colored output when set and non-empty.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

impl Cli {
    /// Whether colored output is disabled by `--no-color` or `NO_COLOR`.
    pub fn no_color(&self) -> bool {
        self.no_color || no_color_requested(std::env::var_os(NO_COLOR_ENV).as_deref())
    }

    /// Resolve the output format: `--json`, then `--format`, then config.
    pub fn resolve_format(&self, config_format: Option<&str>) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if let Some(format) = self.format {
            format
        } else {
            config_format
                .and_then(OutputFormat::from_config)
                .unwrap_or_default()
        }
    }
}

/// Any non-empty value counts, whatever it says.
fn no_color_requested(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify device addresses (meter family, model, support)
    Classify {
        /// Device address(es) or alias name(s)
        #[arg(required = true)]
        addresses: Vec<String>,
    },

    /// Decode a single advertisement
    Decode {
        /// Device address or alias name
        #[arg(short, long, env = "ELEHANT_ADDRESS")]
        address: String,

        /// Manufacturer data as hex (spaces, colons and 0x prefix allowed)
        #[arg(short, long)]
        data: String,

        /// Signal strength in dBm
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        rssi: i16,

        /// Manufacturer id the data was advertised under (decimal or 0x-hex)
        #[arg(short, long, default_value = "0xFFFF")]
        manufacturer_id: String,
    },

    /// Decode captured advertisements (JSON lines) from a file or stdin
    Replay {
        /// Capture file (reads stdin when omitted or "-")
        file: Option<PathBuf>,

        /// Only print the last decoded reading of each meter
        #[arg(long)]
        latest: bool,

        /// Print outcome counts to stderr when done
        #[arg(long)]
        stats: bool,
    },

    /// List known meter models
    Models {
        /// Only list models of this family (gas, water, electric, heat)
        #[arg(short = 't', long)]
        meter_type: Option<MeterType>,
    },

    /// Show the sensors a meter exposes
    Sensors {
        /// Device address or alias name
        address: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Manage meter aliases (friendly names)
    Alias {
        #[command(subcommand)]
        action: AliasSubcommand,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Configuration subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Show effective configuration
    Show,

    /// Show configuration file path
    Path,
}

/// Alias subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum AliasSubcommand {
    /// List all meter aliases
    List,

    /// Set a meter alias
    Set {
        /// Friendly name for the meter (e.g., "kitchen-gas")
        name: String,

        /// Meter address
        address: String,
    },

    /// Remove a meter alias
    #[command(alias = "rm")]
    Remove {
        /// Alias name to remove
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_decode_accepts_negative_rssi() {
        let cli = Cli::try_parse_from([
            "elehant", "decode", "-a", "b0:01:01:00:00:01", "-d", "00", "--rssi", "-70",
        ])
        .unwrap();
        match cli.command {
            Commands::Decode { rssi, .. } => assert_eq!(rssi, -70),
            _ => panic!("expected decode"),
        }
    }

    #[test]
    fn test_models_parses_meter_type() {
        let cli = Cli::try_parse_from(["elehant", "models", "--meter-type", "water"]).unwrap();
        match cli.command {
            Commands::Models { meter_type } => assert_eq!(meter_type, Some(MeterType::Water)),
            _ => panic!("expected models"),
        }
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["elehant", "-v", "-q", "models"]).is_err());
    }

    #[test]
    fn test_resolve_format_precedence() {
        let cli = Cli::try_parse_from(["elehant", "models"]).unwrap();
        assert_eq!(cli.resolve_format(None), OutputFormat::Text);
        assert_eq!(cli.resolve_format(Some("csv")), OutputFormat::Csv);
        assert_eq!(cli.resolve_format(Some("bogus")), OutputFormat::Text);

        let cli = Cli::try_parse_from(["elehant", "--format", "csv", "models"]).unwrap();
        assert_eq!(cli.resolve_format(Some("json")), OutputFormat::Csv);

        let cli = Cli::try_parse_from(["elehant", "--json", "--format", "csv", "models"]).unwrap();
        assert_eq!(cli.resolve_format(None), OutputFormat::Json);
    }

    #[test]
    fn test_no_color_env_values() {
        assert!(no_color_requested(Some(OsStr::new("1"))));
        assert!(no_color_requested(Some(OsStr::new("true"))));
        assert!(no_color_requested(Some(OsStr::new("0"))));
        assert!(!no_color_requested(Some(OsStr::new(""))));
        assert!(!no_color_requested(None));
    }

    #[test]
    fn test_no_color_flag() {
        let cli = Cli::try_parse_from(["elehant", "--no-color", "models"]).unwrap();
        assert!(cli.no_color());
    }

    #[test]
    fn test_format_from_config_is_case_insensitive() {
        assert_eq!(OutputFormat::from_config("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_config("yaml"), None);
    }
}
