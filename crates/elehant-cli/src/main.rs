mod cli;
mod commands;
mod config;
mod format;
mod style;
mod util;

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cli::{AliasSubcommand, Cli, Commands};
use commands::{
    AliasAction, DecodeArgs, OutputSpec, ReplayArgs, cmd_alias, cmd_classify, cmd_config,
    cmd_decode, cmd_models, cmd_replay, cmd_sensors,
};
use config::Config;
use format::FormatOptions;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle completions command early (before tracing init)
    if let Commands::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "elehant", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load();

    // Quiet and verbose win over RUST_LOG, which wins over the config file
    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(config.log_level.as_deref().unwrap_or("info"))
        })
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let output = OutputSpec {
        format: cli.resolve_format(config.format.as_deref()),
        opts: FormatOptions::new(cli.no_color() || config.no_color)
            .with_compact(cli.compact || config.compact)
            .with_no_header(cli.no_header),
        path: cli.output.clone(),
    };
    if let Some(ref path) = output.path {
        tracing::debug!("Writing output to {}", path.display());
    }

    match cli.command {
        Commands::Classify { addresses } => cmd_classify(&addresses, &config, &output, cli.quiet),
        Commands::Decode {
            address,
            data,
            rssi,
            manufacturer_id,
        } => cmd_decode(
            DecodeArgs {
                address: &address,
                data: &data,
                rssi,
                manufacturer_id: &manufacturer_id,
            },
            &config,
            &output,
            cli.quiet,
        ),
        Commands::Replay {
            file,
            latest,
            stats,
        } => cmd_replay(
            ReplayArgs {
                file: file.as_deref(),
                latest,
                stats,
            },
            &output,
        ),
        Commands::Models { meter_type } => cmd_models(meter_type, &output),
        Commands::Sensors { address } => cmd_sensors(&address, &config, &output, cli.quiet),
        Commands::Config { action } => cmd_config(action, &config, &output),
        Commands::Alias { action } => {
            let action = match action {
                AliasSubcommand::List => AliasAction::List,
                AliasSubcommand::Set { name, address } => AliasAction::Set { name, address },
                AliasSubcommand::Remove { name } => AliasAction::Remove { name },
            };
            cmd_alias(action, config, &output, cli.quiet)
        }
        Commands::Completions { .. } => unreachable!("completions are handled before dispatch"),
    }
}
