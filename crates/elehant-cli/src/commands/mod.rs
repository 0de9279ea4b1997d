//! Command implementations for the CLI.

mod alias;
mod classify;
mod config;
mod decode;
mod models;
mod replay;
mod sensors;

pub use alias::{AliasAction, cmd_alias};
pub use classify::cmd_classify;
pub use config::cmd_config;
pub use decode::{DecodeArgs, cmd_decode};
pub use models::cmd_models;
pub use replay::{ReplayArgs, cmd_replay};
pub use sensors::cmd_sensors;

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::OutputFormat;
use crate::format::FormatOptions;
use crate::util::write_output;

/// Where and how a command writes its result.
#[derive(Debug, Clone)]
pub struct OutputSpec {
    pub format: OutputFormat,
    pub opts: FormatOptions,
    pub path: Option<PathBuf>,
}

impl OutputSpec {
    /// Write rendered output to the file or stdout.
    pub fn emit(&self, content: &str) -> Result<()> {
        write_output(self.path.as_ref(), content)
    }
}
