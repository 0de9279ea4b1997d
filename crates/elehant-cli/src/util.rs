//! Utility functions for CLI operations.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use elehant_core::MacAddress;

use crate::config::{Config, print_alias_feedback, resolve_alias};

/// Write output to file or stdout
pub fn write_output(output: Option<&PathBuf>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }
        None => {
            print!("{}", content);
            io::stdout().flush()?;
        }
    }
    Ok(())
}

/// Open a capture file, or stdin when `path` is `None` or `-`.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open capture {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Resolve an alias and parse the resulting meter address.
pub fn parse_address(input: &str, config: &Config, quiet: bool) -> Result<MacAddress> {
    let resolved = resolve_alias(input, config);
    print_alias_feedback(input, &resolved, quiet);
    resolved
        .parse()
        .with_context(|| format!("'{}' is not a meter address or known alias", input))
}
