//! Replay command implementation.
//!
//! Decodes a capture of advertisements, one JSON object per line, as if the
//! meters were being heard live. Records that cannot be read are logged and
//! skipped.

use std::path::Path;

use anyhow::{Context, Result};
use elehant_core::{CaptureReader, MeterTracker, Observation};
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::cli::OutputFormat;
use crate::commands::OutputSpec;
use crate::format::{
    DecodedAdvertisement, format_observations_csv, format_observations_json,
    format_observations_text, format_outcomes_csv, format_outcomes_json, format_outcomes_text,
    format_stats_text,
};
use crate::util::open_input;

/// Arguments for the replay command.
pub struct ReplayArgs<'a> {
    pub file: Option<&'a Path>,
    pub latest: bool,
    pub stats: bool,
}

pub fn cmd_replay(args: ReplayArgs<'_>, output: &OutputSpec) -> Result<()> {
    let reader = open_input(args.file)?;
    let mut tracker = MeterTracker::new();
    let mut items = Vec::new();
    let mut skipped: u64 = 0;

    for advertisement in CaptureReader::new(reader) {
        let advertisement = match advertisement {
            Ok(advertisement) => advertisement,
            Err(e) if e.record_line().is_some() => {
                warn!("Skipping unreadable record: {}", e);
                skipped += 1;
                continue;
            }
            Err(e) => return Err(e).context("Failed to read capture"),
        };
        let outcome = tracker.process(&advertisement, OffsetDateTime::now_utc());
        if !args.latest {
            items.push(DecodedAdvertisement {
                address: advertisement.address,
                outcome,
            });
        }
    }

    info!(
        advertisements = tracker.total(),
        meters = tracker.len(),
        skipped,
        "Replay finished"
    );

    let content = if args.latest {
        let observations: Vec<&Observation> = tracker.observations().collect();
        match output.format {
            OutputFormat::Text => format_observations_text(&observations, &output.opts),
            OutputFormat::Json => format_observations_json(&observations, &output.opts)?,
            OutputFormat::Csv => format_observations_csv(&observations, &output.opts),
        }
    } else {
        match output.format {
            OutputFormat::Text => format_outcomes_text(&items, &output.opts),
            OutputFormat::Json => format_outcomes_json(&items, &output.opts)?,
            OutputFormat::Csv => format_outcomes_csv(&items, &output.opts),
        }
    };
    output.emit(&content)?;

    if args.stats {
        eprint!(
            "{}",
            format_stats_text(&tracker.counts(), skipped, output.opts.no_color)
        );
    }
    Ok(())
}
