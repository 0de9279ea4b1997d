//! Visual styling utilities for the CLI.
//!
//! Colors follow the coarse levels the meters report: battery and signal
//! strength buckets, and whether an advertisement was decoded.

use elehant_core::{BatteryLevel, OutcomeKind, SignalLevel};
use owo_colors::OwoColorize;

/// Format battery percentage with appropriate color.
pub fn format_battery_colored(percent: u8, no_color: bool) -> String {
    if no_color {
        return format!("{}%", percent);
    }

    match BatteryLevel::from_percent(percent) {
        BatteryLevel::Low => format!("{}%", percent.red()),
        BatteryLevel::Medium => format!("{}%", percent.yellow()),
        BatteryLevel::High => format!("{}%", percent.green()),
    }
}

/// Format RSSI as a three-step signal bar.
pub fn format_signal_bar(rssi: i16, no_color: bool) -> String {
    let level = SignalLevel::from_rssi(rssi);
    let filled = level as usize;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(3 - filled));

    if no_color {
        return format!("{} {} dBm", bar, rssi);
    }
    match level {
        SignalLevel::Weak => format!("{} {} dBm", bar.red(), rssi),
        SignalLevel::Fair => format!("{} {} dBm", bar.yellow(), rssi),
        SignalLevel::Strong => format!("{} {} dBm", bar.green(), rssi),
    }
}

/// Format a yes/no flag.
pub fn format_flag(value: bool, no_color: bool) -> String {
    let label = if value { "yes" } else { "no" };
    if no_color {
        label.to_string()
    } else if value {
        format!("{}", label.green())
    } else {
        format!("{}", label.dimmed())
    }
}

/// Format an outcome kind as a bracketed badge.
pub fn format_outcome_badge(kind: OutcomeKind, no_color: bool) -> String {
    let label = kind.as_str().to_uppercase();
    if no_color {
        return format!("[{}]", label);
    }
    match kind {
        OutcomeKind::Decoded => format!("[{}]", label.green()),
        OutcomeKind::Unsupported => format!("[{}]", label.dimmed()),
        OutcomeKind::VersionMismatch | OutcomeKind::IdentityMismatch => {
            format!("[{}]", label.yellow())
        }
        OutcomeKind::MalformedPayload => format!("[{}]", label.red()),
    }
}

/// Format a section title with an underline.
pub fn format_title(title: &str, no_color: bool) -> String {
    let underline = "─".repeat(title.chars().count());
    if no_color {
        format!("  {}\n  {}\n", title, underline)
    } else {
        format!("  {}\n  {}\n", title.cyan().bold(), underline.dimmed())
    }
}

/// Format a right-aligned key with its value.
pub fn format_kv(key: &str, value: &str, no_color: bool) -> String {
    if no_color {
        format!("  {:>11}:  {}\n", key, value)
    } else {
        format!("  {:>11}:  {}\n", key.dimmed(), value)
    }
}
