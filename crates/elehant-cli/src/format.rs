//! Output formatting utilities for text, JSON, and CSV output.

use std::collections::BTreeMap;

use anyhow::Result;
use elehant_core::models::{self, METER_MODELS};
use elehant_core::sensors::{SensorDescription, meter_reading_description};
use elehant_core::{
    DeviceIdentity, HardwareGeneration, MacAddress, MeterReading, MeterType, Observation, Outcome,
    OutcomeKind,
};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;

use crate::style;

/// Formatting options for output.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Disable colored output.
    pub no_color: bool,
    /// Omit header row in CSV output.
    pub no_header: bool,
    /// Use compact JSON output (no pretty-printing).
    pub compact: bool,
}

impl FormatOptions {
    pub fn new(no_color: bool) -> Self {
        Self {
            no_color,
            ..Self::default()
        }
    }

    /// Create with no_header option for CSV output.
    pub fn with_no_header(mut self, no_header: bool) -> Self {
        self.no_header = no_header;
        self
    }

    /// Create with compact JSON option.
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Serialize value to JSON string, respecting compact option.
    pub fn as_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.compact {
            serde_json::to_string(value)?
        } else {
            serde_json::to_string_pretty(value)?
        };
        Ok(json + "\n")
    }

    /// Prepend the CSV header unless suppressed.
    fn csv(&self, header: &str, rows: impl IntoIterator<Item = String>) -> String {
        let mut output = String::new();
        if !self.no_header {
            output.push_str(header);
            output.push('\n');
        }
        for row in rows {
            output.push_str(&row);
            output.push('\n');
        }
        output
    }
}

/// Escape a string for CSV output.
/// Wraps the value in quotes if it contains commas, quotes, or newlines.
/// Double quotes are escaped by doubling them.
#[must_use]
pub fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Unit of a meter's counter value.
fn counter_unit(meter_type: MeterType, model_code: u8) -> &'static str {
    meter_reading_description(meter_type, model_code)
        .unit
        .unwrap_or_default()
}

fn generation_label(generation: Option<HardwareGeneration>) -> &'static str {
    match generation {
        Some(HardwareGeneration::B0) => "B0",
        Some(HardwareGeneration::B1) => "B1",
        None => "-",
    }
}

// ============================================================================
// Classify formatting
// ============================================================================

/// A classified address with its alias, if it has one.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedAddress {
    pub alias: Option<String>,
    #[serde(flatten)]
    pub identity: DeviceIdentity,
    pub model_name: Option<&'static str>,
}

impl ClassifiedAddress {
    pub fn new(identity: DeviceIdentity, alias: Option<String>) -> Self {
        let model_name = identity
            .meter_type
            .and_then(|t| models::model_name(t, identity.model_code));
        Self {
            alias,
            identity,
            model_name,
        }
    }
}

#[must_use]
pub fn format_classify_text(items: &[ClassifiedAddress], opts: &FormatOptions) -> String {
    let mut output = String::new();
    for item in items {
        let identity = &item.identity;
        let title = match &item.alias {
            Some(alias) => format!("{} ({})", identity.address, alias),
            None => identity.address.to_string(),
        };
        output.push_str(&style::format_title(&title, opts.no_color));

        let elehant = style::format_flag(identity.is_elehant(), opts.no_color);
        output.push_str(&style::format_kv("Elehant", &elehant, opts.no_color));
        if identity.is_elehant() {
            output.push_str(&style::format_kv(
                "Generation",
                generation_label(identity.generation),
                opts.no_color,
            ));
        }
        if let Some(meter_type) = identity.meter_type {
            output.push_str(&style::format_kv(
                "Meter type",
                &meter_type.to_string(),
                opts.no_color,
            ));
            let model = match item.model_name {
                Some(name) => format!("{} ({})", identity.model_code, name),
                None => identity.model_code.to_string(),
            };
            output.push_str(&style::format_kv("Model", &model, opts.no_color));
        }
        let supported = style::format_flag(identity.valid, opts.no_color);
        output.push_str(&style::format_kv("Supported", &supported, opts.no_color));
        output.push('\n');
    }
    output
}

pub fn format_classify_json(items: &[ClassifiedAddress], opts: &FormatOptions) -> Result<String> {
    opts.as_json(&items)
}

#[must_use]
pub fn format_classify_csv(items: &[ClassifiedAddress], opts: &FormatOptions) -> String {
    opts.csv(
        "address,alias,generation,meter_type,model_code,model_name,valid",
        items.iter().map(|item| {
            let identity = &item.identity;
            format!(
                "{},{},{},{},{},{},{}",
                identity.address,
                csv_escape(item.alias.as_deref().unwrap_or_default()),
                if identity.is_elehant() {
                    generation_label(identity.generation)
                } else {
                    ""
                },
                identity
                    .meter_type
                    .map(|t| t.to_string())
                    .unwrap_or_default(),
                identity.model_code,
                csv_escape(item.model_name.unwrap_or_default()),
                identity.valid
            )
        }),
    )
}

// ============================================================================
// Decode / replay formatting
// ============================================================================

/// The outcome of decoding one advertisement, tagged with its address.
#[derive(Debug, Clone, Serialize)]
pub struct DecodedAdvertisement {
    pub address: MacAddress,
    #[serde(flatten)]
    pub outcome: Outcome,
}

fn format_reading_block(reading: &MeterReading, opts: &FormatOptions) -> String {
    let mut output = style::format_title(&reading.display_name, opts.no_color);
    let kv = |key: &str, value: &str| style::format_kv(key, value, opts.no_color);

    let unit = counter_unit(reading.meter_type, reading.model_code);
    output.push_str(&kv("Reading", &format!("{} {}", reading.volume_text(), unit)));
    output.push_str(&kv(
        "Temperature",
        &format!("{} °C", reading.temperature_text()),
    ));
    output.push('\n');
    output.push_str(&kv("Serial", &reading.serial));
    output.push_str(&kv(
        "Model",
        &format!("{} ({})", reading.model_name, reading.model_code),
    ));
    output.push_str(&kv("Firmware", &reading.firmware_text()));
    output.push_str(&kv(
        "Battery",
        &style::format_battery_colored(reading.battery, opts.no_color),
    ));
    output.push_str(&kv(
        "Signal",
        &style::format_signal_bar(reading.rssi, opts.no_color),
    ));
    output
}

#[must_use]
pub fn format_outcomes_text(items: &[DecodedAdvertisement], opts: &FormatOptions) -> String {
    let mut output = String::new();
    for item in items {
        match &item.outcome {
            Outcome::Decoded(reading) => {
                output.push_str(&format_reading_block(reading, opts));
                output.push_str(&style::format_kv(
                    "Address",
                    &item.address.to_string(),
                    opts.no_color,
                ));
                output.push('\n');
            }
            other => {
                output.push_str(&format!(
                    "  {}  {}  {}\n",
                    item.address,
                    style::format_outcome_badge(other.kind(), opts.no_color),
                    other
                ));
            }
        }
    }
    output
}

pub fn format_outcomes_json(items: &[DecodedAdvertisement], opts: &FormatOptions) -> Result<String> {
    opts.as_json(&items)
}

const READING_CSV_HEADER: &str =
    "address,outcome,name,serial,meter_type,model_code,volume,unit,temperature,battery,firmware,rssi";

fn reading_csv_fields(reading: &MeterReading) -> String {
    format!(
        "{},{},{},{},{},{},{},{},{},{}",
        csv_escape(&reading.display_name),
        reading.serial,
        reading.meter_type,
        reading.model_code,
        reading.volume_text(),
        counter_unit(reading.meter_type, reading.model_code),
        reading.temperature_text(),
        reading.battery,
        reading.firmware_text(),
        reading.rssi
    )
}

#[must_use]
pub fn format_outcomes_csv(items: &[DecodedAdvertisement], opts: &FormatOptions) -> String {
    let header = format!("{},detail", READING_CSV_HEADER);
    opts.csv(
        &header,
        items.iter().map(|item| match &item.outcome {
            Outcome::Decoded(reading) => format!(
                "{},{},{},",
                item.address,
                OutcomeKind::Decoded,
                reading_csv_fields(reading)
            ),
            other => format!(
                "{},{},,,,,,,,,,,{}",
                item.address,
                other.kind(),
                csv_escape(&other.to_string())
            ),
        }),
    )
}

fn format_timestamp(observation: &Observation) -> String {
    observation
        .received_at
        .format(&Rfc3339)
        .unwrap_or_else(|_| observation.received_at.to_string())
}

#[must_use]
pub fn format_observations_text(observations: &[&Observation], opts: &FormatOptions) -> String {
    if observations.is_empty() {
        return "No meter readings decoded.\n".to_string();
    }
    let mut output = String::new();
    for observation in observations {
        output.push_str(&format_reading_block(&observation.reading, opts));
        output.push_str(&style::format_kv(
            "Address",
            &observation.address.to_string(),
            opts.no_color,
        ));
        output.push_str(&style::format_kv(
            "Updated",
            &format_timestamp(observation),
            opts.no_color,
        ));
        output.push('\n');
    }
    output
}

pub fn format_observations_json(
    observations: &[&Observation],
    opts: &FormatOptions,
) -> Result<String> {
    opts.as_json(&observations)
}

#[must_use]
pub fn format_observations_csv(observations: &[&Observation], opts: &FormatOptions) -> String {
    let header = format!("{},received_at", READING_CSV_HEADER);
    opts.csv(
        &header,
        observations.iter().map(|observation| {
            format!(
                "{},{},{},{}",
                observation.address,
                OutcomeKind::Decoded,
                reading_csv_fields(&observation.reading),
                format_timestamp(observation)
            )
        }),
    )
}

/// Outcome counters as printed after a replay.
///
/// `skipped` counts capture records that could not be read at all.
#[must_use]
pub fn format_stats_text(
    counts: &BTreeMap<OutcomeKind, u64>,
    skipped: u64,
    no_color: bool,
) -> String {
    let total: u64 = counts.values().sum();
    let mut output = style::format_title("Outcomes", no_color);
    for (kind, count) in counts {
        output.push_str(&style::format_kv(kind.as_str(), &count.to_string(), no_color));
    }
    output.push_str(&style::format_kv("total", &total.to_string(), no_color));
    output.push_str(&style::format_kv("skipped", &skipped.to_string(), no_color));
    output
}

// ============================================================================
// Models formatting
// ============================================================================

/// One row of the model table.
#[derive(Debug, Clone, Serialize)]
pub struct ModelRow {
    pub meter_type: MeterType,
    pub code: u8,
    pub name: &'static str,
    pub supported: bool,
}

/// Model table rows, optionally limited to one family.
#[must_use]
pub fn model_rows(meter_type: Option<MeterType>) -> Vec<ModelRow> {
    METER_MODELS
        .iter()
        .filter(|m| meter_type.is_none_or(|t| m.meter_type == t))
        .map(|m| ModelRow {
            meter_type: m.meter_type,
            code: m.code,
            name: m.name,
            supported: models::is_allowed(HardwareGeneration::B0, m.meter_type, m.code),
        })
        .collect()
}

#[must_use]
pub fn format_models_text(rows: &[ModelRow], opts: &FormatOptions) -> String {
    let mut output = String::new();
    for meter_type in MeterType::ALL {
        let family: Vec<&ModelRow> = rows.iter().filter(|r| r.meter_type == meter_type).collect();
        if family.is_empty() {
            continue;
        }
        output.push_str(&style::format_title(
            &format!("{} ({})", meter_type, meter_type.family_word()),
            opts.no_color,
        ));
        for row in family {
            output.push_str(&format!(
                "  {:>4}  {:<12}  {}\n",
                row.code,
                row.name,
                style::format_flag(row.supported, opts.no_color)
            ));
        }
        output.push('\n');
    }
    output
}

pub fn format_models_json(rows: &[ModelRow], opts: &FormatOptions) -> Result<String> {
    opts.as_json(&rows)
}

#[must_use]
pub fn format_models_csv(rows: &[ModelRow], opts: &FormatOptions) -> String {
    opts.csv(
        "meter_type,code,name,supported",
        rows.iter().map(|row| {
            format!(
                "{},{},{},{}",
                row.meter_type,
                row.code,
                csv_escape(row.name),
                row.supported
            )
        }),
    )
}

// ============================================================================
// Sensors formatting
// ============================================================================

#[must_use]
pub fn format_sensors_text(
    address: &MacAddress,
    sensors: &[SensorDescription],
    opts: &FormatOptions,
) -> String {
    if sensors.is_empty() {
        return format!("{} is not a supported Elehant meter.\n", address);
    }
    let mut output = style::format_title(&address.to_string(), opts.no_color);
    for sensor in sensors {
        let mut notes = Vec::new();
        if sensor.diagnostic {
            notes.push("diagnostic");
        }
        if !sensor.enabled_by_default {
            notes.push("disabled");
        }
        output.push_str(&format!(
            "  {:<21} {:<12} {:<16} {:<5} {}\n",
            sensor.key.as_str(),
            sensor.name,
            sensor.device_class.as_str(),
            sensor.unit.unwrap_or("-"),
            notes.join(", ")
        ));
    }
    output
}

pub fn format_sensors_json(
    address: &MacAddress,
    sensors: &[SensorDescription],
    opts: &FormatOptions,
) -> Result<String> {
    #[derive(Serialize)]
    struct SensorsJson<'a> {
        address: &'a MacAddress,
        sensors: &'a [SensorDescription],
    }

    opts.as_json(&SensorsJson { address, sensors })
}

#[must_use]
pub fn format_sensors_csv(sensors: &[SensorDescription], opts: &FormatOptions) -> String {
    opts.csv(
        "key,name,device_class,unit,state_class,diagnostic,enabled_by_default",
        sensors.iter().map(|sensor| {
            format!(
                "{},{},{},{},{},{},{}",
                sensor.key,
                csv_escape(sensor.name),
                sensor.device_class.as_str(),
                sensor.unit.unwrap_or_default(),
                sensor.state_class.map(|s| s.as_str()).unwrap_or_default(),
                sensor.diagnostic,
                sensor.enabled_by_default
            )
        }),
    )
}
