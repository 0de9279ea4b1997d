//! Sensor descriptions for home-automation hosts.
//!
//! Each decoded meter is exposed as a handful of sensors. The table below is
//! the generic set; the `meter_reading` row is specialised per meter family
//! by [`descriptions`].
//!
//! | Key | Label | Device class | Unit | Diagnostic |
//! |-----|-------|--------------|------|------------|
//! | `temperature` | Температура | temperature | °C | no |
//! | `meter_reading` | Показания | gas | m³ | no |
//! | `battery` | Батарея | battery | % | yes |
//! | `rssi` | Сигнал | signal_strength | dBm | yes |
//! | `timestamp` | Обновлено | timestamp | | yes, disabled by default |

use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use elehant_types::{DeviceIdentity, MeterType};

use crate::tracker::Observation;

/// Water meter models that measure the hot-water line.
pub const HOT_WATER_MODELS: &[u8] = &[4, 6];

/// Sensor identifier, stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKey {
    /// Meter temperature.
    Temperature,
    /// Counter value.
    MeterReading,
    /// Counter value of a hot-water meter.
    MeterReadingSecond,
    /// Battery percentage.
    Battery,
    /// Advertisement signal strength.
    Rssi,
    /// Time of the last decoded advertisement.
    Timestamp,
}

impl SensorKey {
    /// Key as used in host entity ids.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SensorKey::Temperature => "temperature",
            SensorKey::MeterReading => "meter_reading",
            SensorKey::MeterReadingSecond => "meter_reading_second",
            SensorKey::Battery => "battery",
            SensorKey::Rssi => "rssi",
            SensorKey::Timestamp => "timestamp",
        }
    }

    /// Read this sensor's value from an observation.
    #[must_use]
    pub fn value(self, observation: &Observation) -> SensorValue {
        let reading = &observation.reading;
        match self {
            SensorKey::Temperature => SensorValue::Float(reading.temperature),
            SensorKey::MeterReading | SensorKey::MeterReadingSecond => {
                SensorValue::Float(reading.volume)
            }
            SensorKey::Battery => SensorValue::Integer(i64::from(reading.battery)),
            SensorKey::Rssi => SensorValue::Integer(i64::from(reading.rssi)),
            SensorKey::Timestamp => SensorValue::Timestamp(observation.received_at),
        }
    }
}

impl fmt::Display for SensorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a sensor measures, in home-automation terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    /// Meter temperature.
    Temperature,
    /// Gas volume.
    Gas,
    /// Water volume.
    Water,
    /// Electric or heat energy.
    Energy,
    /// Battery charge.
    Battery,
    /// Received signal strength.
    SignalStrength,
    /// Point in time.
    Timestamp,
}

impl DeviceClass {
    /// Snake-case name, as used by home-automation hosts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DeviceClass::Temperature => "temperature",
            DeviceClass::Gas => "gas",
            DeviceClass::Water => "water",
            DeviceClass::Energy => "energy",
            DeviceClass::Battery => "battery",
            DeviceClass::SignalStrength => "signal_strength",
            DeviceClass::Timestamp => "timestamp",
        }
    }
}

/// How a sensor's values accumulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateClass {
    /// Instantaneous value.
    Measurement,
    /// Monotonic counter.
    Total,
}

impl StateClass {
    /// Snake-case name, as used by home-automation hosts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            StateClass::Measurement => "measurement",
            StateClass::Total => "total",
        }
    }
}

/// Host-facing description of one sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SensorDescription {
    /// Stable identifier of the sensor.
    pub key: SensorKey,
    /// Label shown to the user.
    pub name: &'static str,
    /// What the sensor measures.
    pub device_class: DeviceClass,
    /// Unit of measurement, if the value has one.
    pub unit: Option<&'static str>,
    /// How values accumulate, `None` for non-numeric sensors.
    pub state_class: Option<StateClass>,
    /// Whether the sensor belongs to the diagnostic category.
    pub diagnostic: bool,
    /// Whether hosts should enable the sensor when it is first created.
    pub enabled_by_default: bool,
}

const TEMPERATURE: SensorDescription = SensorDescription {
    key: SensorKey::Temperature,
    name: "Температура",
    device_class: DeviceClass::Temperature,
    unit: Some("°C"),
    state_class: Some(StateClass::Measurement),
    diagnostic: false,
    enabled_by_default: true,
};

const METER_READING: SensorDescription = SensorDescription {
    key: SensorKey::MeterReading,
    name: "Показания",
    device_class: DeviceClass::Gas,
    unit: Some("m³"),
    state_class: Some(StateClass::Total),
    diagnostic: false,
    enabled_by_default: true,
};

const BATTERY: SensorDescription = SensorDescription {
    key: SensorKey::Battery,
    name: "Батарея",
    device_class: DeviceClass::Battery,
    unit: Some("%"),
    state_class: Some(StateClass::Measurement),
    diagnostic: true,
    enabled_by_default: true,
};

const RSSI: SensorDescription = SensorDescription {
    key: SensorKey::Rssi,
    name: "Сигнал",
    device_class: DeviceClass::SignalStrength,
    unit: Some("dBm"),
    state_class: Some(StateClass::Measurement),
    diagnostic: true,
    enabled_by_default: true,
};

const TIMESTAMP: SensorDescription = SensorDescription {
    key: SensorKey::Timestamp,
    name: "Обновлено",
    device_class: DeviceClass::Timestamp,
    unit: None,
    state_class: None,
    diagnostic: true,
    enabled_by_default: false,
};

/// The generic sensor table, before family specialisation.
pub const BASE_SENSORS: [SensorDescription; 5] =
    [TEMPERATURE, METER_READING, BATTERY, RSSI, TIMESTAMP];

/// Specialise the `meter_reading` description for a meter.
#[must_use]
pub fn meter_reading_description(meter_type: MeterType, model_code: u8) -> SensorDescription {
    match meter_type {
        MeterType::Gas => METER_READING,
        MeterType::Water if HOT_WATER_MODELS.contains(&model_code) => SensorDescription {
            key: SensorKey::MeterReadingSecond,
            name: "Вода гор",
            device_class: DeviceClass::Water,
            ..METER_READING
        },
        MeterType::Water => SensorDescription {
            name: "Вода хол",
            device_class: DeviceClass::Water,
            ..METER_READING
        },
        MeterType::Electric => SensorDescription {
            device_class: DeviceClass::Energy,
            unit: Some("kWh"),
            ..METER_READING
        },
        MeterType::Heat => SensorDescription {
            device_class: DeviceClass::Energy,
            unit: Some("Gcal"),
            ..METER_READING
        },
    }
}

/// Sensor descriptions for a meter family and model.
///
/// ```
/// use elehant_core::sensors::{SensorKey, descriptions};
/// use elehant_types::MeterType;
///
/// let sensors = descriptions(MeterType::Water, 4);
/// assert_eq!(sensors[1].key, SensorKey::MeterReadingSecond);
/// assert_eq!(sensors[1].name, "Вода гор");
/// ```
#[must_use]
pub fn descriptions(meter_type: MeterType, model_code: u8) -> Vec<SensorDescription> {
    BASE_SENSORS
        .iter()
        .map(|desc| match desc.key {
            SensorKey::MeterReading => meter_reading_description(meter_type, model_code),
            _ => *desc,
        })
        .collect()
}

/// Sensor descriptions for a classified device; empty when it is not a
/// supported meter.
#[must_use]
pub fn describe(identity: &DeviceIdentity) -> Vec<SensorDescription> {
    match identity.meter_type {
        Some(meter_type) if identity.valid => descriptions(meter_type, identity.model_code),
        _ => Vec::new(),
    }
}

/// Every sensor of an observation with its current value.
#[must_use]
pub fn sensor_values(observation: &Observation) -> Vec<(SensorDescription, SensorValue)> {
    let reading = &observation.reading;
    descriptions(reading.meter_type, reading.model_code)
        .into_iter()
        .map(|desc| (desc, desc.key.value(observation)))
        .collect()
}

/// A sensor's state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SensorValue {
    /// Scaled measurement.
    Float(f64),
    /// Whole-number measurement such as battery or RSSI.
    Integer(i64),
    /// Receive time, serialised as RFC 3339.
    Timestamp(#[serde(with = "time::serde::rfc3339")] OffsetDateTime),
}

impl fmt::Display for SensorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorValue::Float(value) => write!(f, "{value:?}"),
            SensorValue::Integer(value) => write!(f, "{value}"),
            SensorValue::Timestamp(value) => {
                let text = value.format(&Rfc3339).map_err(|_| fmt::Error)?;
                f.write_str(&text)
            }
        }
    }
}
