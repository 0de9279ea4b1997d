//! Core types for Elehant meter data.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::address::MacAddress;
use crate::error::ParseError;

/// Manufacturer name shown for every Elehant meter.
pub const MANUFACTURER_NAME: &str = "Элехант";

/// Meter family.
///
/// The discriminant is the wire encoding: the same byte value appears in the
/// device address and in the advertisement payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum MeterType {
    /// Gas meter.
    Gas = 1,
    /// Water meter.
    Water = 2,
    /// Electricity meter.
    Electric = 3,
    /// Heat meter.
    Heat = 4,
}

impl MeterType {
    /// All meter families in wire order.
    pub const ALL: [MeterType; 4] = [
        MeterType::Gas,
        MeterType::Water,
        MeterType::Electric,
        MeterType::Heat,
    ];

    /// Decode a meter family from its wire byte.
    ///
    /// ```
    /// use elehant_types::MeterType;
    ///
    /// assert_eq!(MeterType::from_code(2), Some(MeterType::Water));
    /// assert_eq!(MeterType::from_code(0), None);
    /// ```
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(MeterType::Gas),
            2 => Some(MeterType::Water),
            3 => Some(MeterType::Electric),
            4 => Some(MeterType::Heat),
            _ => None,
        }
    }

    /// Wire byte of this family.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Genitive family word used in the meter's display name.
    #[must_use]
    pub const fn family_word(self) -> &'static str {
        match self {
            MeterType::Gas => "газа",
            MeterType::Water => "воды",
            MeterType::Electric => "электричества",
            MeterType::Heat => "тепла",
        }
    }

    /// Compose the display name of a meter of this family.
    ///
    /// ```
    /// use elehant_types::MeterType;
    ///
    /// assert_eq!(
    ///     MeterType::Gas.display_name("СГБ-1.8", "0001234"),
    ///     "Счетчик газа СГБ-1.8: 0001234"
    /// );
    /// ```
    #[must_use]
    pub fn display_name(self, model_name: &str, serial: &str) -> String {
        format!("Счетчик {} {}: {}", self.family_word(), model_name, serial)
    }
}

impl fmt::Display for MeterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeterType::Gas => write!(f, "Gas"),
            MeterType::Water => write!(f, "Water"),
            MeterType::Electric => write!(f, "Electric"),
            MeterType::Heat => write!(f, "Heat"),
        }
    }
}

impl FromStr for MeterType {
    type Err = ParseError;

    /// Parse a family name (case-insensitive) or its wire byte.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "gas" | "1" => Ok(MeterType::Gas),
            "water" | "2" => Ok(MeterType::Water),
            "electric" | "electricity" | "3" => Ok(MeterType::Electric),
            "heat" | "4" => Ok(MeterType::Heat),
            _ => Err(ParseError::UnknownMeterType(s.to_string())),
        }
    }
}

/// Address encoding generation, selected by the first address byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HardwareGeneration {
    /// `B0:<model>:<type>:..` addresses. Payloads are decodable.
    B0,
    /// `B1:..` addresses. Recognised as Elehant, payload format unknown.
    B1,
}

impl HardwareGeneration {
    /// Select the generation from the first address byte.
    #[must_use]
    pub const fn from_prefix(prefix: u8) -> Option<Self> {
        match prefix {
            0xB0 => Some(HardwareGeneration::B0),
            0xB1 => Some(HardwareGeneration::B1),
            _ => None,
        }
    }

    /// First address byte of this generation.
    #[must_use]
    pub const fn prefix(self) -> u8 {
        match self {
            HardwareGeneration::B0 => 0xB0,
            HardwareGeneration::B1 => 0xB1,
        }
    }

    /// Whether advertisements from this generation can be decoded.
    #[must_use]
    pub const fn is_decodable(self) -> bool {
        matches!(self, HardwareGeneration::B0)
    }
}

/// Meter identity derived from a device address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceIdentity {
    /// The address the identity was derived from.
    pub address: MacAddress,
    /// Hardware generation, `None` for non-Elehant devices.
    pub generation: Option<HardwareGeneration>,
    /// Meter family, `None` when it could not be read from the address.
    pub meter_type: Option<MeterType>,
    /// Model code within the family (0 when not read from the address).
    pub model_code: u8,
    /// True only when the family/model pair is in the allowed-model table.
    pub valid: bool,
}

impl DeviceIdentity {
    /// Identity of an address that yields no meter information.
    #[must_use]
    pub const fn unrecognized(address: MacAddress, generation: Option<HardwareGeneration>) -> Self {
        Self {
            address,
            generation,
            meter_type: None,
            model_code: 0,
            valid: false,
        }
    }

    /// Whether the address belongs to an Elehant device of any generation.
    #[must_use]
    pub const fn is_elehant(&self) -> bool {
        self.generation.is_some()
    }
}

/// Decoded telemetry from one advertisement.
///
/// Every field holds its final, scaled value; hosts do not re-scale.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeterReading {
    /// Meter serial number, 7 digits, zero padded.
    pub serial: String,
    /// Counter value in m³ (or the family's energy unit).
    pub volume: f64,
    /// Meter temperature in °C.
    pub temperature: f64,
    /// Battery level in percent (0-100).
    pub battery: u8,
    /// Firmware version.
    pub firmware: f64,
    /// Signal strength of the advertisement in dBm.
    pub rssi: i16,
    /// Meter family.
    pub meter_type: MeterType,
    /// Model code within the family.
    pub model_code: u8,
    /// Model label.
    pub model_name: String,
    /// Human-readable meter name.
    pub display_name: String,
}

impl MeterReading {
    /// Counter value as text (`"5.0"`, `"123.4567"`).
    #[must_use]
    pub fn volume_text(&self) -> String {
        decimal_text(self.volume)
    }

    /// Temperature as text (`"21.5"`).
    #[must_use]
    pub fn temperature_text(&self) -> String {
        decimal_text(self.temperature)
    }

    /// Firmware version as text (`"1.2"`).
    #[must_use]
    pub fn firmware_text(&self) -> String {
        decimal_text(self.firmware)
    }

    /// Device metadata for the host's device registry.
    #[must_use]
    pub fn info(&self) -> MeterInfo {
        MeterInfo {
            name: self.display_name.clone(),
            serial: self.serial.clone(),
            model: self.model_name.clone(),
            firmware: self.firmware_text(),
            manufacturer: MANUFACTURER_NAME.to_string(),
        }
    }

    /// Coarse signal strength bucket.
    #[must_use]
    pub fn signal_level(&self) -> SignalLevel {
        SignalLevel::from_rssi(self.rssi)
    }

    /// Coarse battery bucket.
    #[must_use]
    pub fn battery_level(&self) -> BatteryLevel {
        BatteryLevel::from_percent(self.battery)
    }
}

/// Shortest text that reads back as the same value, always with a decimal
/// point (`5.0` rather than `5`).
fn decimal_text(value: f64) -> String {
    format!("{value:?}")
}

/// Device metadata of a decoded meter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeterInfo {
    /// Display name.
    pub name: String,
    /// Serial number.
    pub serial: String,
    /// Model label.
    pub model: String,
    /// Firmware version text.
    pub firmware: String,
    /// Manufacturer.
    pub manufacturer: String,
}

/// Signal strength bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SignalLevel {
    /// Below -85 dBm.
    Weak = 1,
    /// -85 to -61 dBm.
    Fair = 2,
    /// -60 dBm and above.
    Strong = 3,
}

impl SignalLevel {
    /// Bucket an RSSI value.
    ///
    /// ```
    /// use elehant_types::SignalLevel;
    ///
    /// assert_eq!(SignalLevel::from_rssi(-90), SignalLevel::Weak);
    /// assert_eq!(SignalLevel::from_rssi(-70), SignalLevel::Fair);
    /// assert_eq!(SignalLevel::from_rssi(-60), SignalLevel::Strong);
    /// ```
    #[must_use]
    pub const fn from_rssi(rssi: i16) -> Self {
        if rssi < -85 {
            SignalLevel::Weak
        } else if rssi < -60 {
            SignalLevel::Fair
        } else {
            SignalLevel::Strong
        }
    }
}

impl fmt::Display for SignalLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalLevel::Weak => write!(f, "weak"),
            SignalLevel::Fair => write!(f, "fair"),
            SignalLevel::Strong => write!(f, "strong"),
        }
    }
}

/// Battery charge bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BatteryLevel {
    /// Below 60%.
    Low,
    /// 60% to 89%.
    Medium,
    /// 90% and above.
    High,
}

impl BatteryLevel {
    /// Bucket a battery percentage.
    #[must_use]
    pub const fn from_percent(percent: u8) -> Self {
        if percent >= 90 {
            BatteryLevel::High
        } else if percent >= 60 {
            BatteryLevel::Medium
        } else {
            BatteryLevel::Low
        }
    }
}

impl fmt::Display for BatteryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatteryLevel::Low => write!(f, "low"),
            BatteryLevel::Medium => write!(f, "medium"),
            BatteryLevel::High => write!(f, "high"),
        }
    }
}
