//! BLE advertisement decoding for Elehant meters.
//!
//! Elehant meters broadcast their state in the manufacturer-specific data of
//! every advertisement, under manufacturer id `0xFFFF`. Decoding needs no
//! connection and no state: one advertisement in, one [`Outcome`] out.
//!
//! # Payload format
//!
//! All fields are little-endian unsigned integers at fixed offsets:
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 3 | Vendor header (ignored) |
//! | 3 | 1 | Packet version (only 1 is understood) |
//! | 4 | 1 | Meter type |
//! | 5 | 1 | Model code |
//! | 6 | 3 | Serial number |
//! | 9 | 4 | Counter, 1/10000 m³ |
//! | 13 | 1 | Battery, % |
//! | 14 | 2 | Temperature, 1/100 °C |
//! | 16 | 1 | Firmware version, 1/10 |
//!
//! The meter type and model in the payload must match the ones encoded in
//! the device address; a mismatch is reported as
//! [`Outcome::IdentityMismatch`] and the payload is discarded.

use std::collections::HashMap;
use std::fmt;

use bytes::Buf;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use elehant_types::models;
use elehant_types::{DeviceIdentity, MANUFACTURER_ID, MacAddress, MeterReading};

use crate::mac::classify;
use crate::util::format_hex;

/// The only packet version this decoder understands.
pub const SUPPORTED_PACKET_VERSION: u8 = 1;

/// Minimum manufacturer data length for a version 1 packet.
pub const MIN_PAYLOAD_LEN: usize = 17;

/// Offset of the packet version byte.
pub const VERSION_OFFSET: usize = 3;

const COUNTER_SCALE: f64 = 10_000.0;
const TEMPERATURE_SCALE: f64 = 100.0;
const FIRMWARE_SCALE: f64 = 10.0;
const MAX_BATTERY: u8 = 100;

/// One advertisement as delivered by the host's BLE scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advertisement {
    /// Advertising device address.
    pub address: MacAddress,
    /// Manufacturer-specific data, keyed by manufacturer id.
    pub manufacturer_data: HashMap<u16, Vec<u8>>,
    /// Received signal strength in dBm.
    pub rssi: i16,
}

impl Advertisement {
    /// Create an advertisement carrying a single Elehant payload.
    #[must_use]
    pub fn new(address: MacAddress, payload: Vec<u8>, rssi: i16) -> Self {
        Self {
            address,
            manufacturer_data: HashMap::from([(MANUFACTURER_ID, payload)]),
            rssi,
        }
    }

    /// The Elehant payload, if the advertisement carries one.
    #[must_use]
    pub fn payload(&self) -> Option<&[u8]> {
        self.manufacturer_data
            .get(&MANUFACTURER_ID)
            .map(Vec::as_slice)
    }
}

/// Why a payload could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedReason {
    /// No manufacturer data under the Elehant manufacturer id.
    MissingManufacturerData,
    /// The payload is shorter than the fixed layout.
    TooShort {
        /// Required length.
        expected: usize,
        /// Received length.
        actual: usize,
    },
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::MissingManufacturerData => write!(
                f,
                "no manufacturer data under id 0x{MANUFACTURER_ID:04X}"
            ),
            MalformedReason::TooShort { expected, actual } => {
                write!(f, "payload requires {expected} bytes, got {actual}")
            }
        }
    }
}

/// Why a device is not decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsupportedReason {
    /// The address does not carry an Elehant prefix.
    NotElehant,
    /// An Elehant device whose hardware generation cannot be decoded.
    UndecodableGeneration,
    /// An Elehant meter whose family or model is not supported.
    UnsupportedModel,
}

impl UnsupportedReason {
    /// Reason an invalid identity is not decoded.
    #[must_use]
    pub fn of(identity: &DeviceIdentity) -> Self {
        match identity.generation {
            None => UnsupportedReason::NotElehant,
            Some(generation) if generation.is_decodable() => UnsupportedReason::UnsupportedModel,
            Some(_) => UnsupportedReason::UndecodableGeneration,
        }
    }
}

impl fmt::Display for UnsupportedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UnsupportedReason::NotElehant => "not an Elehant device",
            UnsupportedReason::UndecodableGeneration => "undecodable hardware generation",
            UnsupportedReason::UnsupportedModel => "unsupported meter model",
        })
    }
}

/// Result of decoding one advertisement.
///
/// Every rejection is a variant rather than an error: each one concerns a
/// single observation and the next advertisement from the same meter is
/// decoded independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The advertisement was decoded.
    Decoded(MeterReading),
    /// The device is not a decodable Elehant meter.
    Unsupported {
        /// Which part of the identity ruled it out.
        reason: UnsupportedReason,
    },
    /// The packet version is not understood.
    VersionMismatch {
        /// Version byte found in the payload.
        found: u8,
    },
    /// The payload declares a different meter than the address.
    IdentityMismatch {
        /// Meter type byte from the address.
        expected_type: u8,
        /// Model code from the address.
        expected_model: u8,
        /// Meter type byte from the payload.
        found_type: u8,
        /// Model code from the payload.
        found_model: u8,
    },
    /// The payload is missing or too short.
    MalformedPayload {
        /// What was wrong with it.
        reason: MalformedReason,
    },
}

impl Outcome {
    /// Kind of this outcome, without its data.
    #[must_use]
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Decoded(_) => OutcomeKind::Decoded,
            Outcome::Unsupported { .. } => OutcomeKind::Unsupported,
            Outcome::VersionMismatch { .. } => OutcomeKind::VersionMismatch,
            Outcome::IdentityMismatch { .. } => OutcomeKind::IdentityMismatch,
            Outcome::MalformedPayload { .. } => OutcomeKind::MalformedPayload,
        }
    }

    /// Whether the advertisement was decoded.
    #[must_use]
    pub fn is_decoded(&self) -> bool {
        matches!(self, Outcome::Decoded(_))
    }

    /// The decoded reading, if any.
    #[must_use]
    pub fn reading(&self) -> Option<&MeterReading> {
        match self {
            Outcome::Decoded(reading) => Some(reading),
            _ => None,
        }
    }

    /// Take the decoded reading, if any.
    #[must_use]
    pub fn into_reading(self) -> Option<MeterReading> {
        match self {
            Outcome::Decoded(reading) => Some(reading),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Decoded(reading) => write!(f, "decoded {}", reading.display_name),
            Outcome::Unsupported { reason } => write!(f, "unsupported device: {reason}"),
            Outcome::VersionMismatch { found } => write!(
                f,
                "unsupported packet version {found} (expected {SUPPORTED_PACKET_VERSION})"
            ),
            Outcome::IdentityMismatch {
                expected_type,
                expected_model,
                found_type,
                found_model,
            } => write!(
                f,
                "payload declares type {found_type} model {found_model}, \
                 address declares type {expected_type} model {expected_model}"
            ),
            Outcome::MalformedPayload { reason } => write!(f, "malformed payload: {reason}"),
        }
    }
}

/// Outcome variant without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// See [`Outcome::Decoded`].
    Decoded,
    /// See [`Outcome::Unsupported`].
    Unsupported,
    /// See [`Outcome::VersionMismatch`].
    VersionMismatch,
    /// See [`Outcome::IdentityMismatch`].
    IdentityMismatch,
    /// See [`Outcome::MalformedPayload`].
    MalformedPayload,
}

impl OutcomeKind {
    /// All kinds, in decode-step order.
    pub const ALL: [OutcomeKind; 5] = [
        OutcomeKind::Decoded,
        OutcomeKind::Unsupported,
        OutcomeKind::VersionMismatch,
        OutcomeKind::IdentityMismatch,
        OutcomeKind::MalformedPayload,
    ];

    /// Short machine-friendly label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            OutcomeKind::Decoded => "decoded",
            OutcomeKind::Unsupported => "unsupported",
            OutcomeKind::VersionMismatch => "version_mismatch",
            OutcomeKind::IdentityMismatch => "identity_mismatch",
            OutcomeKind::MalformedPayload => "malformed_payload",
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify the advertising address and decode the advertisement.
///
/// ```
/// use elehant_core::advertisement::{Advertisement, Outcome, decode_advertisement};
///
/// let payload = vec![
///     0x80, 0x00, 0x00, // header
///     0x01,             // version
///     0x01, 0x01,       // gas, model 1
///     0xD2, 0x04, 0x00, // serial 1234
///     0x50, 0xC3, 0x00, 0x00, // counter 50000
///     85,               // battery
///     0x66, 0x08,       // temperature 2150
///     12,               // firmware
/// ];
/// let adv = Advertisement::new("b0:01:01:00:00:01".parse().unwrap(), payload, -70);
///
/// let Outcome::Decoded(reading) = decode_advertisement(&adv) else { panic!() };
/// assert_eq!(reading.display_name, "Счетчик газа СГБ-1.8: 0001234");
/// assert_eq!(reading.volume_text(), "5.0");
/// ```
#[must_use]
pub fn decode_advertisement(advertisement: &Advertisement) -> Outcome {
    let identity = classify(&advertisement.address);
    decode(
        &identity,
        &advertisement.manufacturer_data,
        advertisement.rssi,
    )
}

/// Decode the manufacturer data of one advertisement.
///
/// Only the entry under [`MANUFACTURER_ID`] is inspected.
#[must_use]
pub fn decode(
    identity: &DeviceIdentity,
    manufacturer_data: &HashMap<u16, Vec<u8>>,
    rssi: i16,
) -> Outcome {
    if !identity.valid {
        return Outcome::Unsupported {
            reason: UnsupportedReason::of(identity),
        };
    }

    match manufacturer_data.get(&MANUFACTURER_ID) {
        Some(payload) => decode_payload(identity, payload, rssi),
        None => {
            debug!(address = %identity.address, "No Elehant manufacturer data");
            Outcome::MalformedPayload {
                reason: MalformedReason::MissingManufacturerData,
            }
        }
    }
}

/// Decode an Elehant payload (the bytes under manufacturer id `0xFFFF`).
#[must_use]
pub fn decode_payload(identity: &DeviceIdentity, payload: &[u8], rssi: i16) -> Outcome {
    let Some(meter_type) = identity.meter_type.filter(|_| identity.valid) else {
        return Outcome::Unsupported {
            reason: UnsupportedReason::of(identity),
        };
    };

    trace!(address = %identity.address, payload = %format_hex(payload), "Decoding payload");

    if payload.len() < MIN_PAYLOAD_LEN {
        debug!(
            address = %identity.address,
            len = payload.len(),
            "Payload too short"
        );
        return Outcome::MalformedPayload {
            reason: MalformedReason::TooShort {
                expected: MIN_PAYLOAD_LEN,
                actual: payload.len(),
            },
        };
    }

    let mut buf = &payload[VERSION_OFFSET..];

    let version = buf.get_u8();
    if version != SUPPORTED_PACKET_VERSION {
        debug!(address = %identity.address, version, "Unsupported packet version");
        return Outcome::VersionMismatch { found: version };
    }

    let found_type = buf.get_u8();
    let found_model = buf.get_u8();
    if found_type != meter_type.code() || found_model != identity.model_code {
        debug!(
            address = %identity.address,
            found_type,
            found_model,
            "Payload identity does not match address"
        );
        return Outcome::IdentityMismatch {
            expected_type: meter_type.code(),
            expected_model: identity.model_code,
            found_type,
            found_model,
        };
    }

    let serial_raw = buf.get_uint_le(3);
    let counter_raw = buf.get_u32_le();
    let battery_raw = buf.get_u8();
    let temperature_raw = buf.get_u16_le();
    let firmware_raw = buf.get_u8();

    let Some(model_name) = models::model_name(meter_type, found_model) else {
        warn!(
            %meter_type,
            model = found_model,
            "Allowed model has no name in the model table"
        );
        return Outcome::Unsupported {
            reason: UnsupportedReason::UnsupportedModel,
        };
    };

    let serial = format!("{serial_raw:07}");
    let reading = MeterReading {
        display_name: meter_type.display_name(model_name, &serial),
        serial,
        volume: f64::from(counter_raw) / COUNTER_SCALE,
        temperature: f64::from(temperature_raw) / TEMPERATURE_SCALE,
        battery: battery_raw.min(MAX_BATTERY),
        firmware: f64::from(firmware_raw) / FIRMWARE_SCALE,
        rssi,
        meter_type,
        model_code: found_model,
        model_name: model_name.to_string(),
    };

    debug!(
        address = %identity.address,
        name = %reading.display_name,
        volume = reading.volume,
        temperature = reading.temperature,
        battery = reading.battery,
        rssi,
        "Decoded meter reading"
    );

    Outcome::Decoded(reading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use elehant_types::{HardwareGeneration, MeterType};

    struct Packet {
        version: u8,
        meter_type: u8,
        model: u8,
        serial: u32,
        counter: u32,
        battery: u8,
        temperature: u16,
        firmware: u8,
    }

    impl Default for Packet {
        fn default() -> Self {
            Self {
                version: 1,
                meter_type: 1,
                model: 1,
                serial: 1234,
                counter: 50_000,
                battery: 85,
                temperature: 2150,
                firmware: 12,
            }
        }
    }

    impl Packet {
        fn bytes(&self) -> Vec<u8> {
            let mut data = vec![0x80, 0x00, 0x00, self.version, self.meter_type, self.model];
            data.extend_from_slice(&self.serial.to_le_bytes()[..3]);
            data.extend_from_slice(&self.counter.to_le_bytes());
            data.push(self.battery);
            data.extend_from_slice(&self.temperature.to_le_bytes());
            data.push(self.firmware);
            data
        }
    }

    fn gas_identity() -> DeviceIdentity {
        classify(&MacAddress::new([0xB0, 0x01, 0x01, 0x00, 0x00, 0x01]))
    }

    #[test]
    fn test_decode_gas_reading() {
        let outcome = decode_payload(&gas_identity(), &Packet::default().bytes(), -70);
        let reading = outcome.into_reading().unwrap();

        assert_eq!(reading.serial, "0001234");
        assert_eq!(reading.volume_text(), "5.0");
        assert_eq!(reading.temperature_text(), "21.5");
        assert_eq!(reading.firmware_text(), "1.2");
        assert_eq!(reading.battery, 85);
        assert_eq!(reading.rssi, -70);
        assert_eq!(reading.meter_type, MeterType::Gas);
        assert_eq!(reading.model_code, 1);
        assert_eq!(reading.model_name, "СГБ-1.8");
        assert_eq!(reading.display_name, "Счетчик газа СГБ-1.8: 0001234");
    }

    #[test]
    fn test_decode_water_reading() {
        let identity = classify(&MacAddress::new([0xB0, 0x04, 0x02, 0x10, 0x20, 0x30]));
        let packet = Packet {
            meter_type: 2,
            model: 4,
            serial: 9_876_543,
            counter: 1_234_567,
            ..Packet::default()
        };

        let reading = decode_payload(&identity, &packet.bytes(), -50)
            .into_reading()
            .unwrap();
        assert_eq!(reading.serial, "9876543");
        assert_eq!(reading.volume_text(), "123.4567");
        assert_eq!(reading.display_name, "Счетчик воды СВТ-15: 9876543");
    }

    #[test]
    fn test_decode_clamps_battery() {
        let packet = Packet {
            battery: 150,
            ..Packet::default()
        };
        let reading = decode_payload(&gas_identity(), &packet.bytes(), 0)
            .into_reading()
            .unwrap();
        assert_eq!(reading.battery, 100);
    }

    #[test]
    fn test_decode_max_field_values() {
        let packet = Packet {
            serial: 0x00FF_FFFF,
            counter: u32::MAX,
            temperature: u16::MAX,
            firmware: u8::MAX,
            battery: u8::MAX,
            ..Packet::default()
        };
        let reading = decode_payload(&gas_identity(), &packet.bytes(), 0)
            .into_reading()
            .unwrap();
        assert_eq!(reading.serial, "16777215");
        assert!((reading.volume - 429_496.7295).abs() < 1e-9);
        assert!((reading.temperature - 655.35).abs() < 1e-9);
        assert!((reading.firmware - 25.5).abs() < 1e-9);
        assert_eq!(reading.battery, 100);
    }

    #[test]
    fn test_decode_zero_serial_is_padded() {
        let packet = Packet {
            serial: 0,
            ..Packet::default()
        };
        let reading = decode_payload(&gas_identity(), &packet.bytes(), 0)
            .into_reading()
            .unwrap();
        assert_eq!(reading.serial, "0000000");
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        let mut bytes = Packet::default().bytes();
        bytes.extend_from_slice(&[0xAA, 0xBB, 0xCC]);
        assert!(decode_payload(&gas_identity(), &bytes, 0).is_decoded());
    }

    #[test]
    fn test_decode_invalid_identity_is_unsupported() {
        let identity = classify(&MacAddress::new([0xB1, 0x01, 0x01, 0, 0, 0]));
        let outcome = decode_payload(&identity, &Packet::default().bytes(), 0);
        assert_eq!(
            outcome,
            Outcome::Unsupported {
                reason: UnsupportedReason::UndecodableGeneration
            }
        );
    }

    #[test]
    fn test_decode_unsupported_wins_over_malformed() {
        let identity = classify(&MacAddress::new([0xAA, 0, 0, 0, 0, 0]));
        assert_eq!(
            decode(&identity, &HashMap::new(), 0),
            Outcome::Unsupported {
                reason: UnsupportedReason::NotElehant
            }
        );
    }

    #[test]
    fn test_unsupported_reason_distinguishes_identities() {
        let reason = |octets| UnsupportedReason::of(&classify(&MacAddress::new(octets)));
        assert_eq!(reason([0x11, 0x01, 0x01, 0, 0, 0]), UnsupportedReason::NotElehant);
        assert_eq!(
            reason([0xB1, 0x01, 0x01, 0, 0, 0]),
            UnsupportedReason::UndecodableGeneration
        );
        // Electric family: allowed-model table is empty.
        assert_eq!(
            reason([0xB0, 0x01, 0x03, 0, 0, 0]),
            UnsupportedReason::UnsupportedModel
        );
        // Unknown type byte.
        assert_eq!(
            reason([0xB0, 0x01, 0x09, 0, 0, 0]),
            UnsupportedReason::UnsupportedModel
        );
    }

    #[test]
    fn test_decode_missing_manufacturer_data() {
        let data = HashMap::from([(0x0702, Packet::default().bytes())]);
        let outcome = decode(&gas_identity(), &data, 0);
        assert_eq!(
            outcome,
            Outcome::MalformedPayload {
                reason: MalformedReason::MissingManufacturerData
            }
        );
    }

    #[test]
    fn test_decode_short_payload() {
        let bytes = Packet::default().bytes();
        let outcome = decode_payload(&gas_identity(), &bytes[..16], 0);
        assert_eq!(
            outcome,
            Outcome::MalformedPayload {
                reason: MalformedReason::TooShort {
                    expected: 17,
                    actual: 16
                }
            }
        );
    }

    #[test]
    fn test_decode_empty_payload() {
        let outcome = decode_payload(&gas_identity(), &[], 0);
        assert_eq!(outcome.kind(), OutcomeKind::MalformedPayload);
    }

    #[test]
    fn test_decode_version_mismatch() {
        for version in [0u8, 2, 0xFF] {
            let packet = Packet {
                version,
                ..Packet::default()
            };
            let outcome = decode_payload(&gas_identity(), &packet.bytes(), 0);
            assert_eq!(outcome, Outcome::VersionMismatch { found: version });
        }
    }

    #[test]
    fn test_decode_version_checked_before_identity() {
        let packet = Packet {
            version: 2,
            meter_type: 2,
            ..Packet::default()
        };
        let outcome = decode_payload(&gas_identity(), &packet.bytes(), 0);
        assert_eq!(outcome.kind(), OutcomeKind::VersionMismatch);
    }

    #[test]
    fn test_decode_type_mismatch() {
        let packet = Packet {
            meter_type: 2,
            ..Packet::default()
        };
        let outcome = decode_payload(&gas_identity(), &packet.bytes(), 0);
        assert_eq!(
            outcome,
            Outcome::IdentityMismatch {
                expected_type: 1,
                expected_model: 1,
                found_type: 2,
                found_model: 1,
            }
        );
    }

    #[test]
    fn test_decode_model_mismatch() {
        let packet = Packet {
            model: 2,
            ..Packet::default()
        };
        let outcome = decode_payload(&gas_identity(), &packet.bytes(), 0);
        assert_eq!(outcome.kind(), OutcomeKind::IdentityMismatch);
    }

    #[test]
    fn test_decode_hand_built_valid_identity_without_name() {
        // A valid identity whose model is absent from the name table.
        let identity = DeviceIdentity {
            address: MacAddress::new([0xB0, 0x63, 0x01, 0, 0, 0]),
            generation: Some(HardwareGeneration::B0),
            meter_type: Some(MeterType::Gas),
            model_code: 0x63,
            valid: true,
        };
        let packet = Packet {
            model: 0x63,
            ..Packet::default()
        };
        assert_eq!(
            decode_payload(&identity, &packet.bytes(), 0),
            Outcome::Unsupported {
                reason: UnsupportedReason::UnsupportedModel
            }
        );
    }

    #[test]
    fn test_decode_advertisement_end_to_end() {
        let adv = Advertisement::new(
            "B0:01:01:AA:BB:CC".parse().unwrap(),
            Packet::default().bytes(),
            -64,
        );
        assert!(adv.payload().is_some());
        let reading = decode_advertisement(&adv).into_reading().unwrap();
        assert_eq!(reading.rssi, -64);
    }

    #[test]
    fn test_outcome_display() {
        let unsupported = Outcome::Unsupported {
            reason: UnsupportedReason::NotElehant,
        };
        assert_eq!(
            unsupported.to_string(),
            "unsupported device: not an Elehant device"
        );
        assert_eq!(
            Outcome::VersionMismatch { found: 3 }.to_string(),
            "unsupported packet version 3 (expected 1)"
        );
        let malformed = Outcome::MalformedPayload {
            reason: MalformedReason::TooShort {
                expected: 17,
                actual: 2,
            },
        };
        assert_eq!(
            malformed.to_string(),
            "malformed payload: payload requires 17 bytes, got 2"
        );
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_string(&Outcome::VersionMismatch { found: 2 }).unwrap();
        assert_eq!(json, r#"{"outcome":"version_mismatch","found":2}"#);

        let unsupported = Outcome::Unsupported {
            reason: UnsupportedReason::UndecodableGeneration,
        };
        let json = serde_json::to_string(&unsupported).unwrap();
        assert_eq!(
            json,
            r#"{"outcome":"unsupported","reason":"undecodable_generation"}"#
        );

        let outcome = decode_payload(&gas_identity(), &Packet::default().bytes(), -70);
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.starts_with(r#"{"outcome":"decoded","serial":"0001234""#));
    }

    #[test]
    fn test_outcome_kind_labels() {
        let labels: Vec<&str> = OutcomeKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            labels,
            [
                "decoded",
                "unsupported",
                "version_mismatch",
                "identity_mismatch",
                "malformed_payload"
            ]
        );
    }
}
