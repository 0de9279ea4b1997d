//! Core decoder for Elehant BLE utility meters.
//!
//! Elehant gas, water, electric and heat meters broadcast their readings in
//! BLE advertisements. This crate turns one advertisement into a typed
//! [`Outcome`] without connecting to the meter.
//!
//! # Features
//!
//! - **Address classification**: meter family and model from the MAC address
//! - **Payload decoding**: serial, counter, battery, temperature, firmware
//! - **Explicit rejections**: unsupported devices, version and identity
//!   mismatches, malformed payloads, all as [`Outcome`] variants
//! - **Sensor table**: host-facing descriptions of every decoded value
//! - **Tracking**: last decoded reading per meter, with outcome counters
//! - **Captures**: replay JSON-lines dumps of advertisements
//!
//! # Supported Meters
//!
//! | Family | Address byte 2 | Models |
//! |--------|----------------|--------|
//! | Gas | 1 | 1-5, 16-20, 32-36, 48-52, 64-68, 80-84 |
//! | Water | 2 | 1-6 |
//! | Electric | 3 | none yet |
//! | Heat | 4 | none yet |
//!
//! # Quick Start
//!
//! ```
//! use elehant_core::{Advertisement, Outcome, decode_advertisement, parse_hex};
//!
//! let payload = parse_hex("800000 01 0101 D20400 50C30000 55 6608 0C").unwrap();
//! let adv = Advertisement::new("b0:01:01:12:34:56".parse().unwrap(), payload, -70);
//!
//! match decode_advertisement(&adv) {
//!     Outcome::Decoded(reading) => {
//!         println!("{}: {} m³", reading.display_name, reading.volume_text());
//!     }
//!     other => println!("skipped: {other}"),
//! }
//! ```

pub mod advertisement;
pub mod capture;
pub mod error;
pub mod mac;
pub mod sensors;
pub mod tracker;
pub mod util;

pub use elehant_types::models;
pub use elehant_types::types;

pub use advertisement::{
    Advertisement, MalformedReason, Outcome, OutcomeKind, UnsupportedReason, decode,
    decode_advertisement, decode_payload,
};
pub use capture::{CaptureReader, parse_record};
pub use error::{Error, Result};
pub use mac::{classify, classify_str};
pub use sensors::{SensorDescription, SensorKey, SensorValue, describe, descriptions};
pub use tracker::{MeterTracker, Observation};
pub use util::{format_hex, parse_hex};

// Re-export from elehant-types
pub use elehant_types::{
    BatteryLevel, DeviceIdentity, HardwareGeneration, MANUFACTURER_ID, MacAddress, MeterInfo,
    MeterReading, MeterType, ParseError, SignalLevel,
};
