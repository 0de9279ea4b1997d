//! Platform-agnostic types for Elehant BLE utility meters.
//!
//! This crate provides the shared vocabulary used by the decoder in
//! `elehant-core` and by hosts that consume its output.
//!
//! # Features
//!
//! - Meter families and hardware generations
//! - Device addresses with case-insensitive parsing
//! - Allowed-model and model-name tables
//! - Decoded reading and device metadata records
//! - Error types for parsing host-supplied text
//!
//! # Example
//!
//! ```
//! use elehant_types::{MacAddress, MeterType, models};
//!
//! let mac: MacAddress = "b0:01:01:12:34:56".parse().unwrap();
//! assert_eq!(MeterType::from_code(mac.octet(2)), Some(MeterType::Gas));
//! assert_eq!(models::model_name(MeterType::Gas, mac.octet(1)), Some("СГБ-1.8"));
//! ```

pub mod address;
pub mod error;
pub mod models;
pub mod types;

pub use address::MacAddress;
pub use error::{ParseError, ParseResult};
pub use models::MeterModel;
pub use types::{
    BatteryLevel, DeviceIdentity, HardwareGeneration, MANUFACTURER_NAME, MeterInfo, MeterReading,
    MeterType, SignalLevel,
};

/// Manufacturer identifier under which Elehant meters publish their data.
pub const MANUFACTURER_ID: u16 = 0xFFFF;
