//! Meter classification from the device address.
//!
//! Elehant meters encode their family and model in the BLE address itself:
//!
//! | Byte | Meaning |
//! |------|---------|
//! | 0 | Hardware generation prefix (`0xB0` decodable, `0xB1` not yet) |
//! | 1 | Model code |
//! | 2 | Meter type (1 gas, 2 water, 3 electric, 4 heat) |
//! | 3-5 | Device specific |
//!
//! Classification runs before any payload is touched, so non-Elehant devices
//! are rejected cheaply.

use tracing::debug;

use elehant_types::models;
use elehant_types::{DeviceIdentity, HardwareGeneration, MacAddress, MeterType, ParseResult};

/// Address byte holding the generation prefix.
pub const PREFIX_OFFSET: usize = 0;
/// Address byte holding the model code.
pub const MODEL_OFFSET: usize = 1;
/// Address byte holding the meter type.
pub const TYPE_OFFSET: usize = 2;

/// Classify a device address.
///
/// Never fails: anything that is not a known, allowed meter comes back with
/// `valid == false`.
///
/// ```
/// use elehant_core::mac::classify;
/// use elehant_types::{MacAddress, MeterType};
///
/// let mac: MacAddress = "b0:01:01:aa:bb:cc".parse().unwrap();
/// let identity = classify(&mac);
/// assert!(identity.valid);
/// assert_eq!(identity.meter_type, Some(MeterType::Gas));
/// assert_eq!(identity.model_code, 1);
/// ```
#[must_use]
pub fn classify(address: &MacAddress) -> DeviceIdentity {
    let prefix = address.octet(PREFIX_OFFSET);

    let generation = match HardwareGeneration::from_prefix(prefix) {
        Some(generation) => generation,
        None => {
            debug!(%address, prefix, "Not an Elehant device");
            return DeviceIdentity::unrecognized(*address, None);
        }
    };

    if !generation.is_decodable() {
        debug!(%address, ?generation, "Elehant device recognised, data undecodable");
        return DeviceIdentity::unrecognized(*address, Some(generation));
    }

    let model_code = address.octet(MODEL_OFFSET);
    let type_code = address.octet(TYPE_OFFSET);

    let Some(meter_type) = MeterType::from_code(type_code) else {
        debug!(%address, type_code, "Unknown meter type in address");
        return DeviceIdentity {
            model_code,
            ..DeviceIdentity::unrecognized(*address, Some(generation))
        };
    };

    let valid = models::is_allowed(generation, meter_type, model_code);
    debug!(%address, ?generation, %meter_type, model_code, valid, "Classified address");

    DeviceIdentity {
        address: *address,
        generation: Some(generation),
        meter_type: Some(meter_type),
        model_code,
        valid,
    }
}

/// Parse a textual address and classify it.
///
/// # Errors
///
/// Returns [`elehant_types::ParseError::InvalidAddress`] if `address` is not
/// a 6-byte MAC address.
pub fn classify_str(address: &str) -> ParseResult<DeviceIdentity> {
    let mac: MacAddress = address.parse()?;
    Ok(classify(&mac))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Valid exactly when the address carries the B0 prefix and an allowed pair.
        #[test]
        fn classify_matches_table(octets in any::<[u8; 6]>()) {
            let identity = classify(&MacAddress::new(octets));
            let expected = octets[0] == 0xB0
                && MeterType::from_code(octets[2])
                    .is_some_and(|t| models::is_allowed(HardwareGeneration::B0, t, octets[1]));
            prop_assert_eq!(identity.valid, expected);
        }
    }
}
