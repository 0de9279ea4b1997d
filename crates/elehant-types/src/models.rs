//! Model tables for Elehant meters.
//!
//! Two tables drive classification and naming:
//!
//! - the allowed-model table, per [`HardwareGeneration`] and [`MeterType`],
//!   which decides whether an address is decodable at all;
//! - the model-name table, which maps a `(meter type, model code)` pair to
//!   the label printed on the meter.
//!
//! The name table also carries labels for Electric and Heat meters even
//! though no Electric or Heat model is allowed yet. Those families keep
//! empty allowed sets until their payloads are confirmed.

use crate::types::{HardwareGeneration, MeterType};

/// Allowed model codes for B0 gas meters.
pub const B0_GAS_MODELS: &[u8] = &[
    1, 2, 3, 4, 5, 16, 17, 18, 19, 20, 32, 33, 34, 35, 36, 48, 49, 50, 51, 52, 64, 65, 66, 67,
    68, 80, 81, 82, 83, 84,
];

/// Allowed model codes for B0 water meters.
pub const B0_WATER_MODELS: &[u8] = &[1, 2, 3, 4, 5, 6];

/// Allowed model codes for B0 electricity meters.
pub const B0_ELECTRIC_MODELS: &[u8] = &[];

/// Allowed model codes for B0 heat meters.
pub const B0_HEAT_MODELS: &[u8] = &[];

/// A named meter model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeterModel {
    /// Meter family.
    pub meter_type: MeterType,
    /// Model code within the family.
    pub code: u8,
    /// Label printed on the meter.
    pub name: &'static str,
}

impl MeterModel {
    const fn new(meter_type: MeterType, code: u8, name: &'static str) -> Self {
        Self {
            meter_type,
            code,
            name,
        }
    }
}

/// Every known meter model label.
pub static METER_MODELS: &[MeterModel] = &[
    MeterModel::new(MeterType::Gas, 1, "СГБ-1.8"),
    MeterModel::new(MeterType::Gas, 2, "СГБ-3.2"),
    MeterModel::new(MeterType::Gas, 3, "СГБ-4.0"),
    MeterModel::new(MeterType::Gas, 4, "СГБ-6.0"),
    MeterModel::new(MeterType::Gas, 5, "СГБ-1.6"),
    MeterModel::new(MeterType::Gas, 16, "СГБД-1.8"),
    MeterModel::new(MeterType::Gas, 17, "СГБД-3.2"),
    MeterModel::new(MeterType::Gas, 18, "СГБД-4.0"),
    MeterModel::new(MeterType::Gas, 19, "СГБД-6.0"),
    MeterModel::new(MeterType::Gas, 20, "СГБД-1.6"),
    MeterModel::new(MeterType::Gas, 32, "СОНИК-G1,6"),
    MeterModel::new(MeterType::Gas, 33, "СОНИК-G2,5"),
    MeterModel::new(MeterType::Gas, 34, "СОНИК-G4"),
    MeterModel::new(MeterType::Gas, 35, "СОНИК-G6"),
    MeterModel::new(MeterType::Gas, 36, "СОНИК-G10"),
    MeterModel::new(MeterType::Gas, 48, "СГБД-1.8ТК"),
    MeterModel::new(MeterType::Gas, 49, "СГБД-3.2ТК"),
    MeterModel::new(MeterType::Gas, 50, "СГБД-4.0ТК"),
    MeterModel::new(MeterType::Gas, 51, "СГБД-6.0ТК"),
    MeterModel::new(MeterType::Gas, 52, "СГБД-1.6ТК"),
    MeterModel::new(MeterType::Gas, 64, "СОНИК-G1,6ТК"),
    MeterModel::new(MeterType::Gas, 65, "СОНИК-G2,5ТК"),
    MeterModel::new(MeterType::Gas, 66, "СОНИК-G4ТК"),
    MeterModel::new(MeterType::Gas, 67, "СОНИК-G6ТК"),
    MeterModel::new(MeterType::Gas, 68, "СОНИК-G10ТК"),
    MeterModel::new(MeterType::Gas, 80, "СГБ-1.8ТК"),
    MeterModel::new(MeterType::Gas, 81, "СГБ-3.2ТК"),
    MeterModel::new(MeterType::Gas, 82, "СГБ-4.0ТК"),
    MeterModel::new(MeterType::Gas, 83, "СГБ-6.0ТК"),
    MeterModel::new(MeterType::Gas, 84, "СГБ-1.6ТК"),
    MeterModel::new(MeterType::Water, 1, "СВД-15"),
    MeterModel::new(MeterType::Water, 2, "СВД-20"),
    MeterModel::new(MeterType::Water, 3, "СВТ-15"),
    MeterModel::new(MeterType::Water, 4, "СВТ-15"),
    MeterModel::new(MeterType::Water, 5, "СВТ-20"),
    MeterModel::new(MeterType::Water, 6, "СВТ-20"),
    MeterModel::new(MeterType::Electric, 1, "СЭБ"),
    MeterModel::new(MeterType::Heat, 1, "СТБ-10"),
];

/// Allowed model codes for a meter family in a hardware generation.
///
/// ```
/// use elehant_types::{HardwareGeneration, MeterType, models};
///
/// assert!(models::allowed_models(HardwareGeneration::B0, MeterType::Water).contains(&6));
/// assert!(models::allowed_models(HardwareGeneration::B0, MeterType::Heat).is_empty());
/// assert!(models::allowed_models(HardwareGeneration::B1, MeterType::Gas).is_empty());
/// ```
#[must_use]
pub fn allowed_models(generation: HardwareGeneration, meter_type: MeterType) -> &'static [u8] {
    match generation {
        HardwareGeneration::B0 => match meter_type {
            MeterType::Gas => B0_GAS_MODELS,
            MeterType::Water => B0_WATER_MODELS,
            MeterType::Electric => B0_ELECTRIC_MODELS,
            MeterType::Heat => B0_HEAT_MODELS,
        },
        // B1 payloads are not understood yet.
        HardwareGeneration::B1 => &[],
    }
}

/// Whether `(meter_type, model)` is allowed in `generation`.
#[must_use]
pub fn is_allowed(generation: HardwareGeneration, meter_type: MeterType, model: u8) -> bool {
    allowed_models(generation, meter_type).contains(&model)
}

/// Look up the label of a meter model.
///
/// ```
/// use elehant_types::{MeterType, models};
///
/// assert_eq!(models::model_name(MeterType::Gas, 1), Some("СГБ-1.8"));
/// assert_eq!(models::model_name(MeterType::Water, 99), None);
/// ```
#[must_use]
pub fn model_name(meter_type: MeterType, model: u8) -> Option<&'static str> {
    METER_MODELS
        .iter()
        .find(|m| m.meter_type == meter_type && m.code == model)
        .map(|m| m.name)
}

/// All known models of one meter family, in table order.
pub fn models_of(meter_type: MeterType) -> impl Iterator<Item = &'static MeterModel> {
    METER_MODELS.iter().filter(move |m| m.meter_type == meter_type)
}
