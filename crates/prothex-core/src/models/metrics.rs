use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Sensor-derived biomechanical and dermatological metrics for one
/// observation.
///
/// Every field is optional. A missing field is never an error; each engine
/// component substitutes its own clinically unremarkable default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricSet {
    /// Step length in centimetres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_length_cm: Option<f64>,
    /// Cadence in steps per minute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence_spm: Option<f64>,
    /// Walking speed in metres per second.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walking_speed_mps: Option<f64>,
    /// Gait symmetry index, 0–1 (1 = perfectly symmetric).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gait_symmetry_index: Option<f64>,
    /// Residual limb skin temperature in °C.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_temperature_c: Option<f64>,
    /// Skin moisture, percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_moisture: Option<f64>,
    /// Pressure distribution index, 0–1 (1 = perfectly balanced load).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure_distribution_index: Option<f64>,
    /// Hours the prosthesis was worn that day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_wear_hours: Option<f64>,
}

impl MetricSet {
    /// A metric set with every field populated.
    #[allow(clippy::too_many_arguments)]
    pub fn complete(
        step_length_cm: f64,
        cadence_spm: f64,
        walking_speed_mps: f64,
        gait_symmetry_index: f64,
        skin_temperature_c: f64,
        skin_moisture: f64,
        pressure_distribution_index: f64,
        daily_wear_hours: f64,
    ) -> Self {
        Self {
            step_length_cm: Some(step_length_cm),
            cadence_spm: Some(cadence_spm),
            walking_speed_mps: Some(walking_speed_mps),
            gait_symmetry_index: Some(gait_symmetry_index),
            skin_temperature_c: Some(skin_temperature_c),
            skin_moisture: Some(skin_moisture),
            pressure_distribution_index: Some(pressure_distribution_index),
            daily_wear_hours: Some(daily_wear_hours),
        }
    }
}
