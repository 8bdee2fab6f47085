use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Per-patient clinical context.
///
/// Only BMI, systolic pressure and blood sugar feed the engine; the rest is
/// carried for prompts and reporting. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalProfile {
    pub patient_id: Uuid,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub bmi: Option<f64>,
    #[serde(default)]
    pub blood_pressure_systolic: Option<f64>,
    #[serde(default)]
    pub blood_pressure_diastolic: Option<f64>,
    #[serde(default)]
    pub blood_sugar_mg_dl: Option<f64>,
    #[serde(default)]
    pub medical_conditions: Vec<String>,
    #[serde(default)]
    pub amputation_level: Option<String>,
    #[serde(default)]
    pub device_type: Option<String>,
}

impl ClinicalProfile {
    /// An empty profile for `patient_id`; every clinical field is absent.
    pub fn new(patient_id: Uuid) -> Self {
        Self {
            patient_id,
            ..Self::default()
        }
    }

    /// Body-mass index: the stored value, otherwise derived from height and
    /// weight when both are known.
    pub fn bmi(&self) -> Option<f64> {
        self.bmi.or_else(|| match (self.height_cm, self.weight_kg) {
            (Some(height), Some(weight)) if height > 0.0 => {
                let metres = height / 100.0;
                Some(((weight / (metres * metres)) * 100.0).round() / 100.0)
            }
            _ => None,
        })
    }

    /// Blood pressure as `systolic/diastolic`, with `0` for a missing side.
    pub fn blood_pressure_display(&self) -> String {
        format!(
            "{}/{}",
            self.blood_pressure_systolic.unwrap_or(0.0),
            self.blood_pressure_diastolic.unwrap_or(0.0)
        )
    }
}
