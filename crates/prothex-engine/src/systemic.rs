use prothex_core::models::profile::ClinicalProfile;

const DEFAULT_BMI: f64 = 22.0;
const DEFAULT_SYSTOLIC: f64 = 120.0;
const DEFAULT_BLOOD_SUGAR: f64 = 90.0;

pub(crate) const OBESITY_BMI: f64 = 30.0;
pub(crate) const HYPERTENSION_SYSTOLIC: f64 = 140.0;
pub(crate) const HYPERGLYCEMIA_MG_DL: f64 = 180.0;

/// Profile values consumed by the rules, with missing values resolved to
/// clinically unremarkable defaults.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Systemic {
    pub bmi: f64,
    pub systolic: f64,
    pub blood_sugar: f64,
}

impl Systemic {
    pub fn from_profile(profile: &ClinicalProfile) -> Self {
        Self {
            bmi: profile.bmi().unwrap_or(DEFAULT_BMI),
            systolic: profile.blood_pressure_systolic.unwrap_or(DEFAULT_SYSTOLIC),
            blood_sugar: profile.blood_sugar_mg_dl.unwrap_or(DEFAULT_BLOOD_SUGAR),
        }
    }

    pub fn obese(&self) -> bool {
        self.bmi > OBESITY_BMI
    }

    pub fn hypertensive(&self) -> bool {
        self.systolic > HYPERTENSION_SYSTOLIC
    }

    pub fn hyperglycemic(&self) -> bool {
        self.blood_sugar > HYPERGLYCEMIA_MG_DL
    }
}
