use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Display value for a categorical field with no observations behind it.
pub const NO_DATA: &str = "No Data";

/// Gait abnormality flag for one set of metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GaitLabel {
    Normal,
    Abnormal,
}

impl GaitLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            GaitLabel::Normal => "Normal",
            GaitLabel::Abnormal => "Abnormal",
        }
    }
}

impl fmt::Display for GaitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Likelihood of skin irritation at the socket interface.
///
/// Variants are declared in increasing severity so `Ord` follows clinical
/// severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum SkinRisk {
    Low,
    Medium,
    High,
}

impl SkinRisk {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkinRisk::Low => "Low",
            SkinRisk::Medium => "Medium",
            SkinRisk::High => "High",
        }
    }
}

impl fmt::Display for SkinRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse triage category combining biomechanical and systemic risk.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Moderate => "Moderate",
            RiskTier::High => "High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serde adapter for optional labels: `None` is written as `"No Data"`.
///
/// Use with `#[serde(with = "crate::models::labels::no_data")]`.
pub mod no_data {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(label) => label.serialize(serializer),
            None => serializer.serialize_str(super::NO_DATA),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Field<T> {
            Label(T),
            Text(String),
        }

        match Field::<T>::deserialize(deserializer)? {
            Field::Label(label) => Ok(Some(label)),
            Field::Text(text) if text == super::NO_DATA => Ok(None),
            Field::Text(text) => Err(D::Error::custom(format!("unknown label: {text}"))),
        }
    }
}
