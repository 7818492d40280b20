//! Computed axle weight snapshot

use serde::{Deserialize, Serialize};

/// Percentage of any limit at or above which a load is reported as near the limit
pub const NEAR_LIMIT_PERCENT: f64 = 95.0;

/// Weight distribution for one cargo snapshot. Weights in kg.
///
/// Remaining capacity goes negative when overweight; that is a valid value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightDistribution {
    pub total_weight: f64,
    pub front_axle_weight: f64,
    pub rear_axle_weight: f64,
    pub cargo_weight: f64,

    pub front_remaining: f64,
    pub rear_remaining: f64,
    pub gvm_remaining: f64,

    pub front_percentage: f64,
    pub rear_percentage: f64,
    pub gvm_percentage: f64,

    pub is_overweight: bool,
    pub is_front_overweight: bool,
    pub is_rear_overweight: bool,

    /// Load COG along the body; 0 when there is no load
    pub load_cog_x: f64,
    pub load_cog_y: f64,

    /// Present when the suspension correction ran
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspension: Option<SuspensionReport>,
}

impl WeightDistribution {
    pub fn any_overweight(&self) -> bool {
        self.is_overweight || self.is_front_overweight || self.is_rear_overweight
    }

    pub fn status(&self) -> ComplianceStatus {
        if self.any_overweight() {
            ComplianceStatus::Overweight
        } else if self.front_percentage >= NEAR_LIMIT_PERCENT
            || self.rear_percentage >= NEAR_LIMIT_PERCENT
            || self.gvm_percentage >= NEAR_LIMIT_PERCENT
        {
            ComplianceStatus::NearLimit
        } else {
            ComplianceStatus::Compliant
        }
    }
}

/// Diagnostics from the iterative suspension correction
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SuspensionReport {
    pub iterations: u32,
    pub converged: bool,
    pub front_compression_m: f64,
    pub rear_compression_m: f64,
    pub pitch_rad: f64,
    /// Cargo weight moved from the front axle to the rear (negative = forward)
    pub weight_shift_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    NearLimit,
    Overweight,
}

impl ComplianceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "Compliant",
            ComplianceStatus::NearLimit => "Near limit",
            ComplianceStatus::Overweight => "OVERWEIGHT",
        }
    }
}
