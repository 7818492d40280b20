//! Regulatory classification and General Mass Limits

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SteerAxle {
    Single,
    Twin,
}

impl SteerAxle {
    pub fn axle_count(&self) -> u32 {
        match self {
            SteerAxle::Single => 1,
            SteerAxle::Twin => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RearAxleGroup {
    Single,
    Tandem,
    Tri,
    Quad,
    FivePlus,
}

impl RearAxleGroup {
    /// Axles in the group; `FivePlus` counts as five
    pub fn axle_count(&self) -> u32 {
        match self {
            RearAxleGroup::Single => 1,
            RearAxleGroup::Tandem => 2,
            RearAxleGroup::Tri => 3,
            RearAxleGroup::Quad => 4,
            RearAxleGroup::FivePlus => 5,
        }
    }
}

/// Tyres per axle end on the rear group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TyreFitment {
    Single,
    Dual,
}

/// What the vehicle is, beyond its axle layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleUse {
    #[default]
    Rigid,
    Bus,
    BDouble,
    RoadTrain,
    PigTrailer,
    LowLoader,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmissionsStandard {
    #[default]
    Legacy,
    #[serde(rename = "adr80_03")]
    Adr80_03,
    /// ADR 80/04 or an equivalent later standard
    #[serde(rename = "adr80_04")]
    Adr80_04,
}

/// Regulatory category descriptor. Widths in mm, masses in kg, spacing in m.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleClassification {
    pub steer_axle: SteerAxle,
    pub rear_group: RearAxleGroup,
    pub front_tyre_width_mm: f64,
    pub rear_tyres: TyreFitment,
    pub rear_tyre_width_mm: f64,
    #[serde(default)]
    pub vehicle_use: VehicleUse,
    #[serde(default)]
    pub emissions: EmissionsStandard,
    #[serde(default)]
    pub compliant_cabin: bool,
    #[serde(default)]
    pub load_sharing_suspension: bool,
    /// Manufacturer GVM, used by the steer axle eligibility check
    #[serde(default)]
    pub manufacturer_gvm: Option<f64>,
    /// Distance between the steer axle and the first rear axle
    #[serde(default)]
    pub axle_spacing: Option<f64>,
    /// Elected steer-to-drive mass transfer, kg
    #[serde(default)]
    pub mass_transfer: Option<f64>,
}

impl VehicleClassification {
    pub fn total_axles(&self) -> u32 {
        self.steer_axle.axle_count() + self.rear_group.axle_count()
    }
}

/// Capacity moved from the steer limit to the rear limit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassTransfer {
    pub amount: f64,
    pub effective_front_limit: f64,
    pub effective_rear_limit: f64,
}

/// Regulatory axle and GVM ceilings, kg
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GmlLimits {
    pub gvm: f64,
    /// Base limits before any mass transfer
    pub front_limit: f64,
    pub rear_limit: f64,
    /// Overall ceiling from the configuration table, when it applies
    pub table1_limit: Option<f64>,
    pub spacing_limited: bool,
    pub adr80_04_eligible: bool,
    pub mass_transfer: Option<MassTransfer>,
}

impl GmlLimits {
    pub fn effective_front_limit(&self) -> f64 {
        self.mass_transfer
            .map(|t| t.effective_front_limit)
            .unwrap_or(self.front_limit)
    }

    pub fn effective_rear_limit(&self) -> f64 {
        self.mass_transfer
            .map(|t| t.effective_rear_limit)
            .unwrap_or(self.rear_limit)
    }
}
