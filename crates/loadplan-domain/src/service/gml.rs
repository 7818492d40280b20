//! General Mass Limits lookup
//!
//! A classification-to-limits table. Every branch picks one of a fixed set
//! of tonnages; there is no formula beyond taking the minimum at the end:
//!
//!   gvm = min(table-1 ceiling, front + rear (after transfer), 15 t if spacing < 2.5 m)
//!
//! The table-1 ceiling only applies when the rear group has more than one axle.

use crate::model::{
    EmissionsStandard, GmlLimits, MassTransfer, RearAxleGroup, SteerAxle, TyreFitment,
    VehicleClassification, VehicleUse,
};

/// Single tyres at least this wide count as wide single tyres
pub const WIDE_SINGLE_TYRE_MM: f64 = 375.0;
/// Steer tyre width needed for the increased single-steer tier
pub const SINGLE_STEER_TYRE_MIN_MM: f64 = 375.0;
/// Steer tyre width needed for the increased twin-steer tier
pub const TWIN_STEER_TYRE_MIN_MM: f64 = 295.0;
/// Manufacturer GVM needed for the increased single-steer tier
pub const SINGLE_STEER_MIN_GVM_KG: f64 = 15_000.0;

pub const MAX_MASS_TRANSFER_KG: f64 = 500.0;

pub const CLOSE_SPACING_M: f64 = 2.5;
pub const CLOSE_SPACING_GVM_KG: f64 = 15_000.0;

pub fn compute_regulatory_limits(classification: &VehicleClassification) -> GmlLimits {
    let eligible = is_adr80_04_eligible(classification);
    let front_limit = steer_limit(classification, eligible);
    let rear_limit = rear_group_limit(classification);

    let mass_transfer = classification
        .mass_transfer
        .filter(|_| eligible)
        .map(|elected| elected.clamp(0.0, MAX_MASS_TRANSFER_KG))
        .filter(|amount| *amount > 0.0)
        .map(|amount| MassTransfer {
            amount,
            effective_front_limit: front_limit - amount,
            effective_rear_limit: rear_limit + amount,
        });

    let table1_limit = table1_ceiling(classification);

    let axle_sum = mass_transfer
        .map(|t| t.effective_front_limit + t.effective_rear_limit)
        .unwrap_or(front_limit + rear_limit);

    let spacing_limited = classification
        .axle_spacing
        .is_some_and(|spacing| spacing < CLOSE_SPACING_M);

    let mut gvm = axle_sum;
    if let Some(ceiling) = table1_limit {
        gvm = gvm.min(ceiling);
    }
    if spacing_limited {
        gvm = gvm.min(CLOSE_SPACING_GVM_KG);
    }

    GmlLimits {
        gvm,
        front_limit,
        rear_limit,
        table1_limit,
        spacing_limited,
        adr80_04_eligible: eligible,
        mass_transfer,
    }
}

/// Gate for the increased steer tier and for mass transfer.
pub fn is_adr80_04_eligible(c: &VehicleClassification) -> bool {
    if c.emissions != EmissionsStandard::Adr80_04 {
        return false;
    }
    if matches!(c.vehicle_use, VehicleUse::Bus | VehicleUse::RoadTrain) {
        return false;
    }
    match c.steer_axle {
        SteerAxle::Single => {
            c.compliant_cabin
                && c.manufacturer_gvm
                    .is_some_and(|gvm| gvm >= SINGLE_STEER_MIN_GVM_KG)
                && c.front_tyre_width_mm >= SINGLE_STEER_TYRE_MIN_MM
        }
        SteerAxle::Twin => {
            c.load_sharing_suspension && c.front_tyre_width_mm >= TWIN_STEER_TYRE_MIN_MM
        }
    }
}

fn steer_limit(c: &VehicleClassification, eligible: bool) -> f64 {
    match c.steer_axle {
        SteerAxle::Single => {
            if eligible {
                7000.0
            } else if c.vehicle_use == VehicleUse::Bus {
                6500.0
            } else if c.front_tyre_width_mm >= WIDE_SINGLE_TYRE_MM {
                6500.0
            } else {
                6000.0
            }
        }
        SteerAxle::Twin => {
            if eligible {
                12_000.0
            } else if c.load_sharing_suspension {
                11_000.0
            } else {
                10_000.0
            }
        }
    }
}

fn rear_group_limit(c: &VehicleClassification) -> f64 {
    let wide = c.rear_tyre_width_mm >= WIDE_SINGLE_TYRE_MM;
    let low_loader = c.vehicle_use == VehicleUse::LowLoader;
    match (c.rear_group, c.rear_tyres) {
        (RearAxleGroup::Single, TyreFitment::Single) => {
            if wide {
                6700.0
            } else {
                6000.0
            }
        }
        (RearAxleGroup::Single, TyreFitment::Dual) => {
            if c.vehicle_use == VehicleUse::Bus {
                10_000.0
            } else {
                9000.0
            }
        }
        (RearAxleGroup::Tandem, TyreFitment::Single) => {
            if wide {
                13_000.0
            } else {
                11_000.0
            }
        }
        (RearAxleGroup::Tandem, TyreFitment::Dual) => 16_500.0,
        (RearAxleGroup::Tri, TyreFitment::Single) => {
            if wide {
                18_000.0
            } else {
                15_000.0
            }
        }
        (RearAxleGroup::Tri, TyreFitment::Dual) => 20_000.0,
        (RearAxleGroup::Quad, TyreFitment::Single) => 20_000.0,
        (RearAxleGroup::Quad, TyreFitment::Dual) => {
            if low_loader {
                24_000.0
            } else {
                20_000.0
            }
        }
        (RearAxleGroup::FivePlus, TyreFitment::Single) => 20_000.0,
        (RearAxleGroup::FivePlus, TyreFitment::Dual) => {
            if low_loader {
                28_000.0
            } else {
                20_000.0
            }
        }
    }
}

/// Overall mass ceiling for the configuration; `None` for a single rear axle
fn table1_ceiling(c: &VehicleClassification) -> Option<f64> {
    if c.rear_group == RearAxleGroup::Single {
        return None;
    }
    let ceiling = match (c.vehicle_use, c.steer_axle, c.rear_group) {
        (VehicleUse::BDouble, ..) => 62_500.0,
        (VehicleUse::RoadTrain, ..) => 79_000.0,
        (VehicleUse::PigTrailer, ..) => 42_500.0,
        (VehicleUse::LowLoader, ..) if c.total_axles() >= 5 => 42_500.0,
        (_, SteerAxle::Single, RearAxleGroup::Tandem) => 22_500.0,
        (_, SteerAxle::Single, RearAxleGroup::Tri) => 26_000.0,
        (_, SteerAxle::Single, _) => 27_000.0,
        (_, SteerAxle::Twin, RearAxleGroup::Tandem) => 26_500.0,
        (_, SteerAxle::Twin, RearAxleGroup::Tri) => 30_000.0,
        (_, SteerAxle::Twin, _) => 32_000.0,
    };
    Some(ceiling)
}
