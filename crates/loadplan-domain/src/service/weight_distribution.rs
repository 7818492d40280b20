//! Axle weight distribution solver
//!
//! Two stages, always run from scratch:
//!   1. rigid-body moment balance about the rear axle
//!   2. bounded fixed-point correction for pitch caused by mismatched
//!      front/rear suspension compression
//!
//! followed by clamping so that neither axle carries negative weight.
//! The frame must already be validated (wheelbase > 0).

use serde::{Deserialize, Serialize};

use crate::model::{
    AxlePositions, AxleRating, CargoItem, CompressionModel, SuspensionReport, VehicleSetup,
    WeightDistribution,
};
use crate::service::cog::compute_cog;
use crate::service::geometry::{compute_axle_positions_with_cab, NOMINAL_CAB_LENGTH_M};

/// Calibration of the suspension correction.
///
/// The blend, scale and height-factor values are fitted approximations
/// carried over unchanged for behavioural compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuspensionCorrection {
    pub max_iterations: u32,
    /// Stop when the front load changes by less than this between iterations, kg
    pub convergence_kg: f64,
    pub compression_blend: f64,
    pub cog_shift_blend: f64,
    pub load_scale: f64,
    /// Load COG height at a height factor of 1, metres
    pub reference_cog_height_m: f64,
    pub min_height_factor: f64,
    pub max_height_factor: f64,
}

impl Default for SuspensionCorrection {
    fn default() -> Self {
        Self {
            max_iterations: 5,
            convergence_kg: 0.1,
            compression_blend: 0.7,
            cog_shift_blend: 0.3,
            load_scale: 0.5,
            reference_cog_height_m: 2.0,
            min_height_factor: 0.3,
            max_height_factor: 0.7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    pub nominal_cab_length: f64,
    /// `None` disables stage 2 and returns the rigid-body split
    pub correction: Option<SuspensionCorrection>,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            nominal_cab_length: NOMINAL_CAB_LENGTH_M,
            correction: Some(SuspensionCorrection::default()),
        }
    }
}

impl SolverSettings {
    pub fn rigid() -> Self {
        Self {
            correction: None,
            ..Self::default()
        }
    }
}

/// Split `load_weight` acting at `cog_x` between the axles by taking moments
/// about the rear axle. Returns `(front, rear)`.
///
/// A COG behind the rear axle gives a negative front share (weight lifted off
/// the front); a COG ahead of the front axle gives more than the load to the front.
pub fn rigid_body_split(load_weight: f64, cog_x: f64, axles: &AxlePositions) -> (f64, f64) {
    let front = load_weight * (axles.rear - cog_x) / axles.wheelbase();
    (front, load_weight - front)
}

pub fn compute_weight_distribution(
    vehicle: &VehicleSetup,
    cargo: &[CargoItem],
    settings: &SolverSettings,
) -> WeightDistribution {
    let cargo_weight: f64 = cargo.iter().map(|i| i.weight).sum();
    if cargo_weight <= 0.0 {
        return summarize(
            vehicle.tare.front,
            vehicle.tare.rear,
            0.0,
            0.0,
            0.0,
            &vehicle.limits,
            None,
        );
    }

    let axles = compute_axle_positions_with_cab(&vehicle.frame, settings.nominal_cab_length);
    let cog = compute_cog(cargo);
    let (rigid_front, rigid_rear) = rigid_body_split(cargo_weight, cog.x, &axles);

    let (load_front, load_rear, report) = match &settings.correction {
        Some(params) => {
            let (front, rear, report) =
                correct_for_suspension(vehicle, &axles, rigid_front, rigid_rear, params);
            (front, rear, Some(report))
        }
        None => (rigid_front, rigid_rear, None),
    };

    let (front_axle, rear_axle) = clamp_lift_off(
        vehicle.tare.front + load_front,
        vehicle.tare.rear + load_rear,
    );

    summarize(
        front_axle,
        rear_axle,
        cargo_weight,
        cog.x,
        cog.y,
        &vehicle.limits,
        report,
    )
}

fn correct_for_suspension(
    vehicle: &VehicleSetup,
    axles: &AxlePositions,
    rigid_front: f64,
    rigid_rear: f64,
    params: &SuspensionCorrection,
) -> (f64, f64, SuspensionReport) {
    let wheelbase = axles.wheelbase();
    let load_weight = rigid_front + rigid_rear;
    let cog_height = estimated_cog_height(vehicle, load_weight, params);

    let mut front = rigid_front;
    let mut rear = rigid_rear;
    let mut report = SuspensionReport::default();

    for iteration in 1..=params.max_iterations {
        let front_compression = vehicle.suspension.front.compression(vehicle.tare.front + front);
        let rear_compression = vehicle.suspension.rear.compression(vehicle.tare.rear + rear);
        let differential = rear_compression - front_compression;

        let pitch = (differential / wheelbase).atan();
        let cog_shift = cog_height * pitch.sin();

        let compression_ratio = differential.abs() / wheelbase;
        let cog_shift_ratio = cog_shift.abs() / wheelbase;
        let shift_ratio =
            params.compression_blend * compression_ratio + params.cog_shift_blend * cog_shift_ratio;
        let shift = if differential == 0.0 {
            0.0
        } else {
            differential.signum() * shift_ratio * params.load_scale * load_weight
        };

        let next_front = rigid_front - shift;
        let change = (next_front - front).abs();
        front = next_front;
        rear = rigid_rear + shift;

        report = SuspensionReport {
            iterations: iteration,
            converged: false,
            front_compression_m: front_compression,
            rear_compression_m: rear_compression,
            pitch_rad: pitch,
            weight_shift_kg: shift,
        };
        if change < params.convergence_kg {
            report.converged = true;
            break;
        }
    }

    (front, rear, report)
}

/// Load COG height grows with how full the payload capacity is, clamped
/// to the configured height-factor band.
fn estimated_cog_height(
    vehicle: &VehicleSetup,
    load_weight: f64,
    params: &SuspensionCorrection,
) -> f64 {
    let payload_capacity = vehicle.limits.gvm - vehicle.tare.total();
    let fill = if payload_capacity > 0.0 {
        load_weight / payload_capacity
    } else {
        params.max_height_factor
    };
    params.reference_cog_height_m * fill.clamp(params.min_height_factor, params.max_height_factor)
}

/// An axle driven negative has lifted off; the other axle takes everything.
fn clamp_lift_off(front: f64, rear: f64) -> (f64, f64) {
    if front < 0.0 {
        (0.0, rear + front)
    } else if rear < 0.0 {
        (front + rear, 0.0)
    } else {
        (front, rear)
    }
}

fn percent_of(value: f64, limit: f64) -> f64 {
    if limit > 0.0 {
        value / limit * 100.0
    } else {
        0.0
    }
}

fn summarize(
    front_axle: f64,
    rear_axle: f64,
    cargo_weight: f64,
    cog_x: f64,
    cog_y: f64,
    limits: &AxleRating,
    suspension: Option<SuspensionReport>,
) -> WeightDistribution {
    let total = front_axle + rear_axle;
    WeightDistribution {
        total_weight: total,
        front_axle_weight: front_axle,
        rear_axle_weight: rear_axle,
        cargo_weight,
        front_remaining: limits.front - front_axle,
        rear_remaining: limits.rear - rear_axle,
        gvm_remaining: limits.gvm - total,
        front_percentage: percent_of(front_axle, limits.front),
        rear_percentage: percent_of(rear_axle, limits.rear),
        gvm_percentage: percent_of(total, limits.gvm),
        is_overweight: total > limits.gvm,
        is_front_overweight: front_axle > limits.front,
        is_rear_overweight: rear_axle > limits.rear,
        load_cog_x: cog_x,
        load_cog_y: cog_y,
        suspension,
    }
}
