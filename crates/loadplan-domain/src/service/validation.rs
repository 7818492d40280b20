//! Input validation run before the solver
//!
//! Each function returns human-readable rule violations; an empty list
//! means the input is valid.

use crate::model::{AxlePositions, AxleRating, CargoItem, TareWeights, VehicleFrame};

/// Absolute rear overhang limit, metres
pub const MAX_REAR_OVERHANG_M: f64 = 3.7;
/// Rear overhang limit as a fraction of wheelbase
pub const MAX_REAR_OVERHANG_RATIO: f64 = 0.6;

pub fn validate_frame(frame: &VehicleFrame) -> Vec<String> {
    let mut violations = Vec::new();

    if !(frame.wheelbase > 0.0) {
        violations.push(format!(
            "wheelbase must be greater than zero (got {} m)",
            frame.wheelbase
        ));
    }
    if !(frame.body_length > 0.0) {
        violations.push(format!(
            "body length must be greater than zero (got {} m)",
            frame.body_length
        ));
    }
    if !(frame.body_width > 0.0) {
        violations.push(format!(
            "body width must be greater than zero (got {} m)",
            frame.body_width
        ));
    }
    if frame.front_overhang < 0.0 {
        violations.push("front overhang must not be negative".to_string());
    }
    if frame.rear_overhang < 0.0 {
        violations.push("rear overhang must not be negative".to_string());
    }
    if let Some(ca) = frame.cab_to_axle {
        if !(ca > 0.0) {
            violations.push(format!("cab-to-axle must be greater than zero (got {} m)", ca));
        }
    }
    if frame.wall_thickness < 0.0 {
        violations.push("wall thickness must not be negative".to_string());
    } else if 2.0 * frame.wall_thickness >= frame.body_length
        || 2.0 * frame.wall_thickness >= frame.body_width
    {
        violations.push("walls leave no usable floor area".to_string());
    }

    if frame.wheelbase > 0.0 {
        let limit = MAX_REAR_OVERHANG_M.min(MAX_REAR_OVERHANG_RATIO * frame.wheelbase);
        if frame.rear_overhang > limit {
            violations.push(format!(
                "rear overhang {:.2} m exceeds the {:.2} m limit (lesser of {} m and {:.0}% of wheelbase)",
                frame.rear_overhang,
                limit,
                MAX_REAR_OVERHANG_M,
                MAX_REAR_OVERHANG_RATIO * 100.0
            ));
        }
    }

    violations
}

pub fn validate_rating(label: &str, rating: &AxleRating) -> Vec<String> {
    let mut violations = Vec::new();
    for (name, value) in [("front", rating.front), ("rear", rating.rear), ("GVM", rating.gvm)] {
        if !(value > 0.0) {
            violations.push(format!(
                "{} {} limit must be greater than zero (got {} kg)",
                label, name, value
            ));
        }
    }
    violations
}

pub fn validate_tare(tare: &TareWeights) -> Vec<String> {
    let mut violations = Vec::new();
    if !(tare.front >= 0.0) || !(tare.rear >= 0.0) {
        violations.push(format!(
            "tare weights must not be negative (got front {} kg, rear {} kg)",
            tare.front, tare.rear
        ));
    }
    violations
}

/// Checks weights, footprints, floor bounds and pairwise overlap
pub fn validate_cargo(frame: &VehicleFrame, items: &[CargoItem]) -> Vec<String> {
    let mut violations = Vec::new();
    let floor = frame.usable_floor();

    for item in items {
        if !(item.weight > 0.0) {
            violations.push(format!(
                "item '{}' weight must be greater than zero (got {} kg)",
                item.id, item.weight
            ));
        }
        if !(item.length > 0.0) || !(item.width > 0.0) {
            violations.push(format!("item '{}' must have a positive footprint", item.id));
        }
        if !floor.contains(item.x, item.y, item.length, item.width) {
            violations.push(format!(
                "item '{}' at ({:.2}, {:.2}) lies outside the usable floor area",
                item.id, item.x, item.y
            ));
        }
    }

    for (i, a) in items.iter().enumerate() {
        for b in &items[i + 1..] {
            if a.overlaps(b) {
                violations.push(format!("items '{}' and '{}' overlap", a.id, b.id));
            }
        }
    }

    violations
}

/// Whether a cargo item sits wholly ahead of the front axle
pub fn is_ahead_of_front_axle(item: &CargoItem, axles: &AxlePositions) -> bool {
    item.x + item.length <= axles.front
}
