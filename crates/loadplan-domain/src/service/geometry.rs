//! Axle positions in the body coordinate frame

use crate::model::{AxlePositions, VehicleFrame};

/// Cab length assumed when a frame has no cab-to-axle measurement
pub const NOMINAL_CAB_LENGTH_M: f64 = 2.0;

pub fn compute_axle_positions(frame: &VehicleFrame) -> AxlePositions {
    compute_axle_positions_with_cab(frame, NOMINAL_CAB_LENGTH_M)
}

/// Derive axle positions, falling back to `cab_length` when the frame
/// lacks a cab-to-axle measurement. Negative positions are kept as is.
pub fn compute_axle_positions_with_cab(frame: &VehicleFrame, cab_length: f64) -> AxlePositions {
    match frame.cab_to_axle {
        Some(ca) => AxlePositions {
            front: ca - frame.wheelbase,
            rear: ca,
        },
        None => {
            let front = -cab_length + frame.front_overhang;
            AxlePositions {
                front,
                rear: front + frame.wheelbase,
            }
        }
    }
}
