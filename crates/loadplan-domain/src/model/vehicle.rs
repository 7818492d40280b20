//! Vehicle geometry, ratings and tare

use serde::{Deserialize, Serialize};

use super::suspension::ResolvedSuspension;

/// Default body wall thickness in metres
pub const DEFAULT_WALL_THICKNESS_M: f64 = 0.05;

fn default_wall_thickness() -> f64 {
    DEFAULT_WALL_THICKNESS_M
}

/// Fixed chassis and body geometry. All distances in metres.
///
/// Axle positions are never stored here; they are derived by
/// [`crate::service::geometry::compute_axle_positions`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleFrame {
    pub wheelbase: f64,
    pub front_overhang: f64,
    pub rear_overhang: f64,
    /// Back of cab to rear axle (or rear axle group centre)
    #[serde(default)]
    pub cab_to_axle: Option<f64>,
    pub body_length: f64,
    pub body_width: f64,
    #[serde(default = "default_wall_thickness")]
    pub wall_thickness: f64,
}

impl VehicleFrame {
    /// Floor area left after deducting wall thickness on every side
    pub fn usable_floor(&self) -> FloorArea {
        FloorArea {
            origin_x: self.wall_thickness,
            origin_y: self.wall_thickness,
            length: (self.body_length - 2.0 * self.wall_thickness).max(0.0),
            width: (self.body_width - 2.0 * self.wall_thickness).max(0.0),
        }
    }
}

/// Rectangle of usable floor in body coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloorArea {
    pub origin_x: f64,
    pub origin_y: f64,
    pub length: f64,
    pub width: f64,
}

impl FloorArea {
    /// Whether the rectangle `[x, x+length] x [y, y+width]` lies on the floor
    pub fn contains(&self, x: f64, y: f64, length: f64, width: f64) -> bool {
        const EPS: f64 = 1e-9;
        x >= self.origin_x - EPS
            && y >= self.origin_y - EPS
            && x + length <= self.origin_x + self.length + EPS
            && y + width <= self.origin_y + self.width + EPS
    }
}

/// Manufacturer or regulatory weight ceiling, kg
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxleRating {
    pub front: f64,
    pub rear: f64,
    pub gvm: f64,
}

/// Empty vehicle weight measured per axle, kg
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TareWeights {
    pub front: f64,
    pub rear: f64,
}

impl TareWeights {
    pub fn total(&self) -> f64 {
        self.front + self.rear
    }
}

/// Axle positions in the body frame (0 = front of cargo area).
///
/// Either value may be negative when the axle sits under the cab.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxlePositions {
    pub front: f64,
    pub rear: f64,
}

impl AxlePositions {
    pub fn wheelbase(&self) -> f64 {
        self.rear - self.front
    }
}

/// Everything the solver needs to know about one truck for a planning session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSetup {
    pub frame: VehicleFrame,
    /// Limits percentages and overweight flags are measured against.
    /// Callers should pass the resolved effective limits.
    pub limits: AxleRating,
    pub suspension: ResolvedSuspension,
    pub tare: TareWeights,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> VehicleFrame {
        VehicleFrame {
            wheelbase: 4.25,
            front_overhang: 1.2,
            rear_overhang: 2.0,
            cab_to_axle: Some(5.69),
            body_length: 7.2,
            body_width: 2.45,
            wall_thickness: 0.05,
        }
    }

    #[test]
    fn test_usable_floor_deducts_walls() {
        let floor = frame().usable_floor();
        assert!((floor.length - 7.1).abs() < 1e-9);
        assert!((floor.width - 2.35).abs() < 1e-9);
        assert!((floor.origin_x - 0.05).abs() < 1e-9);
    }

    #[test]
    fn test_usable_floor_never_negative() {
        let mut f = frame();
        f.wall_thickness = 5.0;
        let floor = f.usable_floor();
        assert_eq!(floor.length, 0.0);
        assert_eq!(floor.width, 0.0);
    }

    #[test]
    fn test_floor_contains() {
        let floor = frame().usable_floor();
        assert!(floor.contains(0.05, 0.05, 1.2, 1.0));
        assert!(!floor.contains(0.0, 0.05, 1.2, 1.0));
        assert!(!floor.contains(6.5, 0.05, 1.2, 1.0));
    }

    #[test]
    fn test_wall_thickness_defaults_when_missing() {
        let toml_src = r#"
wheelbase = 4.25
front_overhang = 1.2
rear_overhang = 2.0
body_length = 7.2
body_width = 2.45
"#;
        let f: VehicleFrame = toml::from_str(toml_src).unwrap();
        assert_eq!(f.wall_thickness, DEFAULT_WALL_THICKNESS_M);
        assert!(f.cab_to_axle.is_none());
    }
}
