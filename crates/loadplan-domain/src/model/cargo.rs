//! Cargo items placed on the body floor

use serde::{Deserialize, Serialize};

/// A placed piece of freight.
///
/// `x` is measured back from the front of the body, `y` across from the
/// left side. Both locate the item's front-left corner. Dimensions in
/// metres, weight in kg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoItem {
    pub id: String,
    pub length: f64,
    pub width: f64,
    pub weight: f64,
    pub x: f64,
    pub y: f64,
}

impl CargoItem {
    pub fn centre_x(&self) -> f64 {
        self.x + self.length / 2.0
    }

    pub fn centre_y(&self) -> f64 {
        self.y + self.width / 2.0
    }

    /// Strict overlap; items that merely touch do not overlap
    pub fn overlaps(&self, other: &CargoItem) -> bool {
        rects_overlap(
            (self.x, self.y, self.length, self.width),
            (other.x, other.y, other.length, other.width),
        )
    }
}

pub(crate) fn rects_overlap(a: (f64, f64, f64, f64), b: (f64, f64, f64, f64)) -> bool {
    const EPS: f64 = 1e-9;
    let (ax, ay, al, aw) = a;
    let (bx, by, bl, bw) = b;
    ax < bx + bl - EPS && bx < ax + al - EPS && ay < by + bw - EPS && by < ay + aw - EPS
}

/// Floor footprint of a candidate item for autofill
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemFootprint {
    pub length: f64,
    pub width: f64,
}

/// Horizontal centre of gravity of the cargo load in body coordinates.
///
/// `{0, 0}` means "no load", not a located point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CentreOfGravity {
    pub x: f64,
    pub y: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(x: f64, y: f64) -> CargoItem {
        CargoItem {
            id: "p".to_string(),
            length: 1.2,
            width: 1.0,
            weight: 500.0,
            x,
            y,
        }
    }

    #[test]
    fn test_centre() {
        let it = item(1.0, 0.5);
        assert!((it.centre_x() - 1.6).abs() < 1e-12);
        assert!((it.centre_y() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_touching_items_do_not_overlap() {
        assert!(!item(0.0, 0.0).overlaps(&item(1.2, 0.0)));
        assert!(!item(0.0, 0.0).overlaps(&item(0.0, 1.0)));
    }

    #[test]
    fn test_overlap_detected() {
        assert!(item(0.0, 0.0).overlaps(&item(0.6, 0.5)));
    }
}
