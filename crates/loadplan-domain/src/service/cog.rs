//! Centre of gravity of the cargo load

use crate::model::{CargoItem, CentreOfGravity};

/// Weight-averaged item centre. Returns `{0, 0}` for an empty or weightless load.
pub fn compute_cog(items: &[CargoItem]) -> CentreOfGravity {
    let total: f64 = items.iter().map(|i| i.weight).sum();
    if total <= 0.0 {
        return CentreOfGravity::default();
    }
    let moment_x: f64 = items.iter().map(|i| i.weight * i.centre_x()).sum();
    let moment_y: f64 = items.iter().map(|i| i.weight * i.centre_y()).sum();
    CentreOfGravity {
        x: moment_x / total,
        y: moment_y / total,
    }
}
