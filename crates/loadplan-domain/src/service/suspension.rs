//! Spring compression under axle load

use crate::model::{CompressionModel, SuspensionSpec, SuspensionType};

/// Compression in metres of a standard suspension of `kind` under `axle_load_kg`.
///
/// Non-decreasing in load and capped at the type's travel:
/// taper-leaf 0.5 mm/100 kg up to 20 mm, multi-leaf steel 0.1 mm/100 kg up
/// to 10 mm, airbag 0.8 mm/100 kg scaled by `1 + load/2000 * 0.1` up to 150 mm.
pub fn compression(axle_load_kg: f64, kind: SuspensionType) -> f64 {
    SuspensionSpec::standard(kind).compression(axle_load_kg)
}
