//! Suspension types and compression curves

use serde::{Deserialize, Serialize};

/// Suspension families with calibrated default curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuspensionType {
    TaperLeaf,
    MultiLeafSteel,
    Airbag,
}

impl SuspensionType {
    pub fn label(&self) -> &'static str {
        match self {
            SuspensionType::TaperLeaf => "taper-leaf",
            SuspensionType::MultiLeafSteel => "multi-leaf steel",
            SuspensionType::Airbag => "airbag",
        }
    }
}

impl std::fmt::Display for SuspensionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Load to compression mapping. Rates are mm per 100 kg of axle load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "curve", rename_all = "snake_case")]
pub enum CompressionCurve {
    Linear {
        rate_mm_per_100kg: f64,
        max_travel_mm: f64,
    },
    /// Rate grows by `stiffening` for every `reference_load_kg` of axle load
    Progressive {
        rate_mm_per_100kg: f64,
        stiffening: f64,
        reference_load_kg: f64,
        max_travel_mm: f64,
    },
}

impl CompressionCurve {
    /// Compression in millimetres, capped at the curve's travel
    pub fn compression_mm(&self, axle_load_kg: f64) -> f64 {
        let load = axle_load_kg.max(0.0);
        match *self {
            CompressionCurve::Linear {
                rate_mm_per_100kg,
                max_travel_mm,
            } => (load / 100.0 * rate_mm_per_100kg).min(max_travel_mm),
            CompressionCurve::Progressive {
                rate_mm_per_100kg,
                stiffening,
                reference_load_kg,
                max_travel_mm,
            } => {
                let factor = 1.0 + (load / reference_load_kg) * stiffening;
                (load / 100.0 * rate_mm_per_100kg * factor).min(max_travel_mm)
            }
        }
    }

    pub fn max_travel_mm(&self) -> f64 {
        match *self {
            CompressionCurve::Linear { max_travel_mm, .. }
            | CompressionCurve::Progressive { max_travel_mm, .. } => max_travel_mm,
        }
    }
}

/// Anything that can turn an axle load into spring compression.
///
/// Implementations must be non-decreasing in load and bounded.
pub trait CompressionModel {
    /// Compression in metres for a total axle load in kg
    fn compression(&self, axle_load_kg: f64) -> f64;

    /// Maximum compression in metres
    fn max_travel(&self) -> f64;
}

/// Per-axle suspension behaviour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuspensionSpec {
    pub kind: SuspensionType,
    pub curve: CompressionCurve,
}

impl SuspensionSpec {
    /// Calibrated curve for a suspension family.
    ///
    /// These constants are fitted values, not physical derivations.
    pub fn standard(kind: SuspensionType) -> Self {
        let curve = match kind {
            SuspensionType::TaperLeaf => CompressionCurve::Linear {
                rate_mm_per_100kg: 0.5,
                max_travel_mm: 20.0,
            },
            SuspensionType::MultiLeafSteel => CompressionCurve::Linear {
                rate_mm_per_100kg: 0.1,
                max_travel_mm: 10.0,
            },
            SuspensionType::Airbag => CompressionCurve::Progressive {
                rate_mm_per_100kg: 0.8,
                stiffening: 0.1,
                reference_load_kg: 2000.0,
                max_travel_mm: 150.0,
            },
        };
        Self { kind, curve }
    }

    pub fn with_curve(kind: SuspensionType, curve: CompressionCurve) -> Self {
        Self { kind, curve }
    }
}

impl CompressionModel for SuspensionSpec {
    fn compression(&self, axle_load_kg: f64) -> f64 {
        self.curve.compression_mm(axle_load_kg) / 1000.0
    }

    fn max_travel(&self) -> f64 {
        self.curve.max_travel_mm() / 1000.0
    }
}

/// Suspension as recorded on a vehicle profile.
///
/// `suspension_type` is the single legacy value; the per-axle fields
/// override it when present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuspensionSetup {
    pub suspension_type: SuspensionType,
    #[serde(default)]
    pub front_suspension_type: Option<SuspensionType>,
    #[serde(default)]
    pub rear_suspension_type: Option<SuspensionType>,
}

impl SuspensionSetup {
    pub fn uniform(kind: SuspensionType) -> Self {
        Self {
            suspension_type: kind,
            front_suspension_type: None,
            rear_suspension_type: None,
        }
    }

    /// Override-or-fallback resolution, done once per vehicle
    pub fn resolve(&self) -> ResolvedSuspension {
        let front = self.front_suspension_type.unwrap_or(self.suspension_type);
        let rear = self.rear_suspension_type.unwrap_or(self.suspension_type);
        ResolvedSuspension {
            front: SuspensionSpec::standard(front),
            rear: SuspensionSpec::standard(rear),
        }
    }
}

/// Suspension spec per axle after override resolution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSuspension {
    pub front: SuspensionSpec,
    pub rear: SuspensionSpec,
}
