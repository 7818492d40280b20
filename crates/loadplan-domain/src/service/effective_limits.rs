//! Effective legal limits: the stricter of manufacturer and regulatory

use serde::{Deserialize, Serialize};

use crate::model::{AxleRating, GmlLimits, VehicleClassification};
use crate::service::gml::compute_regulatory_limits;

/// Regulatory input, either precomputed or still to be derived
#[derive(Debug, Clone, PartialEq)]
pub enum RegulatorySource<'a> {
    Computed(&'a GmlLimits),
    Classification(&'a VehicleClassification),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LimitSource {
    Manufacturer,
    Regulatory,
}

impl LimitSource {
    pub fn label(&self) -> &'static str {
        match self {
            LimitSource::Manufacturer => "manufacturer",
            LimitSource::Regulatory => "regulatory",
        }
    }
}

/// What is actually legal, kg, and which side set each limit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectiveLimits {
    pub gvm: f64,
    pub front: f64,
    pub rear: f64,
    pub gvm_source: LimitSource,
    pub front_source: LimitSource,
    pub rear_source: LimitSource,
    pub regulatory: GmlLimits,
}

impl EffectiveLimits {
    pub fn as_rating(&self) -> AxleRating {
        AxleRating {
            front: self.front,
            rear: self.rear,
            gvm: self.gvm,
        }
    }
}

/// The single place legality is decided. Regulatory axle limits are taken
/// after any mass transfer. Ties are attributed to the manufacturer.
pub fn resolve_effective_limits(
    manufacturer: &AxleRating,
    regulatory: RegulatorySource<'_>,
) -> EffectiveLimits {
    let gml = match regulatory {
        RegulatorySource::Computed(limits) => limits.clone(),
        RegulatorySource::Classification(classification) => {
            compute_regulatory_limits(classification)
        }
    };

    let (gvm, gvm_source) = stricter(manufacturer.gvm, gml.gvm);
    let (front, front_source) = stricter(manufacturer.front, gml.effective_front_limit());
    let (rear, rear_source) = stricter(manufacturer.rear, gml.effective_rear_limit());

    EffectiveLimits {
        gvm,
        front,
        rear,
        gvm_source,
        front_source,
        rear_source,
        regulatory: gml,
    }
}

fn stricter(manufacturer: f64, regulatory: f64) -> (f64, LimitSource) {
    if manufacturer <= regulatory {
        (manufacturer, LimitSource::Manufacturer)
    } else {
        (regulatory, LimitSource::Regulatory)
    }
}
