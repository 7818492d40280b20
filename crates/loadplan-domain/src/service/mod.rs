//! Domain services

pub mod autofill;
pub mod cog;
pub mod effective_limits;
pub mod geometry;
pub mod gml;
pub mod suspension;
pub mod validation;
pub mod weight_distribution;

pub use autofill::{generate_slots, optimize_placement, score_placement, SideCounts};
pub use cog::compute_cog;
pub use effective_limits::{
    resolve_effective_limits, EffectiveLimits, LimitSource, RegulatorySource,
};
pub use geometry::{compute_axle_positions, compute_axle_positions_with_cab, NOMINAL_CAB_LENGTH_M};
pub use gml::{compute_regulatory_limits, is_adr80_04_eligible};
pub use suspension::compression;
pub use validation::{
    is_ahead_of_front_axle, validate_cargo, validate_frame, validate_rating, validate_tare,
};
pub use weight_distribution::{
    compute_weight_distribution, rigid_body_split, SolverSettings, SuspensionCorrection,
};
