//! Load planning engine
//!
//! Pure, synchronous functions over immutable snapshots: axle geometry,
//! centre of gravity, suspension-corrected axle weights, regulatory mass
//! limits and automatic pallet placement. Nothing here performs I/O or
//! holds state between calls.

pub mod model;
pub mod service;

pub use model::{
    AutofillOptions, AutofillResult, AxlePositions, AxleRating, CargoItem, CentreOfGravity,
    ComplianceStatus, CompressionCurve, CompressionModel, EmissionsStandard, FloorArea, GmlLimits,
    ItemFootprint, MassTransfer, PenaltyWeights, PlacedItem, PlacementSlot, PreferredSide,
    RearAxleGroup, ResolvedSuspension, Side, SteerAxle, SuspensionReport, SuspensionSetup,
    SuspensionSpec, SuspensionType, TareWeights, TyreFitment, VehicleClassification,
    VehicleFrame, VehicleSetup, VehicleUse, WeightDistribution,
};
pub use service::{
    compression, compute_axle_positions, compute_axle_positions_with_cab, compute_cog,
    compute_regulatory_limits, compute_weight_distribution, generate_slots,
    is_adr80_04_eligible, is_ahead_of_front_axle, optimize_placement, resolve_effective_limits,
    rigid_body_split, score_placement, validate_cargo, validate_frame, validate_rating,
    validate_tare, EffectiveLimits, LimitSource, RegulatorySource, SideCounts, SolverSettings,
    SuspensionCorrection, NOMINAL_CAB_LENGTH_M,
};
