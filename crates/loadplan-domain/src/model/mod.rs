//! Domain model types

pub mod cargo;
pub mod classification;
pub mod distribution;
pub mod placement;
pub mod suspension;
pub mod vehicle;

pub use cargo::{CargoItem, CentreOfGravity, ItemFootprint};
pub use classification::{
    EmissionsStandard, GmlLimits, MassTransfer, RearAxleGroup, SteerAxle, TyreFitment,
    VehicleClassification, VehicleUse,
};
pub use distribution::{ComplianceStatus, SuspensionReport, WeightDistribution};
pub use placement::{
    AutofillOptions, AutofillResult, PenaltyWeights, PlacedItem, PlacementSlot, PreferredSide,
    Side,
};
pub use suspension::{
    CompressionCurve, CompressionModel, ResolvedSuspension, SuspensionSetup, SuspensionSpec,
    SuspensionType,
};
pub use vehicle::{AxlePositions, AxleRating, FloorArea, TareWeights, VehicleFrame, VehicleSetup};
