//! Infrastructure layer - file loaders for vehicle profiles and cargo manifests

pub mod cargo_csv;
pub mod profile_loader;

pub use cargo_csv::{load_cargo_manifest, read_cargo_manifest, write_cargo_manifest};
pub use profile_loader::{VehicleProfile, VehicleProfileLoader};
