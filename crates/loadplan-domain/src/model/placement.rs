//! Autofill grid slots, options and results

use serde::{Deserialize, Serialize};

use super::cargo::CargoItem;
use super::distribution::WeightDistribution;

/// Which side of the body's centreline a slot sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    Center,
}

/// Side the optimizer fills first when everything else is equal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredSide {
    #[default]
    Left,
    Right,
}

/// A candidate grid cell. Slots never overlap: spacing equals the footprint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementSlot {
    pub x: f64,
    pub y: f64,
    pub row: usize,
    pub column: usize,
    pub side: Side,
    /// Distance from the front wall as a fraction of usable length
    pub relative_x: f64,
}

/// Weights of the autofill penalty terms.
///
/// Overage must dominate balance, which must dominate positional bias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PenaltyWeights {
    pub front_overage: f64,
    pub rear_overage: f64,
    pub gvm_overage: f64,
    pub balance: f64,
    pub front_relief_threshold: f64,
    pub front_relief: f64,
    pub forward_bias: f64,
    pub off_side: f64,
    pub center: f64,
    pub symmetry_tolerance: u32,
    pub symmetry: f64,
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        Self {
            front_overage: 1000.0,
            rear_overage: 1000.0,
            gvm_overage: 500.0,
            balance: 1.0,
            front_relief_threshold: 85.0,
            front_relief: 10.0,
            forward_bias: 50.0,
            off_side: 30.0,
            center: 10.0,
            symmetry_tolerance: 1,
            symmetry: 40.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutofillOptions {
    /// Discard existing items instead of packing around them
    pub replace_existing: bool,
    pub max_items: Option<usize>,
    pub penalty: PenaltyWeights,
    pub preferred_side: PreferredSide,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub item: CargoItem,
    pub slot: PlacementSlot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutofillResult {
    pub placements: Vec<PlacedItem>,
    /// Weights that could not be placed, in input order
    pub unplaced: Vec<f64>,
    /// Distribution of kept existing items plus every placement
    pub final_distribution: WeightDistribution,
}

impl AutofillResult {
    pub fn placed_weight(&self) -> f64 {
        self.placements.iter().map(|p| p.item.weight).sum()
    }
}
