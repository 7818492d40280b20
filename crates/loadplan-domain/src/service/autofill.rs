//! Automatic placement of weights onto a floor grid
//!
//! Heaviest weight first, each weight goes to the free slot whose resulting
//! distribution scores lowest. Later choices depend on earlier ones, so
//! assignment is sequential; the per-slot evaluations for one weight are
//! independent of each other.

use uuid::Uuid;

use crate::model::{
    AutofillOptions, AutofillResult, CargoItem, ItemFootprint, PenaltyWeights, PlacedItem,
    PlacementSlot, PreferredSide, Side, VehicleFrame, VehicleSetup, WeightDistribution,
};
use crate::model::cargo::rects_overlap;
use crate::service::weight_distribution::{compute_weight_distribution, SolverSettings};

/// Guards `floor(usable / footprint)` against exact fits landing a hair short
const GRID_EPSILON: f64 = 1e-9;

/// Left/right slot counts among placements made so far in one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideCounts {
    pub left: u32,
    pub right: u32,
}

impl SideCounts {
    pub fn with(mut self, side: Side) -> Self {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
            Side::Center => {}
        }
        self
    }

    pub fn imbalance(&self) -> u32 {
        self.left.abs_diff(self.right)
    }
}

/// Dense row-major grid over the usable floor: flush against the front wall,
/// centred across the width. Empty when the footprint does not fit.
pub fn generate_slots(frame: &VehicleFrame, footprint: &ItemFootprint) -> Vec<PlacementSlot> {
    if !(footprint.length > 0.0) || !(footprint.width > 0.0) {
        return Vec::new();
    }
    let floor = frame.usable_floor();
    let columns = ((floor.length + GRID_EPSILON) / footprint.length).floor() as usize;
    let rows = ((floor.width + GRID_EPSILON) / footprint.width).floor() as usize;
    if columns == 0 || rows == 0 {
        return Vec::new();
    }

    let side_offset = (floor.width - rows as f64 * footprint.width) / 2.0;
    let centreline = frame.body_width / 2.0;

    let mut slots = Vec::with_capacity(rows * columns);
    for row in 0..rows {
        let y = floor.origin_y + side_offset + row as f64 * footprint.width;
        let from_centre = y + footprint.width / 2.0 - centreline;
        let side = if from_centre.abs() <= footprint.width / 4.0 {
            Side::Center
        } else if from_centre < 0.0 {
            Side::Left
        } else {
            Side::Right
        };
        for column in 0..columns {
            let offset = column as f64 * footprint.length;
            slots.push(PlacementSlot {
                x: floor.origin_x + offset,
                y,
                row,
                column,
                side,
                relative_x: offset / floor.length,
            });
        }
    }
    slots
}

/// Lower is better. Overage dominates, then balance, then position.
pub fn score_placement(
    distribution: &WeightDistribution,
    slot: &PlacementSlot,
    sides: SideCounts,
    weights: &PenaltyWeights,
    preferred: PreferredSide,
) -> f64 {
    let front_over = (-distribution.front_remaining).max(0.0);
    let rear_over = (-distribution.rear_remaining).max(0.0);
    let gvm_over = (-distribution.gvm_remaining).max(0.0);

    let mut score = front_over * weights.front_overage
        + rear_over * weights.rear_overage
        + gvm_over * weights.gvm_overage;
    score += weights.balance * (distribution.front_percentage - distribution.rear_percentage).abs();
    score += (distribution.front_percentage - weights.front_relief_threshold).max(0.0)
        * weights.front_relief;
    score += slot.relative_x * weights.forward_bias;
    score += side_penalty(slot.side, preferred, weights);
    score += sides.imbalance().saturating_sub(weights.symmetry_tolerance) as f64 * weights.symmetry;
    score
}

fn side_penalty(side: Side, preferred: PreferredSide, weights: &PenaltyWeights) -> f64 {
    match (side, preferred) {
        (Side::Center, _) => weights.center,
        (Side::Left, PreferredSide::Left) | (Side::Right, PreferredSide::Right) => 0.0,
        _ => weights.off_side,
    }
}

pub fn optimize_placement(
    vehicle: &VehicleSetup,
    footprint: &ItemFootprint,
    weights: &[f64],
    existing: &[CargoItem],
    options: &AutofillOptions,
    settings: &SolverSettings,
) -> AutofillResult {
    let mut items: Vec<CargoItem> = if options.replace_existing {
        Vec::new()
    } else {
        existing.to_vec()
    };

    let slots = generate_slots(&vehicle.frame, footprint);
    let mut free: Vec<bool> = slots
        .iter()
        .map(|slot| {
            !items.iter().any(|item| {
                rects_overlap(
                    (slot.x, slot.y, footprint.length, footprint.width),
                    (item.x, item.y, item.length, item.width),
                )
            })
        })
        .collect();
    let free_count = free.iter().filter(|f| **f).count();
    let slot_limit = options
        .max_items
        .map_or(free_count, |cap| cap.min(free_count));

    // Heaviest first; equal weights keep input order
    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.sort_by(|&a, &b| weights[b].total_cmp(&weights[a]));

    let mut placed = vec![false; weights.len()];
    let mut placements = Vec::new();
    let mut sides = SideCounts::default();

    for index in order {
        let weight = weights[index];
        if placements.len() >= slot_limit || !(weight > 0.0) || !weight.is_finite() {
            continue;
        }

        let mut best: Option<(usize, f64)> = None;
        for (slot_index, slot) in slots.iter().enumerate() {
            if !free[slot_index] {
                continue;
            }
            items.push(item_at(String::new(), slot, footprint, weight));
            let distribution = compute_weight_distribution(vehicle, &items, settings);
            items.pop();

            let score = score_placement(
                &distribution,
                slot,
                sides.with(slot.side),
                &options.penalty,
                options.preferred_side,
            );
            if best.map_or(true, |(_, best_score)| score < best_score) {
                best = Some((slot_index, score));
            }
        }

        if let Some((slot_index, _)) = best {
            let slot = slots[slot_index];
            let item = item_at(Uuid::new_v4().to_string(), &slot, footprint, weight);
            free[slot_index] = false;
            sides = sides.with(slot.side);
            items.push(item.clone());
            placements.push(PlacedItem { item, slot });
            placed[index] = true;
        }
    }

    let unplaced = weights
        .iter()
        .zip(&placed)
        .filter(|(_, done)| !**done)
        .map(|(w, _)| *w)
        .collect();
    let final_distribution = compute_weight_distribution(vehicle, &items, settings);

    AutofillResult {
        placements,
        unplaced,
        final_distribution,
    }
}

fn item_at(id: String, slot: &PlacementSlot, footprint: &ItemFootprint, weight: f64) -> CargoItem {
    CargoItem {
        id,
        length: footprint.length,
        width: footprint.width,
        weight,
        x: slot.x,
        y: slot.y,
    }
}
