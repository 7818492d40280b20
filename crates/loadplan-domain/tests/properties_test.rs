//! Property and scenario checks across the domain services
//!
//! Runs each service over sweeps of inputs rather than single cases.

use loadplan_domain::{
    compression, compute_axle_positions, compute_regulatory_limits, compute_weight_distribution,
    optimize_placement, resolve_effective_limits, rigid_body_split, AutofillOptions, AxleRating,
    CargoItem, EmissionsStandard, ItemFootprint, RearAxleGroup, RegulatorySource, SolverSettings,
    SteerAxle, SuspensionSetup, SuspensionSpec, SuspensionType, TareWeights, TyreFitment,
    VehicleClassification, VehicleFrame, VehicleSetup, VehicleUse,
};
use std::collections::HashSet;

const SUSPENSIONS: [SuspensionType; 3] = [
    SuspensionType::TaperLeaf,
    SuspensionType::MultiLeafSteel,
    SuspensionType::Airbag,
];

fn frame() -> VehicleFrame {
    VehicleFrame {
        wheelbase: 4.25,
        front_overhang: 1.3,
        rear_overhang: 2.2,
        cab_to_axle: Some(5.69),
        body_length: 7.2,
        body_width: 2.45,
        wall_thickness: 0.05,
    }
}

fn vehicle(front: SuspensionType, rear: SuspensionType, tare: TareWeights) -> VehicleSetup {
    VehicleSetup {
        frame: frame(),
        limits: AxleRating {
            front: 6000.0,
            rear: 9000.0,
            gvm: 15_000.0,
        },
        suspension: SuspensionSetup {
            suspension_type: front,
            front_suspension_type: None,
            rear_suspension_type: Some(rear),
        }
        .resolve(),
        tare,
    }
}

fn item(id: &str, weight: f64, x: f64, length: f64) -> CargoItem {
    CargoItem {
        id: id.to_string(),
        length,
        width: 1.0,
        weight,
        x,
        y: 0.1,
    }
}

fn classification(steer: SteerAxle, rear: RearAxleGroup) -> VehicleClassification {
    VehicleClassification {
        steer_axle: steer,
        rear_group: rear,
        front_tyre_width_mm: 295.0,
        rear_tyres: TyreFitment::Dual,
        rear_tyre_width_mm: 275.0,
        vehicle_use: VehicleUse::Rigid,
        emissions: EmissionsStandard::Legacy,
        compliant_cabin: false,
        load_sharing_suspension: false,
        manufacturer_gvm: None,
        axle_spacing: None,
        mass_transfer: None,
    }
}

/// Every combination of the discrete classification fields, with a few spacings
fn all_classifications() -> Vec<VehicleClassification> {
    let mut out = Vec::new();
    for steer in [SteerAxle::Single, SteerAxle::Twin] {
        for rear in [
            RearAxleGroup::Single,
            RearAxleGroup::Tandem,
            RearAxleGroup::Tri,
            RearAxleGroup::Quad,
            RearAxleGroup::FivePlus,
        ] {
            for tyres in [TyreFitment::Single, TyreFitment::Dual] {
                for vehicle_use in [
                    VehicleUse::Rigid,
                    VehicleUse::Bus,
                    VehicleUse::BDouble,
                    VehicleUse::RoadTrain,
                    VehicleUse::PigTrailer,
                    VehicleUse::LowLoader,
                ] {
                    for emissions in [EmissionsStandard::Legacy, EmissionsStandard::Adr80_04] {
                        for spacing in [None, Some(2.0), Some(3.5)] {
                            let mut c = classification(steer, rear);
                            c.rear_tyres = tyres;
                            c.rear_tyre_width_mm = 385.0;
                            c.front_tyre_width_mm = 385.0;
                            c.vehicle_use = vehicle_use;
                            c.emissions = emissions;
                            c.compliant_cabin = true;
                            c.load_sharing_suspension = true;
                            c.manufacturer_gvm = Some(16_000.0);
                            c.axle_spacing = spacing;
                            c.mass_transfer = Some(500.0);
                            out.push(c);
                        }
                    }
                }
            }
        }
    }
    out
}

#[test]
fn conservation_holds_for_any_cog_position() {
    let tare = TareWeights {
        front: 3200.0,
        rear: 1800.0,
    };
    for front in SUSPENSIONS {
        for rear in SUSPENSIONS {
            let v = vehicle(front, rear, tare);
            // x sweeps from ahead of the front axle to behind the rear axle
            for step in 0..=59 {
                let x = 0.05 + step as f64 * 0.1;
                for weight in [50.0, 2000.0, 9000.0, 25_000.0] {
                    let cargo = [item("a", weight, x, 1.2)];
                    for settings in [SolverSettings::default(), SolverSettings::rigid()] {
                        let d = compute_weight_distribution(&v, &cargo, &settings);
                        assert_eq!(d.front_axle_weight + d.rear_axle_weight, d.total_weight);
                        assert!(d.front_axle_weight >= 0.0);
                        assert!(d.rear_axle_weight >= 0.0);
                        assert!((d.total_weight - (tare.total() + weight)).abs() < 1e-6);
                    }
                }
            }
        }
    }
}

#[test]
fn zero_load_returns_exact_tare() {
    let tare = TareWeights {
        front: 3123.4,
        rear: 1876.6,
    };
    for kind in SUSPENSIONS {
        let v = vehicle(kind, kind, tare);
        let d = compute_weight_distribution(&v, &[], &SolverSettings::default());
        assert_eq!(d.front_axle_weight, tare.front);
        assert_eq!(d.rear_axle_weight, tare.rear);
        assert_eq!(d.load_cog_x, 0.0);
        assert_eq!(d.load_cog_y, 0.0);
        assert_eq!(d.cargo_weight, 0.0);
    }
}

#[test]
fn compression_is_monotonic_and_capped() {
    for kind in SUSPENSIONS {
        let cap = SuspensionSpec::standard(kind).curve.max_travel_mm() / 1000.0;
        let mut previous = compression(0.0, kind);
        for step in 1..=600 {
            let current = compression(step as f64 * 100.0, kind);
            assert!(current >= previous, "{kind} decreased at step {step}");
            assert!(current <= cap + 1e-12);
            previous = current;
        }
    }
}

#[test]
fn gml_gvm_never_exceeds_any_ceiling() {
    for c in all_classifications() {
        let limits = compute_regulatory_limits(&c);
        let axle_sum = limits.effective_front_limit() + limits.effective_rear_limit();
        assert!(limits.gvm <= axle_sum + 1e-9, "{c:?}");
        if let Some(ceiling) = limits.table1_limit {
            assert!(limits.gvm <= ceiling, "{c:?}");
        }
        if c.axle_spacing.is_some_and(|s| s < 2.5) {
            assert!(limits.gvm <= 15_000.0, "{c:?}");
        }
        if let Some(transfer) = limits.mass_transfer {
            assert!(transfer.amount > 0.0 && transfer.amount <= 500.0);
            assert!(limits.adr80_04_eligible);
        }
    }
}

#[test]
fn effective_limits_are_exact_minimum() {
    let ratings = [
        AxleRating {
            front: 5000.0,
            rear: 8000.0,
            gvm: 13_000.0,
        },
        AxleRating {
            front: 8000.0,
            rear: 25_000.0,
            gvm: 40_000.0,
        },
    ];
    for c in all_classifications() {
        let gml = compute_regulatory_limits(&c);
        for mfg in &ratings {
            let effective = resolve_effective_limits(mfg, RegulatorySource::Computed(&gml));
            assert_eq!(effective.front, mfg.front.min(gml.effective_front_limit()));
            assert_eq!(effective.rear, mfg.rear.min(gml.effective_rear_limit()));
            assert_eq!(effective.gvm, mfg.gvm.min(gml.gvm));
        }
    }
}

#[test]
fn optimizer_places_or_reports_every_weight() {
    let v = vehicle(
        SuspensionType::MultiLeafSteel,
        SuspensionType::Airbag,
        TareWeights {
            front: 3200.0,
            rear: 1800.0,
        },
    );
    let footprint = ItemFootprint {
        length: 1.2,
        width: 1.0,
    };
    let weights: Vec<f64> = (0..14).map(|i| 200.0 + (i * 137 % 900) as f64).collect();
    let result = optimize_placement(
        &v,
        &footprint,
        &weights,
        &[],
        &AutofillOptions::default(),
        &SolverSettings::default(),
    );

    // 10 slots on this floor
    assert_eq!(result.placements.len(), 10);
    assert_eq!(result.placements.len() + result.unplaced.len(), weights.len());

    let cells: HashSet<(usize, usize)> = result
        .placements
        .iter()
        .map(|p| (p.slot.row, p.slot.column))
        .collect();
    assert_eq!(cells.len(), result.placements.len());

    for (i, a) in result.placements.iter().enumerate() {
        for b in &result.placements[i + 1..] {
            assert!(!a.item.overlaps(&b.item));
            assert_ne!(a.item.id, b.item.id);
        }
    }

    // the lightest weights are the ones left over
    let heaviest_unplaced = result.unplaced.iter().cloned().fold(f64::MIN, f64::max);
    let lightest_placed = result
        .placements
        .iter()
        .map(|p| p.item.weight)
        .fold(f64::MAX, f64::min);
    assert!(heaviest_unplaced <= lightest_placed);
}

#[test]
fn scenario_cog_on_rear_axle_loads_only_rear() {
    let axles = compute_axle_positions(&frame());
    assert!((axles.front - 1.44).abs() < 1e-9);
    assert!((axles.rear - 5.69).abs() < 1e-9);

    // 4 m item starting at 3.69 has its centre on the rear axle
    let cargo = [item("a", 1000.0, 3.69, 4.0)];
    let (front, rear) = rigid_body_split(1000.0, cargo[0].centre_x(), &axles);
    assert!(front.abs() < 1e-9);
    assert!((rear - 1000.0).abs() < 1e-9);

    let v = vehicle(
        SuspensionType::TaperLeaf,
        SuspensionType::TaperLeaf,
        TareWeights {
            front: 3000.0,
            rear: 2000.0,
        },
    );
    let d = compute_weight_distribution(&v, &cargo, &SolverSettings::rigid());
    assert!((d.front_axle_weight - 3000.0).abs() < 1e-9);
    assert!((d.rear_axle_weight - 3000.0).abs() < 1e-9);
}

#[test]
fn scenario_single_rear_axle_gml() {
    let c = classification(SteerAxle::Single, RearAxleGroup::Single);
    let limits = compute_regulatory_limits(&c);
    assert_eq!(limits.front_limit, 6000.0);
    assert_eq!(limits.rear_limit, 9000.0);
    assert_eq!(limits.table1_limit, None);
    assert!(!limits.spacing_limited);
    assert_eq!(limits.gvm, 15_000.0);
}

#[test]
fn scenario_mass_transfer() {
    let mut c = classification(SteerAxle::Single, RearAxleGroup::Tandem);
    c.emissions = EmissionsStandard::Adr80_04;
    c.compliant_cabin = true;
    c.manufacturer_gvm = Some(23_000.0);
    c.front_tyre_width_mm = 385.0;
    c.mass_transfer = Some(500.0);

    let limits = compute_regulatory_limits(&c);
    assert!(limits.adr80_04_eligible);
    assert_eq!(limits.front_limit, 7000.0);
    assert_eq!(limits.effective_front_limit(), 6500.0);
    assert_eq!(limits.effective_rear_limit(), limits.rear_limit + 500.0);
}

#[test]
fn scenario_autofill_infeasible() {
    let v = vehicle(
        SuspensionType::TaperLeaf,
        SuspensionType::TaperLeaf,
        TareWeights {
            front: 3000.0,
            rear: 2000.0,
        },
    );
    let footprint = ItemFootprint {
        length: 7.5,
        width: 1.0,
    };
    let weights = vec![1200.0, 300.0, 800.0];
    let result = optimize_placement(
        &v,
        &footprint,
        &weights,
        &[],
        &AutofillOptions::default(),
        &SolverSettings::default(),
    );
    assert!(result.placements.is_empty());
    assert_eq!(result.unplaced, weights);
}

#[test]
fn model_and_service_modules_stay_addressable() {
    use loadplan_domain::model::suspension::SuspensionSpec as ModelSpec;
    use loadplan_domain::service::suspension::compression as service_compression;
    use loadplan_domain::CompressionModel;

    for kind in SUSPENSIONS {
        let spec = ModelSpec::standard(kind);
        assert_eq!(service_compression(3000.0, kind), compression(3000.0, kind));
        assert!(service_compression(3000.0, kind) <= spec.max_travel());
    }
}
