//! Planning use cases end to end, from TOML profiles to reports

use loadplan_app::config::Config;
use loadplan_app::planner::{AutofillRequest, LoadPlanner};
use loadplan_app::report::{generate_autofill_report, generate_limits_report};
use loadplan_domain::model::{CargoItem, ComplianceStatus, ItemFootprint};
use loadplan_domain::service::LimitSource;
use loadplan_infra::VehicleProfileLoader;
use loadplan_types::Error;

const PROFILES: &str = r#"
[[vehicles]]
name = "rigid-6t"
frame = { wheelbase = 4.25, front_overhang = 1.3, rear_overhang = 2.2, cab_to_axle = 5.69, body_length = 7.2, body_width = 2.45 }
manufacturer = { front = 6500.0, rear = 10000.0, gvm = 16000.0 }
tare = { front = 3200.0, rear = 1800.0 }
suspension = { suspension_type = "multi_leaf_steel" }

[vehicles.classification]
steer_axle = "single"
rear_group = "single"
front_tyre_width_mm = 295.0
rear_tyres = "dual"
rear_tyre_width_mm = 275.0

[[vehicles]]
name = "no-class"
frame = { wheelbase = 4.25, front_overhang = 1.3, rear_overhang = 2.2, body_length = 7.2, body_width = 2.45 }
manufacturer = { front = 6500.0, rear = 10000.0, gvm = 16000.0 }
tare = { front = 3200.0, rear = 1800.0 }
suspension = { suspension_type = "taper_leaf", rear_suspension_type = "airbag" }

[[vehicles]]
name = "broken"
frame = { wheelbase = 0.0, front_overhang = 1.3, rear_overhang = 2.2, body_length = 7.2, body_width = 2.45 }
manufacturer = { front = 6500.0, rear = 0.0, gvm = 16000.0 }
tare = { front = 3200.0, rear = 1800.0 }
suspension = { suspension_type = "airbag" }
"#;

fn loader() -> VehicleProfileLoader {
    VehicleProfileLoader::load_from_str(PROFILES).unwrap()
}

fn pallet(id: &str, weight: f64, x: f64) -> CargoItem {
    CargoItem {
        id: id.to_string(),
        length: 1.2,
        width: 1.0,
        weight,
        x,
        y: 0.225,
    }
}

#[test]
fn regulatory_limits_bind_when_stricter() {
    let loader = loader();
    let planner = LoadPlanner::new(&Config::default());
    let summary = planner.summarize(loader.get("rigid-6t").unwrap()).unwrap();

    let limits = summary.limits.as_ref().unwrap();
    assert_eq!(limits.gvm, 15_000.0);
    assert_eq!(limits.gvm_source, LimitSource::Regulatory);
    assert_eq!(limits.front, 6000.0);
    assert_eq!(limits.rear, 9000.0);
    assert_eq!(summary.applied_limits.gvm, 15_000.0);

    let report = generate_limits_report(&summary);
    assert!(report.contains("regulatory"));
}

#[test]
fn manufacturer_ratings_apply_without_classification() {
    let loader = loader();
    let planner = LoadPlanner::new(&Config::default());
    let summary = planner.summarize(loader.get("no-class").unwrap()).unwrap();
    assert!(summary.limits.is_none());
    assert_eq!(summary.applied_limits.gvm, 16_000.0);
    // nominal 2.0 m cab: front axle at -2.0 + 1.3
    assert!((summary.axles.front + 0.7).abs() < 1e-9);
}

#[test]
fn invalid_profile_reports_every_violation() {
    let loader = loader();
    let planner = LoadPlanner::new(&Config::default());
    match planner.plan_distribution(loader.get("broken").unwrap(), &[]) {
        Err(Error::InvalidInput(violations)) => {
            assert!(violations.iter().any(|v| v.contains("wheelbase")));
            assert!(violations.iter().any(|v| v.contains("manufacturer rear")));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn overlapping_cargo_is_rejected() {
    let loader = loader();
    let planner = LoadPlanner::new(&Config::default());
    let cargo = [pallet("a", 500.0, 1.0), pallet("b", 500.0, 1.5)];
    let err = planner
        .plan_distribution(loader.get("rigid-6t").unwrap(), &cargo)
        .unwrap_err();
    assert!(err.to_string().contains("overlap"));
}

#[test]
fn distribution_conserves_weight() {
    let loader = loader();
    let planner = LoadPlanner::new(&Config::default());
    let cargo = [pallet("a", 900.0, 0.05), pallet("b", 1200.0, 3.0)];
    let plan = planner
        .plan_distribution(loader.get("rigid-6t").unwrap(), &cargo)
        .unwrap();
    let d = &plan.distribution;
    assert_eq!(d.front_axle_weight + d.rear_axle_weight, d.total_weight);
    assert!((d.total_weight - 7100.0).abs() < 1e-6);
    assert_eq!(plan.status, ComplianceStatus::Compliant);
    assert_eq!(plan.forward_items, vec!["a".to_string()]);
}

#[test]
fn correction_toggle_reaches_the_solver() {
    let loader = loader();
    let mut config = Config::default();
    config.suspension_correction = false;
    let planner = LoadPlanner::new(&config);
    let plan = planner
        .plan_distribution(loader.get("no-class").unwrap(), &[pallet("a", 2000.0, 2.0)])
        .unwrap();
    assert!(plan.distribution.suspension.is_none());
}

#[test]
fn autofill_completes_and_renders() {
    let loader = loader();
    let planner = LoadPlanner::new(&Config::default());
    let request = AutofillRequest {
        footprint: ItemFootprint {
            length: 1.2,
            width: 1.0,
        },
        weights: vec![800.0, 600.0, 1000.0, 400.0],
        existing: vec![],
        replace_existing: false,
        max_items: None,
    };
    let plan = planner
        .plan_autofill(loader.get("rigid-6t").unwrap(), &request)
        .unwrap();
    assert_eq!(plan.result.placements.len(), 4);
    assert!(plan.result.unplaced.is_empty());
    assert!((plan.result.placed_weight() - 2800.0).abs() < 1e-9);

    let report = generate_autofill_report(&plan);
    assert!(report.contains("Placed:   4 item(s), 2800 kg"));
}

#[test]
fn autofill_rejects_invalid_existing_cargo_unless_replacing() {
    let loader = loader();
    let planner = LoadPlanner::new(&Config::default());
    let mut request = AutofillRequest {
        footprint: ItemFootprint {
            length: 1.2,
            width: 1.0,
        },
        weights: vec![500.0],
        existing: vec![pallet("outside", 500.0, 9.0)],
        replace_existing: false,
        max_items: None,
    };
    let profile = loader.get("rigid-6t").unwrap();
    assert!(matches!(
        planner.plan_autofill(profile, &request),
        Err(Error::InvalidInput(_))
    ));

    request.replace_existing = true;
    let plan = planner.plan_autofill(profile, &request).unwrap();
    assert_eq!(plan.result.placements.len(), 1);
}
