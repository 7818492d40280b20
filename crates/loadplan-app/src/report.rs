//! Plain-text reports for the table output format

use loadplan_domain::model::{AxleRating, WeightDistribution};
use loadplan_domain::service::EffectiveLimits;

use crate::planner::{AutofillPlan, DistributionPlan, VehicleSummary};

const RULE: &str = "==================================================\n";

fn header(report: &mut String, title: &str, vehicle: &str) {
    report.push_str(RULE);
    report.push_str(&format!("  {}\n", title));
    report.push_str(&format!("  Vehicle: {}\n", vehicle));
    report.push_str(RULE);
    report.push('\n');
}

pub fn generate_axles_report(summary: &VehicleSummary) -> String {
    let mut report = String::new();
    header(&mut report, "Axle Positions", &summary.vehicle);

    report.push_str(&format!("  Front axle:  {:>7.3} m\n", summary.axles.front));
    report.push_str(&format!("  Rear axle:   {:>7.3} m\n", summary.axles.rear));
    report.push_str(&format!("  Wheelbase:   {:>7.3} m\n", summary.axles.wheelbase()));
    report.push_str("  (measured from the front of the cargo area)\n");
    report
}

pub fn generate_limits_report(summary: &VehicleSummary) -> String {
    let mut report = String::new();
    header(&mut report, "Effective Limits", &summary.vehicle);

    match &summary.limits {
        Some(limits) => push_limits_table(&mut report, &summary.manufacturer, limits),
        None => {
            report.push_str("  No regulatory classification on this profile.\n");
            report.push_str("  Manufacturer ratings apply:\n\n");
            push_rating(&mut report, &summary.applied_limits);
        }
    }
    report
}

fn push_limits_table(report: &mut String, manufacturer: &AxleRating, limits: &EffectiveLimits) {
    let regulatory = &limits.regulatory;
    report.push_str(&format!(
        "{:<8} {:>12} {:>12} {:>12}  {}\n",
        "", "Manufacturer", "Regulatory", "Effective", "Set by"
    ));
    report.push_str("-".repeat(62).as_str());
    report.push('\n');

    let rows = [
        ("GVM", manufacturer.gvm, regulatory.gvm, limits.gvm, limits.gvm_source),
        (
            "Front",
            manufacturer.front,
            regulatory.effective_front_limit(),
            limits.front,
            limits.front_source,
        ),
        (
            "Rear",
            manufacturer.rear,
            regulatory.effective_rear_limit(),
            limits.rear,
            limits.rear_source,
        ),
    ];
    for (name, mfg, reg, effective, source) in rows {
        report.push_str(&format!(
            "{:<8} {:>10.0}kg {:>10.0}kg {:>10.0}kg  {}\n",
            name,
            mfg,
            reg,
            effective,
            source.label()
        ));
    }
    report.push('\n');

    if let Some(table1) = regulatory.table1_limit {
        report.push_str(&format!("  Configuration GVM ceiling: {:.0} kg\n", table1));
    }
    if regulatory.spacing_limited {
        report.push_str("  GVM capped at 15000 kg by close axle spacing\n");
    }
    report.push_str(&format!(
        "  ADR 80/04 steer axle tier: {}\n",
        if regulatory.adr80_04_eligible { "eligible" } else { "not eligible" }
    ));
    if let Some(transfer) = regulatory.mass_transfer {
        report.push_str(&format!(
            "  Mass transfer: {:.0} kg from steer (base {:.0} kg) to rear (base {:.0} kg)\n",
            transfer.amount, regulatory.front_limit, regulatory.rear_limit
        ));
    }
}

fn push_rating(report: &mut String, rating: &AxleRating) {
    report.push_str(&format!("  GVM:    {:>8.0} kg\n", rating.gvm));
    report.push_str(&format!("  Front:  {:>8.0} kg\n", rating.front));
    report.push_str(&format!("  Rear:   {:>8.0} kg\n", rating.rear));
}

pub fn generate_distribution_report(plan: &DistributionPlan) -> String {
    let mut report = String::new();
    header(&mut report, "Axle Weight Distribution", &plan.vehicle);

    push_distribution(&mut report, &plan.distribution, &plan.applied_limits);

    if !plan.forward_items.is_empty() {
        report.push_str("【Items ahead of the front axle】\n");
        for id in &plan.forward_items {
            report.push_str(&format!("  - {}\n", id));
        }
        report.push('\n');
    }

    report.push_str(&format!("Status: {}\n", plan.status.label()));
    report
}

fn push_distribution(report: &mut String, d: &WeightDistribution, limits: &AxleRating) {
    report.push_str("【Summary】\n");
    report.push_str(&format!("  Cargo weight:    {:>9.1} kg\n", d.cargo_weight));
    report.push_str(&format!(
        "  Load COG:        x {:.3} m, y {:.3} m\n",
        d.load_cog_x, d.load_cog_y
    ));
    report.push('\n');

    report.push_str(&format!(
        "{:<8} {:>10} {:>10} {:>10} {:>8}\n",
        "", "Weight", "Limit", "Remaining", "Load"
    ));
    report.push_str("-".repeat(50).as_str());
    report.push('\n');
    let rows = [
        ("Front", d.front_axle_weight, limits.front, d.front_remaining, d.front_percentage, d.is_front_overweight),
        ("Rear", d.rear_axle_weight, limits.rear, d.rear_remaining, d.rear_percentage, d.is_rear_overweight),
        ("Total", d.total_weight, limits.gvm, d.gvm_remaining, d.gvm_percentage, d.is_overweight),
    ];
    for (name, weight, limit, remaining, pct, over) in rows {
        report.push_str(&format!(
            "{:<8} {:>8.0}kg {:>8.0}kg {:>+8.0}kg {:>7.1}%{}\n",
            name,
            weight,
            limit,
            remaining,
            pct,
            if over { "  OVER" } else { "" }
        ));
    }
    report.push('\n');

    if let Some(s) = &d.suspension {
        report.push_str("【Suspension correction】\n");
        report.push_str(&format!(
            "  Compression:     front {:.1} mm, rear {:.1} mm\n",
            s.front_compression_m * 1000.0,
            s.rear_compression_m * 1000.0
        ));
        report.push_str(&format!(
            "  Pitch:           {:.4} deg\n",
            s.pitch_rad.to_degrees()
        ));
        report.push_str(&format!("  Weight shift:    {:+.1} kg (to rear)\n", s.weight_shift_kg));
        report.push_str(&format!(
            "  Iterations:      {}{}\n",
            s.iterations,
            if s.converged { "" } else { " (cap reached)" }
        ));
        report.push('\n');
    }
}

pub fn generate_autofill_report(plan: &AutofillPlan) -> String {
    let mut report = String::new();
    header(&mut report, "Autofill Placement", &plan.vehicle);

    let result = &plan.result;
    report.push_str(&format!(
        "  Placed:   {} item(s), {:.0} kg\n",
        result.placements.len(),
        result.placed_weight()
    ));
    report.push_str(&format!("  Unplaced: {} weight(s)\n\n", result.unplaced.len()));

    if !result.placements.is_empty() {
        report.push_str(&format!(
            "{:<4} {:>4} {:>4} {:>8} {:>8} {:>8}  {}\n",
            "#", "Row", "Col", "x", "y", "Weight", "Side"
        ));
        report.push_str("-".repeat(50).as_str());
        report.push('\n');
        for (i, placed) in result.placements.iter().enumerate() {
            report.push_str(&format!(
                "{:<4} {:>4} {:>4} {:>7.2}m {:>7.2}m {:>6.0}kg  {:?}\n",
                i + 1,
                placed.slot.row,
                placed.slot.column,
                placed.slot.x,
                placed.slot.y,
                placed.item.weight,
                placed.slot.side
            ));
        }
        report.push('\n');
    }

    if !result.unplaced.is_empty() {
        report.push_str("【Unplaced weights】\n  ");
        let list: Vec<String> = result.unplaced.iter().map(|w| format!("{:.0}kg", w)).collect();
        report.push_str(&list.join(", "));
        report.push_str("\n\n");
    }

    push_distribution(&mut report, &result.final_distribution, &plan.applied_limits);
    report.push_str(&format!("Status: {}\n", plan.status.label()));
    report
}

pub fn generate_validation_report(vehicle: &str, violations: &[String]) -> String {
    let mut report = String::new();
    header(&mut report, "Validation", vehicle);
    if violations.is_empty() {
        report.push_str("  No problems found.\n");
    } else {
        report.push_str(&format!("  {} problem(s):\n", violations.len()));
        for v in violations {
            report.push_str(&format!("  - {}\n", v));
        }
    }
    report
}
