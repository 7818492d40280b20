//! Output formatting module

use loadplan_app::planner::{AutofillPlan, DistributionPlan, VehicleSummary};
use loadplan_app::report::{
    generate_autofill_report, generate_axles_report, generate_distribution_report,
    generate_limits_report, generate_validation_report,
};
use loadplan_infra::VehicleProfile;
use loadplan_types::{OutputFormat, Result};
use serde::Serialize;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    println!("{}", content);
    Ok(())
}

pub fn output_profiles(output_format: OutputFormat, profiles: &[VehicleProfile]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&profiles);
    }

    println!("{:<20} {:>9} {:>9} {:>9}  {}", "Name", "Wheelbase", "Body", "GVM", "Description");
    println!("{}", "-".repeat(70));
    for p in profiles {
        println!(
            "{:<20} {:>8.2}m {:>8.2}m {:>7.0}kg  {}",
            p.name,
            p.frame.wheelbase,
            p.frame.body_length,
            p.manufacturer.gvm,
            p.description.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

pub fn output_axles(output_format: OutputFormat, summary: &VehicleSummary) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&summary.axles);
    }
    print!("{}", generate_axles_report(summary));
    Ok(())
}

pub fn output_limits(output_format: OutputFormat, summary: &VehicleSummary) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(summary);
    }
    print!("{}", generate_limits_report(summary));
    Ok(())
}

pub fn output_distribution(output_format: OutputFormat, plan: &DistributionPlan) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(plan);
    }
    print!("{}", generate_distribution_report(plan));
    Ok(())
}

pub fn output_autofill(output_format: OutputFormat, plan: &AutofillPlan) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(plan);
    }
    print!("{}", generate_autofill_report(plan));
    Ok(())
}

#[derive(Serialize)]
struct ValidationOutput<'a> {
    vehicle: &'a str,
    valid: bool,
    violations: &'a [String],
}

pub fn output_validation(
    output_format: OutputFormat,
    vehicle: &str,
    violations: &[String],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&ValidationOutput {
            vehicle,
            valid: violations.is_empty(),
            violations,
        });
    }
    print!("{}", generate_validation_report(vehicle, violations));
    Ok(())
}
