//! Command handlers

use std::fs::File;
use std::path::{Path, PathBuf};

use loadplan_app::config::Config;
use loadplan_app::planner::{AutofillRequest, LoadPlanner};
use loadplan_domain::model::{CargoItem, ItemFootprint};
use loadplan_infra::{load_cargo_manifest, write_cargo_manifest, VehicleProfile, VehicleProfileLoader};
use loadplan_types::{ConfigError, Error, OutputFormat, Result};
use tracing::{debug, info};

use crate::cli::{Cli, Commands, SideArg, VehicleArgs};
use crate::output::{
    output_autofill, output_axles, output_distribution, output_limits, output_profiles,
    output_validation,
};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if cli.no_correction {
        config.suspension_correction = false;
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Profiles { profiles } => cmd_profiles(&config, profiles.as_deref(), output_format),

        Commands::Axles { target } => {
            let profile = load_profile(&config, target)?;
            let summary = LoadPlanner::new(&config).summarize(&profile)?;
            output_axles(output_format, &summary)
        }

        Commands::Limits { target } => {
            let profile = load_profile(&config, target)?;
            let summary = LoadPlanner::new(&config).summarize(&profile)?;
            output_limits(output_format, &summary)
        }

        Commands::Distribution { target, cargo } => {
            cmd_distribution(&config, target, cargo, output_format)
        }

        Commands::Autofill {
            target,
            cargo,
            item_length,
            item_width,
            weights,
            replace,
            max_items,
            output,
        } => {
            let request = AutofillRequest {
                footprint: ItemFootprint {
                    length: *item_length,
                    width: *item_width,
                },
                weights: weights.clone(),
                existing: load_optional_cargo(cargo.as_deref())?,
                replace_existing: *replace,
                max_items: *max_items,
            };
            cmd_autofill(&config, target, &request, output.as_deref(), output_format)
        }

        Commands::Validate { target, cargo } => {
            cmd_validate(&config, target, cargo.as_deref(), output_format)
        }

        Commands::Config {
            show,
            set_output,
            set_profiles,
            set_correction,
            set_cab_length,
            set_preferred_side,
            reset,
        } => cmd_config(
            *show,
            *set_output,
            set_profiles.clone(),
            *set_correction,
            *set_cab_length,
            *set_preferred_side,
            *reset,
        ),
    }
}

fn profiles_path(config: &Config, arg: Option<&Path>) -> Result<PathBuf> {
    arg.map(Path::to_path_buf)
        .or_else(|| config.profiles_path.clone())
        .ok_or_else(|| ConfigError::NoProfiles.into())
}

fn load_profile(config: &Config, target: &VehicleArgs) -> Result<VehicleProfile> {
    let path = profiles_path(config, target.profiles.as_deref())?;
    debug!("Loading vehicle profiles from {}", path.display());
    let loader = VehicleProfileLoader::load_from_file(&path)?;
    Ok(loader.get(&target.vehicle)?.clone())
}

fn load_optional_cargo(path: Option<&Path>) -> Result<Vec<CargoItem>> {
    match path {
        Some(path) => {
            let items = load_cargo_manifest(path)?;
            debug!("Loaded {} cargo item(s) from {}", items.len(), path.display());
            Ok(items)
        }
        None => Ok(Vec::new()),
    }
}

fn cmd_profiles(config: &Config, profiles: Option<&Path>, output_format: OutputFormat) -> Result<()> {
    let path = profiles_path(config, profiles)?;
    let loader = VehicleProfileLoader::load_from_file(&path)?;
    output_profiles(output_format, loader.all())
}

fn cmd_distribution(
    config: &Config,
    target: &VehicleArgs,
    cargo: &Path,
    output_format: OutputFormat,
) -> Result<()> {
    let profile = load_profile(config, target)?;
    let items = load_cargo_manifest(cargo)?;
    let plan = LoadPlanner::new(config).plan_distribution(&profile, &items)?;
    output_distribution(output_format, &plan)
}

fn cmd_autofill(
    config: &Config,
    target: &VehicleArgs,
    request: &AutofillRequest,
    output: Option<&Path>,
    output_format: OutputFormat,
) -> Result<()> {
    let profile = load_profile(config, target)?;
    let plan = LoadPlanner::new(config).plan_autofill(&profile, request)?;

    if let Some(path) = output {
        let mut manifest = if request.replace_existing {
            Vec::new()
        } else {
            request.existing.clone()
        };
        manifest.extend(plan.result.placements.iter().map(|p| p.item.clone()));
        write_cargo_manifest(File::create(path)?, &manifest)?;
        info!("Wrote {} item(s) to {}", manifest.len(), path.display());
    }

    output_autofill(output_format, &plan)
}

fn cmd_validate(
    config: &Config,
    target: &VehicleArgs,
    cargo: Option<&Path>,
    output_format: OutputFormat,
) -> Result<()> {
    let profile = load_profile(config, target)?;
    let items = load_optional_cargo(cargo)?;
    let violations = LoadPlanner::new(config).validate(&profile, &items);

    output_validation(output_format, &profile.name, &violations)?;
    if violations.is_empty() {
        Ok(())
    } else {
        Err(Error::ValidationFailed(violations.len()))
    }
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_profiles: Option<PathBuf>,
    set_correction: Option<bool>,
    set_cab_length: Option<f64>,
    set_preferred_side: Option<SideArg>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(path) = set_profiles {
        config.profiles_path = Some(path);
        modified = true;
    }

    if let Some(enabled) = set_correction {
        config.suspension_correction = enabled;
        modified = true;
    }

    if let Some(length) = set_cab_length {
        if !(length > 0.0) {
            return Err(Error::InvalidInput(vec![format!(
                "nominal cab length must be greater than zero (got {} m)",
                length
            )]));
        }
        config.nominal_cab_length_m = length;
        modified = true;
    }

    if let Some(side) = set_preferred_side {
        config.preferred_side = side.into();
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
