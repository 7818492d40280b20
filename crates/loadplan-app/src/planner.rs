//! Planning Service - load planning use cases for one vehicle profile
//!
//! Every use case runs the same preparation:
//! 1. Validate the profile (frame, ratings, tare)
//! 2. Resolve effective limits when the profile carries a classification
//! 3. Resolve suspension per axle and build the solver input
//!
//! and then hands off to the domain services. Rule violations become
//! `Error::InvalidInput` here so the solver only ever sees valid input.

use loadplan_domain::model::{
    AutofillResult, AxlePositions, AxleRating, CargoItem, ComplianceStatus, ItemFootprint,
    VehicleSetup, WeightDistribution,
};
use loadplan_domain::service::{
    compute_axle_positions_with_cab, compute_weight_distribution, is_ahead_of_front_axle,
    optimize_placement, resolve_effective_limits, validate_cargo, validate_frame,
    validate_rating, validate_tare, EffectiveLimits, LimitSource, RegulatorySource,
    SolverSettings,
};
use loadplan_infra::VehicleProfile;
use loadplan_types::{Error, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::Config;

/// Solver input prepared from a validated profile
#[derive(Debug, Clone)]
pub struct PlanningContext {
    pub vehicle: VehicleSetup,
    pub axles: AxlePositions,
    /// `None` when the profile has no classification; manufacturer ratings apply
    pub limits: Option<EffectiveLimits>,
}

/// Axle positions and the limits that apply to a vehicle
#[derive(Debug, Clone, Serialize)]
pub struct VehicleSummary {
    pub vehicle: String,
    pub axles: AxlePositions,
    pub manufacturer: AxleRating,
    pub limits: Option<EffectiveLimits>,
    pub applied_limits: AxleRating,
}

#[derive(Debug, Clone, Serialize)]
pub struct DistributionPlan {
    pub vehicle: String,
    pub axles: AxlePositions,
    pub applied_limits: AxleRating,
    pub limits: Option<EffectiveLimits>,
    pub distribution: WeightDistribution,
    pub status: ComplianceStatus,
    /// Items wholly ahead of the front axle
    pub forward_items: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AutofillRequest {
    pub footprint: ItemFootprint,
    pub weights: Vec<f64>,
    pub existing: Vec<CargoItem>,
    pub replace_existing: bool,
    pub max_items: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AutofillPlan {
    pub vehicle: String,
    pub applied_limits: AxleRating,
    pub result: AutofillResult,
    pub status: ComplianceStatus,
}

/// Load planning use cases, configured once per run
#[derive(Debug, Clone)]
pub struct LoadPlanner {
    config: Config,
    settings: SolverSettings,
}

impl LoadPlanner {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            settings: config.solver_settings(),
        }
    }

    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    /// Every rule violation for a profile and optional cargo, without failing
    pub fn validate(&self, profile: &VehicleProfile, cargo: &[CargoItem]) -> Vec<String> {
        let mut violations = profile_violations(profile);
        violations.extend(validate_cargo(&profile.frame, cargo));
        violations
    }

    pub fn prepare(&self, profile: &VehicleProfile) -> Result<PlanningContext> {
        info!("Planning for vehicle profile '{}'", profile.name);

        let violations = profile_violations(profile);
        if !violations.is_empty() {
            warn!(
                "Profile '{}' failed validation with {} violation(s)",
                profile.name,
                violations.len()
            );
            return Err(Error::InvalidInput(violations));
        }

        let axles = compute_axle_positions_with_cab(&profile.frame, self.settings.nominal_cab_length);
        debug!(
            "Axle positions: front {:.3} m, rear {:.3} m (wheelbase {:.3} m)",
            axles.front,
            axles.rear,
            axles.wheelbase()
        );

        let limits = match &profile.classification {
            Some(classification) => {
                let mut classification = classification.clone();
                // Eligibility checks need the manufacturer GVM
                classification
                    .manufacturer_gvm
                    .get_or_insert(profile.manufacturer.gvm);
                let limits = resolve_effective_limits(
                    &profile.manufacturer,
                    RegulatorySource::Classification(&classification),
                );
                log_limits(&limits);
                Some(limits)
            }
            None => {
                warn!(
                    "Profile '{}' has no classification; regulatory limits not applied",
                    profile.name
                );
                None
            }
        };

        let rating = limits
            .as_ref()
            .map(EffectiveLimits::as_rating)
            .unwrap_or(profile.manufacturer);

        let suspension = profile.suspension.resolve();
        debug!(
            "Suspension: front {}, rear {}",
            suspension.front.kind, suspension.rear.kind
        );

        Ok(PlanningContext {
            vehicle: VehicleSetup {
                frame: profile.frame.clone(),
                limits: rating,
                suspension,
                tare: profile.tare,
            },
            axles,
            limits,
        })
    }

    pub fn summarize(&self, profile: &VehicleProfile) -> Result<VehicleSummary> {
        let context = self.prepare(profile)?;
        Ok(VehicleSummary {
            vehicle: profile.name.clone(),
            axles: context.axles,
            manufacturer: profile.manufacturer,
            applied_limits: context.vehicle.limits,
            limits: context.limits,
        })
    }

    pub fn plan_distribution(
        &self,
        profile: &VehicleProfile,
        cargo: &[CargoItem],
    ) -> Result<DistributionPlan> {
        let context = self.prepare(profile)?;

        let violations = validate_cargo(&profile.frame, cargo);
        if !violations.is_empty() {
            return Err(Error::InvalidInput(violations));
        }

        info!("Computing weight distribution for {} item(s)", cargo.len());
        let distribution = compute_weight_distribution(&context.vehicle, cargo, &self.settings);
        if let Some(report) = &distribution.suspension {
            debug!(
                "Suspension correction: {} iteration(s), converged {}, shift {:.1} kg",
                report.iterations, report.converged, report.weight_shift_kg
            );
        }
        log_overweight(&distribution);

        let forward_items = cargo
            .iter()
            .filter(|item| is_ahead_of_front_axle(item, &context.axles))
            .map(|item| item.id.clone())
            .collect();

        Ok(DistributionPlan {
            vehicle: profile.name.clone(),
            axles: context.axles,
            applied_limits: context.vehicle.limits,
            limits: context.limits,
            status: distribution.status(),
            distribution,
            forward_items,
        })
    }

    pub fn plan_autofill(
        &self,
        profile: &VehicleProfile,
        request: &AutofillRequest,
    ) -> Result<AutofillPlan> {
        let context = self.prepare(profile)?;

        if !request.replace_existing {
            let violations = validate_cargo(&profile.frame, &request.existing);
            if !violations.is_empty() {
                return Err(Error::InvalidInput(violations));
            }
        }
        let rejected = request
            .weights
            .iter()
            .filter(|w| !(**w > 0.0) || !w.is_finite())
            .count();
        if rejected > 0 {
            warn!("{} weight(s) are not positive and will not be placed", rejected);
        }

        info!(
            "Autofill: {} weight(s), footprint {:.2} x {:.2} m, {} existing item(s){}",
            request.weights.len(),
            request.footprint.length,
            request.footprint.width,
            request.existing.len(),
            if request.replace_existing { " (replaced)" } else { "" }
        );

        let options = self
            .config
            .autofill_options(request.replace_existing, request.max_items);
        let result = optimize_placement(
            &context.vehicle,
            &request.footprint,
            &request.weights,
            &request.existing,
            &options,
            &self.settings,
        );

        info!(
            "Autofill finished: {} placed, {} unplaced",
            result.placements.len(),
            result.unplaced.len()
        );
        log_overweight(&result.final_distribution);

        Ok(AutofillPlan {
            vehicle: profile.name.clone(),
            applied_limits: context.vehicle.limits,
            status: result.final_distribution.status(),
            result,
        })
    }
}

fn profile_violations(profile: &VehicleProfile) -> Vec<String> {
    let mut violations = validate_frame(&profile.frame);
    violations.extend(validate_rating("manufacturer", &profile.manufacturer));
    violations.extend(validate_tare(&profile.tare));
    violations
}

fn log_limits(limits: &EffectiveLimits) {
    info!(
        "Effective limits: GVM {:.0} kg ({}), front {:.0} kg ({}), rear {:.0} kg ({})",
        limits.gvm,
        limits.gvm_source.label(),
        limits.front,
        limits.front_source.label(),
        limits.rear,
        limits.rear_source.label()
    );
    if let Some(transfer) = limits.regulatory.mass_transfer {
        debug!("Mass transfer of {:.0} kg applied", transfer.amount);
    }
    if limits.regulatory.spacing_limited {
        debug!("GVM capped by close axle spacing");
    }
    if [limits.gvm_source, limits.front_source, limits.rear_source].contains(&LimitSource::Regulatory) {
        debug!("At least one limit is set by regulation rather than the manufacturer");
    }
}

fn log_overweight(distribution: &WeightDistribution) {
    if distribution.is_front_overweight {
        warn!(
            "Front axle overweight by {:.0} kg",
            -distribution.front_remaining
        );
    }
    if distribution.is_rear_overweight {
        warn!("Rear axle overweight by {:.0} kg", -distribution.rear_remaining);
    }
    if distribution.is_overweight {
        warn!("GVM exceeded by {:.0} kg", -distribution.gvm_remaining);
    }
}
