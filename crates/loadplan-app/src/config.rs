//! Configuration management for loadplan
//!
//! Config stored at: ~/.config/loadplan/config.json

use std::path::{Path, PathBuf};

use loadplan_domain::model::{AutofillOptions, PenaltyWeights, PreferredSide};
use loadplan_domain::service::{SolverSettings, SuspensionCorrection, NOMINAL_CAB_LENGTH_M};
use loadplan_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Vehicle profile file used when `--profiles` is not given
    #[serde(default)]
    pub profiles_path: Option<PathBuf>,

    /// Cab length assumed when a profile has no cab-to-axle dimension
    #[serde(default = "default_nominal_cab_length")]
    pub nominal_cab_length_m: f64,

    /// Run the suspension pitch correction after the rigid-body split
    #[serde(default = "default_true")]
    pub suspension_correction: bool,

    #[serde(default)]
    pub correction: SuspensionCorrection,

    /// Autofill penalty weights
    #[serde(default)]
    pub penalty: PenaltyWeights,

    #[serde(default)]
    pub preferred_side: PreferredSide,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_nominal_cab_length() -> f64 {
    NOMINAL_CAB_LENGTH_M
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            profiles_path: None,
            nominal_cab_length_m: default_nominal_cab_length(),
            suspension_correction: true,
            correction: SuspensionCorrection::default(),
            penalty: PenaltyWeights::default(),
            preferred_side: PreferredSide::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("loadplan");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn solver_settings(&self) -> SolverSettings {
        SolverSettings {
            nominal_cab_length: self.nominal_cab_length_m,
            correction: self
                .suspension_correction
                .then(|| self.correction.clone()),
        }
    }

    pub fn autofill_options(&self, replace_existing: bool, max_items: Option<usize>) -> AutofillOptions {
        AutofillOptions {
            replace_existing,
            max_items,
            penalty: self.penalty.clone(),
            preferred_side: self.preferred_side,
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Loadplan Configuration")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        writeln!(f, "Output format:         {}", self.output_format)?;
        writeln!(
            f,
            "Profiles file:         {}",
            self.profiles_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".to_string())
        )?;
        writeln!(f, "Nominal cab length:    {:.2} m", self.nominal_cab_length_m)?;
        writeln!(
            f,
            "Suspension correction: {}",
            if self.suspension_correction { "on" } else { "off" }
        )?;
        writeln!(
            f,
            "  iterations / epsilon: {} / {} kg",
            self.correction.max_iterations, self.correction.convergence_kg
        )?;
        writeln!(
            f,
            "  blend / load scale:   {}/{} x {}",
            self.correction.compression_blend,
            self.correction.cog_shift_blend,
            self.correction.load_scale
        )?;
        writeln!(
            f,
            "  COG height:           {} m x [{}, {}]",
            self.correction.reference_cog_height_m,
            self.correction.min_height_factor,
            self.correction.max_height_factor
        )?;
        writeln!(
            f,
            "Autofill penalties:    overage {}/{}/{}, balance {}, forward {}",
            self.penalty.front_overage,
            self.penalty.rear_overage,
            self.penalty.gvm_overage,
            self.penalty.balance,
            self.penalty.forward_bias
        )?;
        writeln!(
            f,
            "Preferred side:        {}",
            match self.preferred_side {
                PreferredSide::Left => "left",
                PreferredSide::Right => "right",
            }
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:           {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.nominal_cab_length_m, 2.0);
        assert!(config.suspension_correction);
        assert_eq!(config.penalty.front_overage, 1000.0);
        assert_eq!(config.preferred_side, PreferredSide::Left);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "output_format": "json", "penalty": { "forward_bias": 20.0 } }"#)
                .unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.penalty.forward_bias, 20.0);
        assert_eq!(config.penalty.off_side, 30.0);
        assert_eq!(config.correction.max_iterations, 5);
    }

    #[test]
    fn test_solver_settings_follow_toggle() {
        let mut config = Config::default();
        assert!(config.solver_settings().correction.is_some());
        config.suspension_correction = false;
        config.nominal_cab_length_m = 2.3;
        let settings = config.solver_settings();
        assert!(settings.correction.is_none());
        assert_eq!(settings.nominal_cab_length, 2.3);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.preferred_side = PreferredSide::Right;
        config.profiles_path = Some(PathBuf::from("/srv/fleet/vehicles.toml"));
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_display_mentions_settings() {
        let text = Config::default().to_string();
        assert!(text.contains("Suspension correction: on"));
        assert!(text.contains("Preferred side:        left"));
    }
}
