//! Vehicle profile loader from TOML configuration
//!
//! A profile file holds one `[[vehicles]]` table per vehicle:
//!
//! ```toml
//! [[vehicles]]
//! name = "fh-rigid"
//! frame = { wheelbase = 4.25, front_overhang = 1.3, rear_overhang = 2.2, body_length = 7.2, body_width = 2.45 }
//! manufacturer = { front = 6500.0, rear = 10000.0, gvm = 16000.0 }
//! tare = { front = 3200.0, rear = 1800.0 }
//! suspension = { suspension_type = "multi_leaf_steel", rear_suspension_type = "airbag" }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use loadplan_domain::model::{
    AxleRating, SuspensionSetup, TareWeights, VehicleClassification, VehicleFrame,
};
use loadplan_types::{Error, ProfileError, Result};
use serde::{Deserialize, Serialize};

/// One vehicle as described in a profile file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub frame: VehicleFrame,
    /// Manufacturer axle and GVM ratings
    pub manufacturer: AxleRating,
    pub tare: TareWeights,
    pub suspension: SuspensionSetup,
    /// Needed for regulatory limits; without it only manufacturer ratings apply
    #[serde(default)]
    pub classification: Option<VehicleClassification>,
}

/// Container for parsing a profile file
#[derive(Debug, Deserialize)]
struct ProfileFile {
    #[serde(default)]
    vehicles: Vec<VehicleProfile>,
}

/// Vehicle profiles loaded from TOML, in file order
#[derive(Debug)]
pub struct VehicleProfileLoader {
    profiles: Vec<VehicleProfile>,
    /// name -> index into `profiles`
    index: HashMap<String, usize>,
}

impl VehicleProfileLoader {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    /// Rejects files that name the same vehicle twice
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let file: ProfileFile = toml::from_str(toml_content)?;

        let mut index = HashMap::with_capacity(file.vehicles.len());
        for (i, profile) in file.vehicles.iter().enumerate() {
            if index.insert(profile.name.clone(), i).is_some() {
                return Err(ProfileError::DuplicateVehicle(profile.name.clone()).into());
            }
        }

        Ok(Self {
            profiles: file.vehicles,
            index,
        })
    }

    pub fn find(&self, name: &str) -> Option<&VehicleProfile> {
        self.index.get(name).map(|&i| &self.profiles[i])
    }

    /// Like [`find`](Self::find), but a missing name is an error
    pub fn get(&self, name: &str) -> Result<&VehicleProfile> {
        self.find(name)
            .ok_or_else(|| ProfileError::UnknownVehicle(name.to_string()).into())
    }

    pub fn all(&self) -> &[VehicleProfile] {
        &self.profiles
    }

    pub fn names(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn count(&self) -> usize {
        self.profiles.len()
    }
}
