//! Error types for loadplan

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("No vehicle profile file; pass --profiles or run `loadplan config --set-profiles <path>`")]
    NoProfiles,
}

/// Vehicle profile and cargo manifest loading errors
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Vehicle profile not found: {0}")]
    UnknownVehicle(String),

    #[error("Duplicate vehicle profile name: {0}")]
    DuplicateVehicle(String),

    #[error("Invalid cargo manifest row {row}: {message}")]
    InvalidCargoRow { row: usize, message: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Rule violations reported by validation, one human-readable line each
    #[error("Invalid input:\n  - {}", .0.join("\n  - "))]
    InvalidInput(Vec<String>),

    #[error("{0} validation problem(s) found")]
    ValidationFailed(usize),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_lists_every_violation() {
        let err = Error::InvalidInput(vec![
            "wheelbase must be greater than zero".to_string(),
            "body width must be greater than zero".to_string(),
        ]);
        let message = err.to_string();
        assert!(message.contains("wheelbase must be greater than zero"));
        assert!(message.contains("body width must be greater than zero"));
    }

    #[test]
    fn test_profile_error_wraps() {
        let err: Error = ProfileError::UnknownVehicle("hino-500".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Profile error: Vehicle profile not found: hino-500"
        );
    }
}
