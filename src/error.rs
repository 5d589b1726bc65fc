//! Error types for the orbital modeller.

use thiserror::Error;

use crate::sim::units::Float;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("Body '{name}' has invalid mass {mass} kg, mass must be positive and finite")]
    InvalidMass { name: String, mass: Float },

    #[error("Scenario '{0}' contains no bodies")]
    EmptyScenario(String),

    #[error("Not a valid choice: {0}")]
    InvalidChoice(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Scenario file error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
