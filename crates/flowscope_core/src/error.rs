use crate::vector::VectorError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A run configuration that breaks a system's declared contract.
///
/// Variants are listed in the order the validator checks them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("time step dt must be finite and positive (got {0})")]
    InvalidTimeStep(f64),

    #[error("horizon t_max must be finite and positive (got {0})")]
    InvalidHorizon(f64),

    #[error("time step dt ({dt}) must not exceed horizon t_max ({t_max})")]
    TimeStepExceedsHorizon { dt: f64, t_max: f64 },

    #[error("initial state has {actual} entries but the system has {expected} state variables")]
    StateLengthMismatch { expected: usize, actual: usize },

    #[error("initial state entry {index} is not finite (got {value})")]
    NonFiniteState { index: usize, value: f64 },

    #[error("missing values for parameters: {}", .0.join(", "))]
    MissingParameters(Vec<String>),

    #[error("parameter {name} = {value} is outside [{min}, {max}]")]
    ParameterOutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("unknown parameters: {}", .0.join(", "))]
    UnknownParameters(Vec<String>),
}

impl ConfigError {
    /// Stable identifier of the violated rule.
    pub fn rule(&self) -> &'static str {
        match self {
            ConfigError::InvalidTimeStep(_) => "time_step",
            ConfigError::InvalidHorizon(_) => "horizon",
            ConfigError::TimeStepExceedsHorizon { .. } => "time_step_exceeds_horizon",
            ConfigError::StateLengthMismatch { .. } => "state_length",
            ConfigError::NonFiniteState { .. } => "state_finite",
            ConfigError::MissingParameters(_) => "missing_parameters",
            ConfigError::ParameterOutOfRange { .. } => "parameter_range",
            ConfigError::UnknownParameters(_) => "unknown_parameters",
        }
    }
}

/// Why an integration run produced no trajectory.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("initial state contains non-finite values")]
    NonFiniteInitialState,

    #[error("numerical instability: state became non-finite after t = {at_time}")]
    NumericalInstability { at_time: f64 },

    #[error("step budget of {max_steps} steps exhausted before reaching t_max")]
    StepBudgetExceeded { max_steps: usize },

    #[error("internal dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl From<VectorError> for SolverError {
    fn from(err: VectorError) -> Self {
        match err {
            VectorError::DimensionMismatch { expected, actual } => {
                SolverError::DimensionMismatch { expected, actual }
            }
        }
    }
}

impl SolverError {
    pub fn kind(&self) -> FailureKind {
        match self {
            SolverError::InvalidConfig(_) => FailureKind::InvalidConfig,
            SolverError::NonFiniteInitialState => FailureKind::NonFiniteInitialState,
            SolverError::NumericalInstability { .. } => FailureKind::NumericalInstability,
            SolverError::StepBudgetExceeded { .. } => FailureKind::StepBudgetExceeded,
            SolverError::DimensionMismatch { .. } => FailureKind::DimensionMismatch,
        }
    }
}

/// Machine-distinguishable failure category, as seen by front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    InvalidConfig,
    NonFiniteInitialState,
    NumericalInstability,
    StepBudgetExceeded,
    DimensionMismatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("unknown system: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_name_their_rule() {
        assert_eq!(ConfigError::InvalidTimeStep(0.0).rule(), "time_step");
        assert_eq!(ConfigError::InvalidHorizon(-1.0).rule(), "horizon");
        assert_eq!(
            ConfigError::MissingParameters(vec!["rho".into()]).rule(),
            "missing_parameters"
        );
    }

    #[test]
    fn missing_parameters_message_lists_all_names() {
        let err = ConfigError::MissingParameters(vec!["sigma".into(), "beta".into()]);
        assert_eq!(err.to_string(), "missing values for parameters: sigma, beta");
    }

    #[test]
    fn solver_error_wraps_config_error_detail() {
        let err = SolverError::from(ConfigError::InvalidTimeStep(-0.5));
        assert_eq!(err.kind(), FailureKind::InvalidConfig);
        assert!(err.to_string().contains("dt must be finite and positive"));
    }

    #[test]
    fn vector_error_maps_to_dimension_mismatch() {
        let err = SolverError::from(VectorError::DimensionMismatch {
            expected: 3,
            actual: 0,
        });
        assert_eq!(
            err,
            SolverError::DimensionMismatch {
                expected: 3,
                actual: 0
            }
        );
        assert_eq!(err.kind(), FailureKind::DimensionMismatch);
    }

    #[test]
    fn failure_kind_serializes_as_snake_case() {
        let json = serde_json::to_string(&FailureKind::NumericalInstability).expect("json");
        assert_eq!(json, "\"numerical_instability\"");
    }
}
