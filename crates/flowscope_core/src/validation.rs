//! Pre-flight checks of a run configuration against a system's contract.
//!
//! Rules are checked in a fixed order and the first violation wins:
//!
//! 1. `dt` finite and positive
//! 2. `t_max` finite and positive
//! 3. `dt <= t_max`
//! 4. initial state has one entry per state variable
//! 5. initial state entries are finite
//! 6. every declared parameter has a value (all missing names reported)
//! 7. every value is finite and inside its declared bounds
//! 8. no value names an undeclared parameter

use crate::config::RunConfig;
use crate::error::ConfigError;
use crate::system::SystemDefinition;

/// Parameter values resolved against a definition, in declaration order.
///
/// Only `validate` builds these, so the vector always matches the
/// definition it was checked against.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterValues {
    values: Vec<f64>,
}

impl ParameterValues {
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

pub fn validate(
    system: &SystemDefinition,
    config: &RunConfig,
) -> Result<ParameterValues, ConfigError> {
    let RunConfig {
        dt,
        t_max,
        initial_state,
        parameter_values,
    } = config;
    let (dt, t_max) = (*dt, *t_max);

    if !dt.is_finite() || dt <= 0.0 {
        return Err(ConfigError::InvalidTimeStep(dt));
    }
    if !t_max.is_finite() || t_max <= 0.0 {
        return Err(ConfigError::InvalidHorizon(t_max));
    }
    if dt > t_max {
        return Err(ConfigError::TimeStepExceedsHorizon { dt, t_max });
    }

    let expected = system.state_variables.len();
    if initial_state.len() != expected {
        return Err(ConfigError::StateLengthMismatch {
            expected,
            actual: initial_state.len(),
        });
    }
    if let Some((index, &value)) = initial_state
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite())
    {
        return Err(ConfigError::NonFiniteState { index, value });
    }

    let mut missing = Vec::new();
    let mut declared = Vec::with_capacity(system.parameters.len());
    for parameter in system.parameters {
        match parameter_values.get(parameter.name) {
            Some(&value) => declared.push((parameter, value)),
            None => missing.push(parameter.name.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(ConfigError::MissingParameters(missing));
    }

    if let Some((parameter, value)) = declared.iter().find(|(p, v)| !p.contains(*v)) {
        return Err(ConfigError::ParameterOutOfRange {
            name: parameter.name.to_string(),
            value: *value,
            min: parameter.min,
            max: parameter.max,
        });
    }

    let unknown: Vec<String> = parameter_values
        .keys()
        .filter(|name| system.parameter(name).is_none())
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(ConfigError::UnknownParameters(unknown));
    }

    Ok(ParameterValues {
        values: declared.into_iter().map(|(_, value)| value).collect(),
    })
}
