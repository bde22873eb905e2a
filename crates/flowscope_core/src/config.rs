use crate::system::SystemDefinition;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything a single integration run needs besides the system itself.
///
/// Plain data: nothing is checked at construction. `validation::validate`
/// decides whether a configuration fits a given system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub dt: f64,
    pub t_max: f64,
    pub initial_state: Vec<f64>,
    #[serde(default)]
    pub parameter_values: BTreeMap<String, f64>,
}

impl RunConfig {
    pub fn new(dt: f64, t_max: f64, initial_state: Vec<f64>) -> Self {
        Self {
            dt,
            t_max,
            initial_state,
            parameter_values: BTreeMap::new(),
        }
    }

    /// A configuration using the system's default initial state and every
    /// parameter at its declared default.
    pub fn from_defaults(system: &SystemDefinition, dt: f64, t_max: f64) -> Self {
        let parameter_values = system
            .parameters
            .iter()
            .map(|p| (p.name.to_string(), p.default))
            .collect();
        Self {
            dt,
            t_max,
            initial_state: system.default_initial_state.to_vec(),
            parameter_values,
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: f64) -> Self {
        self.parameter_values.insert(name.into(), value);
        self
    }

    pub fn with_initial_state(mut self, initial_state: Vec<f64>) -> Self {
        self.initial_state = initial_state;
        self
    }
}
