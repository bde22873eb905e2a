//! Static description of a parameterized dynamical system.

use crate::traits::{DynamicalSystem, Scalar};
use serde::Serialize;

/// A tunable constant of a system, with the range a control may sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub name: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl Parameter {
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}

/// The right-hand sides known to the registry.
///
/// Parameters arrive in the order the owning definition declares them.
/// Malformed input (wrong state or parameter length) yields an empty
/// derivative, which the stepper reports as a dimension mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dynamics {
    /// x' = σ(y − x), y' = x(ρ − z) − y, z' = xy − βz
    Lorenz,
    /// x' = αx − βxy, y' = δxy − γy
    LotkaVolterra,
    /// x' = −y − z, y' = x + ay, z' = b + z(x − c)
    Rossler,
}

impl Dynamics {
    pub fn dimension(self) -> usize {
        match self {
            Dynamics::Lorenz | Dynamics::Rossler => 3,
            Dynamics::LotkaVolterra => 2,
        }
    }

    pub fn evaluate<T: Scalar>(self, x: &[T], params: &[T]) -> Vec<T> {
        match (self, x, params) {
            (Dynamics::Lorenz, &[x, y, z], &[sigma, rho, beta]) => {
                vec![sigma * (y - x), x * (rho - z) - y, x * y - beta * z]
            }
            (Dynamics::LotkaVolterra, &[prey, predator], &[alpha, beta, delta, gamma]) => {
                vec![
                    alpha * prey - beta * prey * predator,
                    delta * prey * predator - gamma * predator,
                ]
            }
            (Dynamics::Rossler, &[x, y, z], &[a, b, c]) => {
                vec![-y - z, x + a * y, b + z * (x - c)]
            }
            _ => Vec::new(),
        }
    }
}

/// A built-in system: metadata, parameter contract, defaults and dynamics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub state_variables: &'static [&'static str],
    pub parameters: &'static [Parameter],
    pub default_initial_state: &'static [f64],
    #[serde(skip)]
    pub dynamics: Dynamics,
}

impl SystemDefinition {
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn default_parameter_values(&self) -> Vec<f64> {
        self.parameters.iter().map(|p| p.default).collect()
    }

    pub fn summary(&self) -> SystemSummary {
        SystemSummary {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}

impl<T: Scalar> DynamicalSystem<T> for SystemDefinition {
    fn dimension(&self) -> usize {
        self.state_variables.len()
    }

    fn derivative(&self, x: &[T], params: &[T]) -> Vec<T> {
        self.dynamics.evaluate(x, params)
    }
}

/// What a system picker needs to list a system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}
