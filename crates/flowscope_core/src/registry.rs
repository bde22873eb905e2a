//! Built-in system catalog.

use crate::error::RegistryError;
use crate::system::{Dynamics, Parameter, SystemDefinition, SystemSummary};

pub static LORENZ: SystemDefinition = SystemDefinition {
    id: "lorenz",
    name: "Lorenz Attractor",
    description: "Convective roll model whose trajectories settle onto a chaotic butterfly-shaped attractor.",
    state_variables: &["x", "y", "z"],
    parameters: &[
        Parameter {
            name: "sigma",
            label: "σ (Prandtl number)",
            min: 0.0,
            max: 50.0,
            step: 0.1,
            default: 10.0,
        },
        Parameter {
            name: "rho",
            label: "ρ (Rayleigh number)",
            min: 0.0,
            max: 100.0,
            step: 0.1,
            default: 28.0,
        },
        Parameter {
            name: "beta",
            label: "β (geometric factor)",
            min: 0.0,
            max: 10.0,
            step: 0.01,
            default: 8.0 / 3.0,
        },
    ],
    default_initial_state: &[1.0, 1.0, 1.0],
    dynamics: Dynamics::Lorenz,
};

pub static LOTKA_VOLTERRA: SystemDefinition = SystemDefinition {
    id: "lotka_volterra",
    name: "Lotka-Volterra",
    description: "Predator-prey populations oscillating around a neutral equilibrium.",
    state_variables: &["prey", "predator"],
    parameters: &[
        Parameter {
            name: "alpha",
            label: "α (prey growth rate)",
            min: 0.0,
            max: 10.0,
            step: 0.01,
            default: 1.1,
        },
        Parameter {
            name: "beta",
            label: "β (predation rate)",
            min: 0.0,
            max: 5.0,
            step: 0.01,
            default: 0.4,
        },
        Parameter {
            name: "delta",
            label: "δ (predator reproduction rate)",
            min: 0.0,
            max: 5.0,
            step: 0.01,
            default: 0.1,
        },
        Parameter {
            name: "gamma",
            label: "γ (predator death rate)",
            min: 0.0,
            max: 10.0,
            step: 0.01,
            default: 0.4,
        },
    ],
    default_initial_state: &[10.0, 10.0],
    dynamics: Dynamics::LotkaVolterra,
};

pub static ROSSLER: SystemDefinition = SystemDefinition {
    id: "rossler",
    name: "Rössler Attractor",
    description: "Single-lobe chaotic attractor produced by a folding band of trajectories.",
    state_variables: &["x", "y", "z"],
    parameters: &[
        Parameter {
            name: "a",
            label: "a",
            min: 0.0,
            max: 1.0,
            step: 0.01,
            default: 0.2,
        },
        Parameter {
            name: "b",
            label: "b",
            min: 0.0,
            max: 2.0,
            step: 0.01,
            default: 0.2,
        },
        Parameter {
            name: "c",
            label: "c",
            min: 0.0,
            max: 20.0,
            step: 0.1,
            default: 5.7,
        },
    ],
    default_initial_state: &[1.0, 1.0, 1.0],
    dynamics: Dynamics::Rossler,
};

static SYSTEMS: [&SystemDefinition; 3] = [&LORENZ, &LOTKA_VOLTERRA, &ROSSLER];

/// All built-in systems, in display order.
pub fn systems() -> impl Iterator<Item = &'static SystemDefinition> {
    SYSTEMS.iter().copied()
}

pub fn list_systems() -> Vec<SystemSummary> {
    systems().map(SystemDefinition::summary).collect()
}

pub fn get_system(id: &str) -> Result<&'static SystemDefinition, RegistryError> {
    systems()
        .find(|system| system.id == id)
        .ok_or_else(|| RegistryError::NotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn list_systems_returns_every_builtin_once() {
        let ids: Vec<&str> = list_systems().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["lorenz", "lotka_volterra", "rossler"]);
    }

    #[test]
    fn get_system_finds_known_ids() {
        let lorenz = get_system("lorenz").expect("lorenz should exist");
        assert_eq!(lorenz.state_variables.len(), 3);
        assert_eq!(lorenz.parameters.len(), 3);

        let lv = get_system("lotka_volterra").expect("lotka_volterra should exist");
        assert_eq!(lv.state_variables.len(), 2);
        assert_eq!(lv.parameters.len(), 4);
    }

    #[test]
    fn get_system_reports_unknown_id() {
        let err = get_system("duffing").expect_err("unknown id");
        assert_eq!(err, RegistryError::NotFound("duffing".to_string()));
        assert!(err.to_string().contains("duffing"));
    }

    #[test]
    fn builtin_definitions_are_self_consistent() {
        for system in systems() {
            let n = system.state_variables.len();
            assert!(n >= 1, "{} has no state variables", system.id);
            assert_eq!(system.default_initial_state.len(), n, "{}", system.id);
            assert_eq!(system.dynamics.dimension(), n, "{}", system.id);

            let mut names = HashSet::new();
            for p in system.parameters {
                assert!(names.insert(p.name), "{} repeats {}", system.id, p.name);
                assert!(p.min <= p.max, "{}.{} bounds", system.id, p.name);
                assert!(p.step > 0.0, "{}.{} step", system.id, p.name);
                assert!(p.contains(p.default), "{}.{} default", system.id, p.name);
            }

            let derivative = system
                .dynamics
                .evaluate(system.default_initial_state, &system.default_parameter_values());
            assert_eq!(derivative.len(), n, "{} derivative length", system.id);
        }
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<&str> = systems().map(|s| s.id).collect();
        assert_eq!(ids.len(), SYSTEMS.len());
    }
}
