//! The `flowscope_core` crate is the numerical engine behind Flowscope.
//! It integrates the built-in parameterized dynamical systems with a
//! fixed-step RK4 solver and reports every failure as a typed value.
//!
//! Key components:
//! - **Vector**: element-wise arithmetic on state vectors.
//! - **System / Registry**: static system definitions and the catalog that looks them up by id.
//! - **Validation**: checks a `RunConfig` against a system's declared contract.
//! - **Solvers**: the RK4 stepper.
//! - **Integrator**: drives the stepper over a horizon and detects numerical breakdown.

pub mod config;
pub mod error;
pub mod integrator;
pub mod registry;
pub mod solvers;
pub mod system;
pub mod traits;
pub mod trajectory;
pub mod validation;
pub mod vector;

pub use config::RunConfig;
pub use error::{ConfigError, FailureKind, RegistryError, SolverError};
pub use integrator::{
    integrate, SolverOutcome, SolverReport, TrajectoryIntegrator, MAX_STEPS_PER_RUN,
};
pub use registry::{get_system, list_systems};
pub use system::{Parameter, SystemDefinition, SystemSummary};
pub use trajectory::{Trajectory, TrajectoryPoint};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_can_cross_threads() {
        assert_send_sync::<SystemDefinition>();
        assert_send_sync::<RunConfig>();
        assert_send_sync::<Trajectory>();
        assert_send_sync::<SolverError>();
        assert_send_sync::<TrajectoryIntegrator>();
    }

    #[test]
    fn independent_runs_agree_across_threads() {
        let system = get_system("lorenz").expect("lorenz");
        let config = RunConfig::from_defaults(system, 0.01, 2.0);
        let local = integrate(system, &config).expect("local run");

        let remote = std::thread::spawn(move || integrate(system, &config))
            .join()
            .expect("thread should not panic")
            .expect("remote run");

        assert_eq!(local, remote);
    }
}
