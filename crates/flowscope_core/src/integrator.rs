//! Fixed-step trajectory integration.
//!
//! A run moves through `Validating -> Stepping -> {Completed | Failed}`.
//! Every transition is an explicit value of [`Phase`]; there is no other
//! exit from the loop in [`TrajectoryIntegrator::integrate`].

use crate::config::RunConfig;
use crate::error::{FailureKind, SolverError};
use crate::solvers::RK4;
use crate::system::SystemDefinition;
use crate::traits::Steppable;
use crate::trajectory::{Trajectory, TrajectoryPoint};
use crate::validation::{validate, ParameterValues};
use crate::vector::all_finite;
use serde::Serialize;
use tracing::{debug, warn};

/// Either a complete trajectory or the reason none was produced.
pub type SolverOutcome = Result<Trajectory, SolverError>;

/// Upper bound on the points reserved before the first step.
const INITIAL_CAPACITY_LIMIT: usize = 1 << 16;

/// Largest step budget a run may have. A horizon needing more steps fails
/// with `StepBudgetExceeded` before the first step, which bounds the memory
/// held by a trajectory.
pub const MAX_STEPS_PER_RUN: usize = 2_000_000;

/// Number of steps allowed for a horizon, `ceil(t_max / dt) + 1`.
///
/// Guards the time loop against accumulated rounding in `t += dt`.
pub fn step_budget(dt: f64, t_max: f64) -> usize {
    ((t_max / dt).ceil() as usize).saturating_add(1)
}

struct SteppingState {
    t: f64,
    state: Vec<f64>,
    params: ParameterValues,
    points: Vec<TrajectoryPoint>,
    steps: usize,
    max_steps: usize,
    dt: f64,
    t_max: f64,
}

enum Phase {
    Validating,
    Stepping(SteppingState),
    Completed(Trajectory),
    Failed(SolverError),
}

/// Drives a fixed-step solver across a run configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrajectoryIntegrator<S = RK4> {
    stepper: S,
}

impl TrajectoryIntegrator<RK4> {
    pub fn new() -> Self {
        Self { stepper: RK4 }
    }
}

impl<S: Steppable<f64>> TrajectoryIntegrator<S> {
    pub fn with_stepper(stepper: S) -> Self {
        Self { stepper }
    }

    /// Validates `config` against `system` and integrates from `t = 0` to
    /// `t_max`. A failure never carries a partial trajectory.
    pub fn integrate(&self, system: &SystemDefinition, config: &RunConfig) -> SolverOutcome {
        self.run(system, config, Phase::Validating)
    }

    fn run(&self, system: &SystemDefinition, config: &RunConfig, mut phase: Phase) -> SolverOutcome {
        loop {
            phase = match phase {
                Phase::Validating => self.begin(system, config),
                Phase::Stepping(run) => self.advance(system, run),
                Phase::Completed(trajectory) => {
                    debug!(
                        system = system.id,
                        points = trajectory.len(),
                        "integration completed"
                    );
                    return Ok(trajectory);
                }
                Phase::Failed(err) => {
                    debug!(system = system.id, kind = ?err.kind(), "integration failed: {err}");
                    return Err(err);
                }
            };
        }
    }

    fn begin(&self, system: &SystemDefinition, config: &RunConfig) -> Phase {
        let params = match validate(system, config) {
            Ok(params) => params,
            Err(err) => return Phase::Failed(SolverError::InvalidConfig(err)),
        };

        let state = config.initial_state.clone();
        // Unreachable after validation rule 5; kept as the integrator's own guard.
        if !all_finite(&state) {
            return Phase::Failed(SolverError::NonFiniteInitialState);
        }

        let max_steps = step_budget(config.dt, config.t_max);
        if max_steps > MAX_STEPS_PER_RUN {
            warn!(
                system = system.id,
                required = max_steps,
                max_steps = MAX_STEPS_PER_RUN,
                "horizon needs more steps than a run may take"
            );
            return Phase::Failed(SolverError::StepBudgetExceeded {
                max_steps: MAX_STEPS_PER_RUN,
            });
        }
        debug!(
            system = system.id,
            dt = config.dt,
            t_max = config.t_max,
            max_steps,
            "starting integration"
        );

        let mut points = Vec::with_capacity(max_steps.min(INITIAL_CAPACITY_LIMIT));
        points.push(TrajectoryPoint {
            t: 0.0,
            state: state.clone(),
        });

        Phase::Stepping(SteppingState {
            t: 0.0,
            state,
            params,
            points,
            steps: 0,
            max_steps,
            dt: config.dt,
            t_max: config.t_max,
        })
    }

    /// Takes one step, or leaves `Stepping` once the horizon or the budget
    /// is reached.
    fn advance(&self, system: &SystemDefinition, mut run: SteppingState) -> Phase {
        if run.t >= run.t_max {
            let variables = system.state_variables.iter().map(|v| v.to_string()).collect();
            return Phase::Completed(Trajectory::new(run.points, variables));
        }
        if run.steps >= run.max_steps {
            warn!(
                system = system.id,
                max_steps = run.max_steps,
                t = run.t,
                "step budget exhausted before t_max"
            );
            return Phase::Failed(SolverError::StepBudgetExceeded {
                max_steps: run.max_steps,
            });
        }

        let next = match self
            .stepper
            .step(system, &run.state, run.params.as_slice(), run.dt)
        {
            Ok(next) => next,
            Err(err) => return Phase::Failed(err.into()),
        };
        if !all_finite(&next) {
            warn!(system = system.id, at_time = run.t, "state became non-finite");
            return Phase::Failed(SolverError::NumericalInstability { at_time: run.t });
        }

        run.t += run.dt;
        run.steps += 1;
        run.points.push(TrajectoryPoint {
            t: run.t,
            state: next.clone(),
        });
        run.state = next;
        Phase::Stepping(run)
    }
}

/// Integrates with the classic RK4 stepper.
pub fn integrate(system: &SystemDefinition, config: &RunConfig) -> SolverOutcome {
    TrajectoryIntegrator::new().integrate(system, config)
}

/// Serializable view of a [`SolverOutcome`] for front ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SolverReport {
    Success { trajectory: Trajectory },
    Failure { kind: FailureKind, detail: String },
}

impl From<SolverOutcome> for SolverReport {
    fn from(outcome: SolverOutcome) -> Self {
        match outcome {
            Ok(trajectory) => SolverReport::Success { trajectory },
            Err(err) => SolverReport::Failure {
                kind: err.kind(),
                detail: err.to_string(),
            },
        }
    }
}
