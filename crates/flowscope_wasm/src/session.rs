//! Stateful wrapper mirroring the control panel: one selected system, the
//! latest configuration, and the last successful trajectory.

use crate::catalog::lookup;
use crate::shared::{to_js, to_js_error};
use flowscope_core::{
    integrate as core_integrate, RunConfig, SolverOutcome, SolverReport, SystemDefinition,
    Trajectory,
};
use js_sys::Float64Array;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmSession {
    system: &'static SystemDefinition,
    config: RunConfig,
    trajectory: Option<Trajectory>,
}

impl WasmSession {
    pub(crate) fn open(system_id: &str, dt: f64, t_max: f64) -> anyhow::Result<Self> {
        let system = lookup(system_id)?;
        Ok(Self {
            system,
            config: RunConfig::from_defaults(system, dt, t_max),
            trajectory: None,
        })
    }

    pub(crate) fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Recomputes from scratch. A failed run clears the previous trajectory.
    pub(crate) fn recompute(&mut self) -> SolverOutcome {
        let outcome = core_integrate(self.system, &self.config);
        self.trajectory = outcome.as_ref().ok().cloned();
        outcome
    }

    pub(crate) fn trajectory(&self) -> Option<&Trajectory> {
        self.trajectory.as_ref()
    }
}

#[wasm_bindgen]
impl WasmSession {
    #[wasm_bindgen(constructor)]
    pub fn new(system_id: &str, dt: f64, t_max: f64) -> Result<WasmSession, JsValue> {
        console_error_panic_hook::set_once();
        Self::open(system_id, dt, t_max).map_err(to_js_error)
    }

    pub fn system_id(&self) -> String {
        self.system.id.to_string()
    }

    /// Values are checked when the session runs, not when they are set.
    pub fn set_parameter(&mut self, name: &str, value: f64) {
        self.config.parameter_values.insert(name.to_string(), value);
    }

    pub fn set_initial_state(&mut self, state: &[f64]) {
        self.config.initial_state = state.to_vec();
    }

    pub fn set_time_step(&mut self, dt: f64) {
        self.config.dt = dt;
    }

    pub fn set_horizon(&mut self, t_max: f64) {
        self.config.t_max = t_max;
    }

    /// Restores default parameters and initial state, keeping dt and t_max.
    pub fn reset(&mut self) {
        self.config = RunConfig::from_defaults(self.system, self.config.dt, self.config.t_max);
        self.trajectory = None;
    }

    pub fn get_config(&self) -> Result<JsValue, JsValue> {
        to_js(&self.config)
    }

    pub fn run(&mut self) -> Result<JsValue, JsValue> {
        let report = SolverReport::from(self.recompute());
        to_js(&report)
    }

    pub fn times(&self) -> Option<Float64Array> {
        self.trajectory
            .as_ref()
            .map(|trajectory| Float64Array::from(trajectory.times().as_slice()))
    }

    pub fn series(&self, variable: &str) -> Option<Float64Array> {
        let values = self.trajectory.as_ref()?.series(variable)?;
        Some(Float64Array::from(values.as_slice()))
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::WasmSession;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn series_exposes_columns_after_run() {
        let mut session = WasmSession::new("lorenz", 0.01, 1.0).expect("session");
        assert!(session.series("x").is_none());
        session.run().expect("report");
        let xs = session.series("x").expect("x series");
        assert_eq!(xs.length(), 101);
        assert!(session.series("w").is_none());
        assert_eq!(session.times().map(|t| t.length()), Some(101));
    }
}
