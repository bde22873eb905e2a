//! Stateless registry and integration entry points.

use crate::shared::{to_js, to_js_error};
use anyhow::{Context, Result};
use flowscope_core::registry::{get_system as core_get_system, list_systems as core_list_systems};
use flowscope_core::{integrate as core_integrate, RunConfig, SolverReport, SystemDefinition};
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;

pub(crate) fn lookup(id: &str) -> Result<&'static SystemDefinition> {
    core_get_system(id).with_context(|| format!("Cannot open system \"{}\"", id))
}

pub(crate) fn run_system(id: &str, config: &RunConfig) -> Result<SolverReport> {
    let system = lookup(id)?;
    Ok(SolverReport::from(core_integrate(system, config)))
}

/// Summaries (`id`, `name`, `description`) of every built-in system.
#[wasm_bindgen]
pub fn list_systems() -> Result<JsValue, JsValue> {
    to_js(&core_list_systems())
}

/// Full definition of one system: variables, parameters and defaults.
#[wasm_bindgen]
pub fn get_system(id: &str) -> Result<JsValue, JsValue> {
    let system = lookup(id).map_err(to_js_error)?;
    to_js(system)
}

#[wasm_bindgen]
pub fn default_config(id: &str, dt: f64, t_max: f64) -> Result<JsValue, JsValue> {
    let system = lookup(id).map_err(to_js_error)?;
    to_js(&RunConfig::from_defaults(system, dt, t_max))
}

/// Integrates `config` for the system `id`.
///
/// Solver failures come back as `{ status: "failure", kind, detail }`;
/// only an unknown id or a malformed config object is an `Err`.
#[wasm_bindgen]
pub fn integrate(id: &str, config: JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let config: RunConfig = from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Invalid run configuration: {}", e)))?;
    let report = run_system(id, &config).map_err(to_js_error)?;
    to_js(&report)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::{default_config, integrate};
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn integrate_rejects_malformed_config() {
        let result = integrate("lorenz", JsValue::from_str("not a config"));
        assert!(result.is_err(), "expected deserialization error");
    }

    #[wasm_bindgen_test]
    fn default_config_round_trips_through_integrate() {
        let config = default_config("rossler", 0.05, 1.0).expect("config");
        let report = integrate("rossler", config).expect("report");
        assert!(report.is_object());
    }
}
