//! WASM bridge for `flowscope_core`.
//!
//! Exposes the system catalog, one-shot integration and a stateful
//! [`WasmSession`] to the browser front end. No numerics live here.

mod catalog;
mod session;
mod shared;

pub use catalog::{default_config, get_system, integrate, list_systems};
pub use session::WasmSession;
