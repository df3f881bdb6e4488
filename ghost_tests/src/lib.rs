//! Scenario-vector runner for the LMD-GHOST fork-choice core.
//!
//! Vectors live as YAML files under `vectors/`; `test_scenario!` generates
//! one test per named file, and `run_scenario_file` backs both the generated
//! tests and the `ghost_runner` binary.

pub mod macros;
pub mod runner;

pub use paste;
pub use runner::{load_scenario, run_scenario, run_scenario_file, ScenarioOutcome};
