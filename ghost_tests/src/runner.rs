use anyhow::{Context, Result};
use containers::{BlockId, Scenario};
use fork_choice::evaluate;
use std::fs;
use std::path::Path;

/// Result of one scenario run: the head the core selected next to the head
/// the vector expects. Whether a mismatch is a test failure is the harness's
/// call, so both ids are reported instead of asserted here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScenarioOutcome {
    pub head: BlockId,
    pub expected: BlockId,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.head == self.expected
    }
}

pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario {}", path.display()))?;
    Scenario::from_yaml(&source)
        .with_context(|| format!("failed to parse scenario {}", path.display()))
}

pub fn run_scenario(scenario: &Scenario) -> Result<ScenarioOutcome> {
    let expected = scenario.expected_head()?.clone();
    let head = evaluate(scenario)?;
    Ok(ScenarioOutcome { head, expected })
}

pub fn run_scenario_file(path: &Path) -> Result<ScenarioOutcome> {
    let scenario = load_scenario(path)?;
    run_scenario(&scenario)
        .with_context(|| format!("scenario {} was rejected", path.display()))
}
