pub mod errors;
pub mod head;
pub mod tree;
pub mod weight;

pub use errors::{EvaluateError, ForkChoiceError, TreeDefect};
pub use head::select_head;
pub use tree::BlockTree;
pub use weight::aggregate;

use containers::{BlockId, Scenario};

/// Run one fork-choice evaluation over a scenario: build the tree, aggregate
/// subtree weights, walk greedily to the head.
///
/// The whole pipeline is pure; a structural defect anywhere fails the
/// evaluation rather than producing a best-effort head.
pub fn evaluate(scenario: &Scenario) -> Result<BlockId, EvaluateError> {
    // Reject malformed head lists up front so a scenario that could never
    // be checked is never half-evaluated.
    scenario.expected_head()?;

    let tree = BlockTree::build(scenario.blocks.iter().cloned())?;
    let weights = scenario.weight_map();
    let subtree_weights = aggregate(&tree, &weights)?;
    let head = select_head(&tree, &subtree_weights)?;

    Ok(head.id.clone())
}
