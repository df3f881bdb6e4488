use containers::{BlockId, ScenarioError};
use thiserror::Error;

/// Structural defect found while building a [`crate::BlockTree`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TreeDefect {
    #[error("no self-referencing root block")]
    MissingRoot,
    #[error("second self-referencing root {second} (first was {first})")]
    SecondRoot { first: BlockId, second: BlockId },
    #[error("duplicate block id {0}")]
    DuplicateId(BlockId),
    #[error("block {id} references unknown parent {parent}")]
    DanglingParent { id: BlockId, parent: BlockId },
    #[error("block {0} is not reachable from the root")]
    UnreachableBlock(BlockId),
}

/// Errors of the fork-choice core proper.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ForkChoiceError {
    /// The block list violates a tree invariant. The scenario is rejected
    /// as a whole.
    #[error("malformed tree: {0}")]
    MalformedTree(TreeDefect),
    /// A weight entry references a block that does not exist in the tree.
    #[error("weight assigned to unknown block {0}")]
    UnknownBlockWeight(BlockId),
    /// Head selection was handed a weight mapping that does not belong to
    /// the tree it is walking. A caller contract violation, not a data
    /// error: weights must come from [`crate::aggregate`] over the same tree.
    #[error("head selection precondition violated: subtree weights do not match the tree")]
    InvalidTree,
}

impl From<TreeDefect> for ForkChoiceError {
    fn from(defect: TreeDefect) -> Self {
        ForkChoiceError::MalformedTree(defect)
    }
}

/// Error surface of [`crate::evaluate`]: either the scenario shape or the
/// tree/weight data it carries is defective.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvaluateError {
    #[error(transparent)]
    Scenario(#[from] ScenarioError),
    #[error(transparent)]
    ForkChoice(#[from] ForkChoiceError),
}
