use crate::{Block, BlockId, Weight};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// One fork-choice test scenario: a block tree, a sparse weight list and the
/// head the evaluation is expected to select.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Scenario {
    /// Every node of the tree, the root included (`parent == id`).
    pub blocks: Vec<Block>,
    /// Sparse weight overrides as a sequence of single-entry maps. Ids that
    /// never appear weigh 0; if an id appears more than once the last
    /// occurrence wins.
    #[serde(default)]
    pub weights: Vec<BTreeMap<BlockId, Weight>>,
    /// Expected head list. Every known scenario lists exactly one entry.
    pub heads: Vec<ExpectedHead>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedHead {
    pub id: BlockId,
}

/// Shape defects in the scenario itself, as opposed to defects in the tree
/// it describes.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScenarioError {
    #[error("scenario lists no expected head")]
    MissingHead,
    #[error("scenario lists {0} expected heads, the runner contract allows exactly one")]
    AmbiguousHeads(usize),
}

impl Scenario {
    pub fn from_yaml(source: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }

    /// Flatten the sparse weight list into a lookup map, later entries
    /// overriding earlier ones.
    pub fn weight_map(&self) -> HashMap<BlockId, Weight> {
        let mut map = HashMap::new();
        for entry in &self.weights {
            for (id, weight) in entry {
                map.insert(id.clone(), *weight);
            }
        }
        map
    }

    /// The single head this scenario asserts.
    ///
    /// The scenario format permits several entries, but no upstream contract
    /// defines what multiplicity would mean, so anything other than exactly
    /// one is rejected.
    pub fn expected_head(&self) -> Result<&BlockId, ScenarioError> {
        match self.heads.as_slice() {
            [head] => Ok(&head.id),
            [] => Err(ScenarioError::MissingHead),
            heads => Err(ScenarioError::AmbiguousHeads(heads.len())),
        }
    }
}
