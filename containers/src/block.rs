use crate::BlockId;
use serde::{Deserialize, Serialize};

/// A node of the abstract block tree.
///
/// Blocks carry no payload here; the fork-choice rule only needs identity
/// and ancestry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(rename = "parent")]
    pub parent_id: BlockId,
}

impl Block {
    pub fn new(id: impl Into<BlockId>, parent_id: impl Into<BlockId>) -> Self {
        Block {
            id: id.into(),
            parent_id: parent_id.into(),
        }
    }

    /// Genesis is marked by a self-referencing parent.
    pub fn is_root(&self) -> bool {
        self.id == self.parent_id
    }
}
