use crate::errors::ForkChoiceError;
use crate::tree::BlockTree;
use containers::{Block, BlockId, Weight};
use std::collections::HashMap;

/// Greedy GHOST descent: starting at the root, repeatedly step into the
/// child with the greatest subtree weight until a childless block is
/// reached. That block is the head.
///
/// Ties go to the smallest id under the total `BlockId` order, so the
/// result does not depend on how the scenario enumerated its blocks.
///
/// `subtree_weights` must be the mapping produced by [`crate::aggregate`]
/// over the same tree; anything else is a contract violation surfaced as
/// `InvalidTree`.
pub fn select_head<'tree>(
    tree: &'tree BlockTree,
    subtree_weights: &HashMap<BlockId, Weight>,
) -> Result<&'tree Block, ForkChoiceError> {
    let mut current = tree.root();

    // Every step descends one level of a cycle-free tree, so a walk longer
    // than the block count means the inputs disagree about structure.
    for _ in 0..tree.len() {
        let children = tree.children_of(&current.id);
        if children.is_empty() {
            return Ok(current);
        }

        for child in children {
            if !subtree_weights.contains_key(child) {
                return Err(ForkChoiceError::InvalidTree);
            }
        }

        let next = children.iter().max_by(|a, b| {
            let wa = subtree_weights.get(*a).copied().unwrap_or(0);
            let wb = subtree_weights.get(*b).copied().unwrap_or(0);
            // Heaviest subtree wins; on equal weight the id comparison is
            // reversed so the smallest id comes out on top.
            wa.cmp(&wb).then_with(|| b.cmp(a))
        });

        current = match next.and_then(|id| tree.block(id)) {
            Some(block) => block,
            None => return Err(ForkChoiceError::InvalidTree),
        };
    }

    Err(ForkChoiceError::InvalidTree)
}
