use crate::errors::ForkChoiceError;
use crate::tree::BlockTree;
use containers::{Block, BlockId, Weight};
use std::collections::HashMap;

/// Compute the cumulative subtree weight of every block in the tree:
/// the block's own direct weight plus the totals of all its descendants.
///
/// Runs as two passes over an explicit stack instead of recursing: a
/// parent-before-children sweep records the visit order, then folding that
/// order in reverse pushes each block's total into its parent. Chain depth
/// therefore never grows the call stack.
pub fn aggregate(
    tree: &BlockTree,
    weights: &HashMap<BlockId, Weight>,
) -> Result<HashMap<BlockId, Weight>, ForkChoiceError> {
    // A weight cannot attach to a block that does not exist. Report the
    // smallest offender so the error is deterministic.
    if let Some(unknown) = weights.keys().filter(|id| !tree.exists(id)).min() {
        return Err(ForkChoiceError::UnknownBlockWeight(unknown.clone()));
    }

    let mut order: Vec<&Block> = Vec::with_capacity(tree.len());
    let mut stack = vec![tree.root()];
    while let Some(block) = stack.pop() {
        for child in tree.children_of(&block.id) {
            if let Some(child_block) = tree.block(child) {
                stack.push(child_block);
            }
        }
        order.push(block);
    }

    // Unweighted blocks start at 0; they can still end up with a nonzero
    // total through their descendants.
    let mut totals: HashMap<BlockId, Weight> = order
        .iter()
        .map(|block| {
            let own = weights.get(&block.id).copied().unwrap_or(0);
            (block.id.clone(), own)
        })
        .collect();

    // Children precede parents in the reversed sweep, so each total is
    // final by the time it is folded into its parent.
    for block in order.iter().rev() {
        if block.is_root() {
            continue;
        }
        let subtree = totals.get(&block.id).copied().unwrap_or(0);
        if let Some(parent_total) = totals.get_mut(&block.parent_id) {
            *parent_total += subtree;
        }
    }

    Ok(totals)
}
