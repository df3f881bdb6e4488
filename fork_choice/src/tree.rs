use crate::errors::{ForkChoiceError, TreeDefect};
use containers::{Block, BlockId};
use std::collections::{HashMap, HashSet};

/// Immutable, validated block tree rooted at the self-referencing genesis.
///
/// `build` is the only constructor, so holding a `BlockTree` means every
/// structural invariant already holds: a single root, no duplicate ids, no
/// dangling parents, and every block reachable from the root.
#[derive(Clone, Debug)]
pub struct BlockTree {
    root: BlockId,
    blocks: HashMap<BlockId, Block>,
    children: HashMap<BlockId, Vec<BlockId>>,
}

impl BlockTree {
    pub fn build(blocks: impl IntoIterator<Item = Block>) -> Result<Self, ForkChoiceError> {
        let mut root: Option<BlockId> = None;
        let mut index: HashMap<BlockId, Block> = HashMap::new();

        for block in blocks {
            let id = block.id.clone();
            let self_referencing = block.is_root();

            if index.insert(id.clone(), block).is_some() {
                return Err(TreeDefect::DuplicateId(id).into());
            }
            if self_referencing {
                match &root {
                    None => root = Some(id),
                    Some(first) => {
                        return Err(TreeDefect::SecondRoot {
                            first: first.clone(),
                            second: id,
                        }
                        .into());
                    }
                }
            }
        }

        let root = root.ok_or(TreeDefect::MissingRoot)?;

        let mut children: HashMap<BlockId, Vec<BlockId>> = HashMap::new();
        for block in index.values() {
            if block.is_root() {
                continue;
            }
            if !index.contains_key(&block.parent_id) {
                return Err(TreeDefect::DanglingParent {
                    id: block.id.clone(),
                    parent: block.parent_id.clone(),
                }
                .into());
            }
            children
                .entry(block.parent_id.clone())
                .or_default()
                .push(block.id.clone());
        }

        // Sorted child lists make sibling enumeration, and with it the
        // tie-break, independent of input order.
        for siblings in children.values_mut() {
            siblings.sort();
        }

        // Walk down from the root; anything left unvisited hangs off a
        // parent cycle that never reaches genesis.
        let mut visited: HashSet<&BlockId> = HashSet::with_capacity(index.len());
        let mut stack = vec![&root];
        while let Some(id) = stack.pop() {
            if visited.insert(id) {
                if let Some(siblings) = children.get(id) {
                    stack.extend(siblings.iter());
                }
            }
        }
        if visited.len() != index.len() {
            // Report the smallest orphan so the error is deterministic.
            if let Some(orphan) = index.keys().filter(|id| !visited.contains(*id)).min() {
                return Err(TreeDefect::UnreachableBlock(orphan.clone()).into());
            }
        }

        Ok(BlockTree {
            root,
            blocks: index,
            children,
        })
    }

    /// The genesis block anchoring the tree.
    pub fn root(&self) -> &Block {
        &self.blocks[&self.root]
    }

    pub fn block(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.get(id)
    }

    pub fn exists(&self, id: &BlockId) -> bool {
        self.blocks.contains_key(id)
    }

    /// Children of `id`, sorted by id. Empty for leaves and for ids outside
    /// the tree.
    pub fn children_of(&self, id: &BlockId) -> &[BlockId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        // A built tree always holds at least the root.
        self.blocks.is_empty()
    }

    pub fn block_ids(&self) -> impl Iterator<Item = &BlockId> {
        self.blocks.keys()
    }
}
