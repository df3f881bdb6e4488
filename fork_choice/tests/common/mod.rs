//! Shared helpers for fork-choice integration tests.
#![allow(dead_code)]

use containers::{Block, BlockId, Weight};
use fork_choice::BlockTree;
use std::collections::HashMap;

pub fn id(s: &str) -> BlockId {
    BlockId::from(s)
}

pub fn block(id: &str, parent: &str) -> Block {
    Block::new(id, parent)
}

/// Build a tree from (id, parent) pairs, panicking on invalid input.
pub fn build_tree(edges: &[(&str, &str)]) -> BlockTree {
    BlockTree::build(edges.iter().map(|(id, parent)| block(id, parent)))
        .expect("test tree must be valid")
}

pub fn weights(entries: &[(&str, Weight)]) -> HashMap<BlockId, Weight> {
    entries
        .iter()
        .map(|(id, w)| (BlockId::from(*id), *w))
        .collect()
}

/// The tree shape used by the literal root-fork scenarios: b0 is genesis,
/// b1/b2/b3 are its children.
pub fn root_fork_tree() -> BlockTree {
    build_tree(&[("b0", "b0"), ("b1", "b0"), ("b2", "b0"), ("b3", "b0")])
}
