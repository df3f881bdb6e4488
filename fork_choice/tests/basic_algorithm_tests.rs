//! Basic LMD-GHOST head selection tests over literal trees.

use containers::BlockId;
use fork_choice::{aggregate, select_head, BlockTree};
use pretty_assertions::assert_eq;

mod common;
use common::*;

fn head_of(tree: &BlockTree, entries: &[(&str, u64)]) -> BlockId {
    let subtree = aggregate(tree, &weights(entries)).expect("weights must attach to the tree");
    select_head(tree, &subtree)
        .expect("head selection must succeed")
        .id
        .clone()
}

#[test]
fn test_greedy_descent_through_single_fork() {
    // b0 <- b1 <- {b2, b3}; the fork sits one level below genesis.
    let tree = build_tree(&[("b0", "b0"), ("b1", "b0"), ("b2", "b1"), ("b3", "b1")]);
    assert_eq!(head_of(&tree, &[("b2", 5), ("b3", 10)]), id("b3"));
}

#[test]
fn test_max_weight_child_wins_at_root() {
    let tree = root_fork_tree();
    assert_eq!(head_of(&tree, &[("b1", 5), ("b2", 4), ("b3", 3)]), id("b1"));
}

#[test]
fn test_sibling_tie_resolves_to_smallest_id() {
    let tree = root_fork_tree();
    // b2 and b3 tie at 6; the smaller id wins.
    assert_eq!(head_of(&tree, &[("b1", 5), ("b2", 6), ("b3", 6)]), id("b2"));
}

#[test]
fn test_zero_weight_tie_uses_same_tie_break() {
    let tree = build_tree(&[("b0", "b0"), ("b1", "b0"), ("b2", "b0")]);
    assert_eq!(head_of(&tree, &[("b1", 0), ("b2", 0)]), id("b1"));
}

#[test]
fn test_unweighted_tree_descends_by_id() {
    let tree = build_tree(&[
        ("b0", "b0"),
        ("b1", "b0"),
        ("b2", "b0"),
        ("b3", "b1"),
        ("b4", "b1"),
    ]);
    // All subtree weights are zero, so the walk follows the smallest id at
    // every fork: b0 -> b1 -> b3.
    assert_eq!(head_of(&tree, &[]), id("b3"));
}

#[test]
fn test_heavy_subtree_beats_heavy_block() {
    // b1 carries more direct weight than b2, but b2's descendants outweigh it.
    let tree = build_tree(&[
        ("b0", "b0"),
        ("b1", "b0"),
        ("b2", "b0"),
        ("b3", "b2"),
        ("b4", "b2"),
    ]);
    let head = head_of(&tree, &[("b1", 10), ("b2", 1), ("b3", 6), ("b4", 7)]);
    assert_eq!(head, id("b4"));
}

#[test]
fn test_absent_weight_equals_explicit_zero() {
    let tree = root_fork_tree();
    let explicit = head_of(&tree, &[("b1", 0), ("b2", 3), ("b3", 0)]);
    let sparse = head_of(&tree, &[("b2", 3)]);
    assert_eq!(explicit, sparse);
    assert_eq!(sparse, id("b2"));
}

#[test]
fn test_repeated_evaluation_is_deterministic() {
    let tree = build_tree(&[("b0", "b0"), ("b1", "b0"), ("b2", "b0"), ("b3", "b1")]);
    let entries = [("b1", 4), ("b2", 4), ("b3", 1)];
    let first = head_of(&tree, &entries);
    for _ in 0..10 {
        assert_eq!(head_of(&tree, &entries), first);
    }
}

#[test]
fn test_selected_head_is_always_a_leaf() {
    let tree = build_tree(&[
        ("b0", "b0"),
        ("b1", "b0"),
        ("b2", "b0"),
        ("b3", "b1"),
        ("b4", "b3"),
    ]);
    let subtree = aggregate(&tree, &weights(&[("b2", 2), ("b4", 3)])).unwrap();
    let head = select_head(&tree, &subtree).unwrap();
    assert!(tree.children_of(&head.id).is_empty());
    assert_eq!(head.id, id("b4"));
}

#[test]
fn test_weight_increase_never_moves_head_away() {
    // Start with b3's branch winning, then grow b2's own weight. The head
    // must stay put until b2's branch takes over, never flip elsewhere.
    let tree = build_tree(&[("b0", "b0"), ("b1", "b0"), ("b2", "b1"), ("b3", "b1")]);
    for extra in 0..20 {
        let head = head_of(&tree, &[("b2", 5 + extra), ("b3", 10)]);
        if 5 + extra < 10 {
            assert_eq!(head, id("b3"));
        } else {
            // At the tie (weight 10) the smaller id b2 already wins.
            assert_eq!(head, id("b2"));
        }
    }
}

#[test]
fn test_deep_chain_stays_iterative() {
    // A chain long enough to blow a recursive aggregation's call stack.
    let mut edges = vec![("b00000".to_owned(), "b00000".to_owned())];
    for i in 1..10_000u32 {
        edges.push((format!("b{i:05}"), format!("b{:05}", i - 1)));
    }
    let tree = BlockTree::build(
        edges
            .iter()
            .map(|(id, parent)| containers::Block::new(id.clone(), parent.clone())),
    )
    .unwrap();

    let subtree = aggregate(&tree, &weights(&[("b09999", 1)])).unwrap();
    // The root accumulates the tip's weight through every intermediate block.
    assert_eq!(subtree.get(&id("b00000")), Some(&1));
    assert_eq!(select_head(&tree, &subtree).unwrap().id, id("b09999"));
}
