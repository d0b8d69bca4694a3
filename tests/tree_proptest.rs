//! Property-based tests: the tree against a `BTreeSet` model.

use std::collections::BTreeSet;

use proptest::prelude::*;
use redblack::RbTree;

// =============================================================================
// Test helpers
// =============================================================================

#[derive(Clone, Debug)]
enum Op {
    Insert(u16),
    Erase(u16),
}

/// Keys come from a small range so inserts collide and erases hit.
fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0u16..256).prop_map(Op::Insert),
        2 => (0u16..256).prop_map(Op::Erase),
    ]
}

fn apply(tree: &mut RbTree<u16>, model: &mut BTreeSet<u16>, op: &Op) -> (bool, bool) {
    return match op {
        Op::Insert(key) => (tree.insert(*key), model.insert(*key)),
        Op::Erase(key) => (tree.erase(key), model.remove(key)),
    };
}

fn keys(tree: &RbTree<u16>) -> Vec<u16> {
    return tree.iter().copied().collect();
}

// =============================================================================
// Invariants
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every prefix of an op sequence leaves a valid tree holding exactly
    /// the model's keys.
    #[test]
    fn matches_model_after_every_op(ops in prop::collection::vec(arbitrary_op(), 0..300)) {
        let mut tree = RbTree::new();
        let mut model = BTreeSet::new();
        for op in &ops {
            let (ours, theirs) = apply(&mut tree, &mut model, op);
            prop_assert_eq!(ours, theirs);
            prop_assert!(tree.validate().is_ok(), "{:?} after {:?}", tree.validate(), op);
            prop_assert_eq!(tree.len(), model.len());
        }
        prop_assert_eq!(keys(&tree), model.iter().copied().collect::<Vec<_>>());
        prop_assert_eq!(tree.min().ok(), model.first());
        prop_assert_eq!(tree.max().ok(), model.last());
    }

    /// height <= 2 * log2(n + 1)
    #[test]
    fn height_is_logarithmic(ops in prop::collection::vec(arbitrary_op(), 0..400)) {
        let mut tree = RbTree::new();
        let mut model = BTreeSet::new();
        for op in &ops {
            apply(&mut tree, &mut model, op);
            let bound = 2.0 * ((tree.len() + 1) as f64).log2();
            prop_assert!(tree.height() as f64 <= bound);
        }
    }

    /// Inserting a fresh key and erasing it again restores the key set.
    #[test]
    fn insert_then_erase_restores_keys(
        start in prop::collection::btree_set(0u16..1000, 0..100),
        key in 0u16..1000,
    ) {
        prop_assume!(!start.contains(&key));
        let mut tree: RbTree<u16> = start.iter().copied().collect();
        let before = keys(&tree);

        prop_assert!(tree.insert(key));
        prop_assert!(tree.find(&key).is_some());
        prop_assert!(tree.erase(&key));
        prop_assert!(tree.find(&key).is_none());

        prop_assert_eq!(keys(&tree), before);
        prop_assert!(tree.validate().is_ok());
    }

    /// Duplicate inserts and missing-key erases leave the shape untouched.
    #[test]
    fn noops_keep_shape(
        start in prop::collection::btree_set(0u16..500, 1..100),
        missing in 500u16..1000,
        pick in any::<prop::sample::Index>(),
    ) {
        let mut tree: RbTree<u16> = start.iter().copied().collect();
        let shape = tree.levels();

        prop_assert!(!tree.erase(&missing));
        prop_assert_eq!(tree.levels(), shape.clone());

        let present = *pick.get(&start.iter().copied().collect::<Vec<_>>());
        prop_assert!(!tree.insert(present));
        prop_assert_eq!(tree.levels(), shape);
    }

    /// Erasing every key, in any order, leaves an empty valid tree.
    #[test]
    fn drain_in_random_order(
        start in prop::collection::vec(0u16..2000, 0..200).prop_shuffle(),
    ) {
        let mut tree: RbTree<u16> = start.iter().copied().collect();
        let mut order = start.clone();
        order.reverse();
        for key in &order {
            tree.erase(key);
            prop_assert!(!tree.contains(key));
            prop_assert!(tree.validate().is_ok());
        }
        prop_assert!(tree.is_empty());
    }
}
