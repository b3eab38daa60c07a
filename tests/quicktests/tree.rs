use rebalancing_bst::tree::Tree;

use std::collections::HashMap;

/// Counts how many times each value appears.
fn counts(xs: &[i8]) -> HashMap<i8, usize> {
    let mut counts = HashMap::new();
    for x in xs {
        *counts.entry(*x).or_insert(0) += 1;
    }
    counts
}

#[test]
fn scenario_unbalance_and_rebalance() {
    let mut tree = Tree::new();
    for x in [50, 30, 70, 20, 40, 60, 80] {
        tree.insert(x);
    }

    assert_eq!(tree.in_order(), vec![20, 30, 40, 50, 60, 70, 80]);
    assert_eq!(tree.level_order(), vec![50, 30, 70, 20, 40, 60, 80]);
    assert!(tree.is_balanced());

    for x in [90, 100, 110] {
        tree.insert(x);
    }
    assert!(!tree.is_balanced());

    tree.rebalance();
    assert!(tree.is_balanced());
    assert_eq!(
        tree.in_order(),
        vec![20, 30, 40, 50, 60, 70, 80, 90, 100, 110]
    );
}

#[test]
fn ascending_inserts_unbalance() {
    let mut tree = Tree::new();
    let mut balanced = Vec::new();
    for x in 1..=5 {
        tree.insert(x);
        balanced.push(tree.is_balanced());
    }

    assert_eq!(balanced, vec![true, true, false, false, false]);
}

quickcheck::quickcheck! {
    fn in_order_is_sorted(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let in_order = tree.in_order();

        in_order.windows(2).all(|w| w[0] <= w[1])
    }
}

quickcheck::quickcheck! {
    fn traversals_keep_every_value(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let expected = counts(&xs);

        tree.len() == xs.len()
            && counts(&tree.in_order()) == expected
            && counts(&tree.pre_order()) == expected
            && counts(&tree.post_order()) == expected
            && counts(&tree.level_order()) == expected
    }
}

quickcheck::quickcheck! {
    fn rebalance_keeps_in_order(xs: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.into_iter().collect();
        let before = tree.in_order();

        tree.rebalance();
        tree.in_order() == before && tree.is_balanced()
    }
}

quickcheck::quickcheck! {
    fn rebalance_is_idempotent(xs: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.into_iter().collect();
        tree.rebalance();
        let once = tree.pre_order();

        tree.rebalance();
        tree.pre_order() == once && tree.is_balanced()
    }
}

quickcheck::quickcheck! {
    fn rebalanced_height_is_minimal(xs: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.into_iter().collect();
        tree.rebalance();

        let n = tree.len();
        tree.height() == (usize::BITS - n.leading_zeros()) as usize
    }
}

quickcheck::quickcheck! {
    fn inserting_after_rebalance_keeps_order(xs: Vec<i8>, ys: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        tree.rebalance();
        tree.extend(ys.iter().copied());

        let mut all = xs;
        all.extend(ys);
        all.sort();
        tree.in_order() == all
    }
}
