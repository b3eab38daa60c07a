use rebalancing_bst::source::{FixedValues, RandomValues, ValueSource};
use rebalancing_bst::tree::Tree;

#[test]
fn fixed_source_builds_expected_tree() {
    let mut source = FixedValues::new(vec![50, 30, 70, 20, 40, 60, 80]);
    let tree: Tree<_> = source.values(7).into_iter().collect();

    assert_eq!(tree.pre_order(), vec![50, 30, 20, 40, 70, 60, 80]);
    assert_eq!(tree.post_order(), vec![20, 40, 30, 60, 80, 70, 50]);
}

#[test]
fn seeded_source_builds_same_tree() {
    let a: Tree<_> = RandomValues::seeded(2024).values(25).into_iter().collect();
    let b: Tree<_> = RandomValues::seeded(2024).values(25).into_iter().collect();

    assert_eq!(a.level_order(), b.level_order());
    assert_eq!(a.len(), 25);
}

/// Any source can drive a tree through the trait.
fn fill(source: &mut dyn ValueSource, size: usize) -> Tree<i32> {
    source.values(size).into_iter().collect()
}

#[test]
fn sources_are_interchangeable() {
    let mut fixed = FixedValues::new(vec![3, 1, 2]);
    let mut random = RandomValues::seeded(0);

    assert_eq!(fill(&mut fixed, 3).in_order(), vec![1, 2, 3]);
    assert_eq!(fill(&mut random, 12).len(), 12);
}
