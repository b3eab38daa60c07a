//! A BST that only rebalances when asked to. Inserting never rotates anything so the shape of the
//! tree is decided entirely by insertion order, and a call to [`Tree::rebalance`] throws the shape
//! away and rebuilds a height-balanced tree from the sorted values.
//!
//! # Examples
//!
//! ```
//! use rebalancing_bst::tree::Tree;
//!
//! let mut tree = Tree::new();
//! for value in [50, 30, 70, 20, 40, 60, 80] {
//!     tree.insert(value);
//! }
//!
//! assert_eq!(tree.in_order(), vec![20, 30, 40, 50, 60, 70, 80]);
//! assert_eq!(tree.level_order(), vec![50, 30, 70, 20, 40, 60, 80]);
//! assert!(tree.is_balanced());
//!
//! // A run of ascending values hangs off the right side.
//! for value in [90, 100, 110] {
//!     tree.insert(value);
//! }
//! assert!(!tree.is_balanced());
//!
//! // Rebalancing keeps the values and fixes the shape.
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.in_order(), vec![20, 30, 40, 50, 60, 70, 80, 90, 100, 110]);
//! ```

use std::collections::VecDeque;
use std::fmt;

use log::{debug, log_enabled, trace, Level};

use crate::util::Height;

/// An owning child slot. `None` marks the empty pointer at the bottom of a subtree.
type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree of values. Values smaller than a node go to its left and values greater
/// than or equal to it go to its right, so duplicates collect in the right subtree of their first
/// occurrence.
///
/// Every walk over the tree uses an explicit stack or queue rather than recursion so a tree that
/// has degenerated into a long chain is as safe to use (and drop) as a balanced one.
pub struct Tree<T> {
    root: Link<T>,
    /// Number of nodes reachable from `root`.
    len: usize,
}

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // The derived drop would recurse once per level.
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut root = None;
        {
            let mut pending = vec![(self.root(), &mut root)];
            while let Some((source, slot)) = pending.pop() {
                let Some(source) = source else {
                    continue;
                };
                let node = slot.insert(Node::new_boxed(source.value.clone()));
                let Node { left, right, .. } = &mut **node;
                pending.push((source.right(), right));
                pending.push((source.left(), left));
            }
        }

        Self {
            root,
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("level_order", &self.iter_level_order().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of values in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the value as a new leaf. Nothing already in the tree moves: the new node hangs off
    /// the first empty slot found by going left for smaller values and right for everything else.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalancing_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5);
    /// tree.insert(3);
    /// tree.insert(5);
    ///
    /// // The second 5 is the right child of the first.
    /// assert_eq!(tree.level_order(), vec![5, 3, 5]);
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        let mut depth = 0usize;
        while let Some(node) = slot {
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }
        *slot = Some(Node::new_boxed(value));
        self.len += 1;
        trace!("Inserted value at depth {depth} (tree now holds {} values)", self.len);
    }

    /// Returns whether, for every node, the heights of its two subtrees differ by at most one. An
    /// empty tree is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalancing_bst::tree::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// assert!(tree.is_balanced());
    ///
    /// tree.insert(4);
    /// tree.insert(5);
    /// assert!(!tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        self.check_height() != Height::Unbalanced
    }

    /// The number of levels in the tree. An empty tree has height 0 and a lone root has height 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: VecDeque<&Node<T>> = self.root().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            for _ in 0..level.len() {
                if let Some(node) = level.pop_front() {
                    level.extend(node.left());
                    level.extend(node.right());
                }
            }
        }
        height
    }

    /// Replaces the tree with a height-balanced tree holding the same values in the same in-order
    /// sequence. The middle value (the lower one for an even count) becomes the root and each half
    /// is rebuilt the same way.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalancing_bst::tree::Tree;
    ///
    /// let mut tree: Tree<_> = (1..=7).collect();
    /// assert_eq!(tree.height(), 7);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 3);
    /// assert_eq!(tree.level_order(), vec![4, 2, 6, 1, 3, 5, 7]);
    /// ```
    pub fn rebalance(&mut self) {
        let height_before = log_enabled!(Level::Debug).then(|| self.height());

        let values = self.take_in_order();
        let len = values.len();
        self.root = build_balanced(len, &mut values.into_iter());
        self.len = len;

        if let Some(height_before) = height_before {
            debug!(
                "Rebalanced {len} values from height {height_before} to height {}",
                self.height()
            );
        }
    }

    /// The values in sorted order: left subtree, node, right subtree.
    pub fn in_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter_in_order().cloned().collect()
    }

    /// The values with each node before its subtrees: node, left subtree, right subtree.
    pub fn pre_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter_pre_order().cloned().collect()
    }

    /// The values with each node after its subtrees: left subtree, right subtree, node.
    pub fn post_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter_post_order().cloned().collect()
    }

    /// The values level by level from the root down, left to right within a level.
    pub fn level_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter_level_order().cloned().collect()
    }

    /// Borrowing iterator over the values in sorted order.
    pub fn iter_in_order(&self) -> InOrder<'_, T> {
        InOrder {
            pending: Vec::new(),
            current: self.root(),
        }
    }

    /// Borrowing iterator over the values in pre-order.
    pub fn iter_pre_order(&self) -> PreOrder<'_, T> {
        PreOrder {
            pending: self.root().into_iter().collect(),
        }
    }

    /// Borrowing iterator over the values in post-order.
    pub fn iter_post_order(&self) -> PostOrder<'_, T> {
        PostOrder {
            pending: self.root().map(|root| (root, false)).into_iter().collect(),
        }
    }

    /// Borrowing iterator over the values in level order.
    pub fn iter_level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder {
            queue: self.root().into_iter().collect(),
        }
    }

    fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Post-order walk computing the height of every subtree, stopping at the first node whose
    /// children differ in height by more than one.
    fn check_height(&self) -> Height {
        enum Step<'a, T> {
            Descend(Option<&'a Node<T>>),
            Join,
        }

        let mut steps = vec![Step::Descend(self.root())];
        let mut heights = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Step::Descend(None) => heights.push(Height::Balanced(0)),
                Step::Descend(Some(node)) => {
                    steps.push(Step::Join);
                    steps.push(Step::Descend(node.right()));
                    steps.push(Step::Descend(node.left()));
                }
                Step::Join => {
                    let right = heights.pop().expect("Join follows both children");
                    let left = heights.pop().expect("Join follows both children");
                    match Height::join(left, right) {
                        Height::Unbalanced => return Height::Unbalanced,
                        height => heights.push(height),
                    }
                }
            }
        }

        heights.pop().unwrap_or(Height::Balanced(0))
    }

    /// Empties the tree, moving its values out in sorted order.
    fn take_in_order(&mut self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len);
        let mut pending = Vec::new();
        let mut current = self.root.take();
        self.len = 0;

        loop {
            while let Some(mut node) = current {
                current = node.left.take();
                pending.push(node);
            }
            let Some(node) = pending.pop() else {
                break;
            };
            let node = *node;
            values.push(node.value);
            current = node.right;
        }

        values
    }
}

/// Builds a balanced subtree from the next `len` values of `values`, which must be sorted. The
/// subtree root is the value at index `(len - 1) / 2` of the range so the left side never has more
/// values than the right. Recursion depth is logarithmic in `len`.
fn build_balanced<T>(len: usize, values: &mut impl Iterator<Item = T>) -> Link<T> {
    if len == 0 {
        return None;
    }

    let mid = (len - 1) / 2;
    let left = build_balanced(mid, values);
    let value = values.next()?;
    let right = build_balanced(len - mid - 1, values);

    Some(Box::new(Node { value, left, right }))
}

/// Iterator over a [`Tree`] in sorted order. See [`Tree::iter_in_order`].
pub struct InOrder<'a, T> {
    pending: Vec<&'a Node<T>>,
    current: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.pending.push(node);
            self.current = node.left();
        }
        let node = self.pending.pop()?;
        self.current = node.right();
        Some(&node.value)
    }
}

/// Iterator over a [`Tree`] in pre-order. See [`Tree::iter_pre_order`].
pub struct PreOrder<'a, T> {
    pending: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        // Right first so the left subtree is popped first.
        self.pending.extend(node.right());
        self.pending.extend(node.left());
        Some(&node.value)
    }
}

/// Iterator over a [`Tree`] in post-order. See [`Tree::iter_post_order`].
pub struct PostOrder<'a, T> {
    /// Nodes still to emit, flagged with whether their children have already been queued.
    pending: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, children_queued) = self.pending.pop()?;
            if children_queued {
                return Some(&node.value);
            }
            self.pending.push((node, true));
            self.pending.extend(node.right().map(|n| (n, false)));
            self.pending.extend(node.left().map(|n| (n, false)));
        }
    }
}

/// Iterator over a [`Tree`] in level order. See [`Tree::iter_level_order`].
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(&node.value)
    }
}
