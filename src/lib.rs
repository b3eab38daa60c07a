//! This crate exposes a Binary Search Tree (BST) that is allowed to become unbalanced and is only
//! rebalanced on request.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure built out of `Node`s. Each `Node` stores a value and
//! may have a left and a right child `Node`. The invariants kept here are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree hold a value less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree hold a value greater than or equal to
//!    its own value. Equal values therefore always end up on the right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Inserting values in sorted order produces a tree shaped like a linked list whose height is the
//! number of values. A tree is *balanced* when, at every `Node`, the heights of the two subtrees
//! differ by at most one (the AVL condition). Rather than rotating on every insert,
//! [`tree::Tree::rebalance`] rebuilds the whole tree from its sorted values by repeatedly picking
//! the middle value as the subtree root, which gives a height of `⌈lg(N + 1)⌉`.
//!
//! The tree can be walked in order, pre-order, post-order, or level by level. The [`source`]
//! module provides the values for the `bst-demo` binary and for reproducible runs.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod source;
pub mod tree;
mod util;
