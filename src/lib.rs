//! This crate exposes a couple of flavors of unbalanced Binary Search Trees
//! (BSTs) mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than or equal to its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Duplicate keys are allowed. Inserting a key equal to one already in the
//! tree places the new node in the right subtree of the existing one, which
//! is what the "or equal to" in invariant 2 is really saying.
//!
//! The benefits of these invariants are many. For instance, searching for
//! keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! The trees here do no rebalancing, so nothing bounds `height` relative to
//! `lg N`. Inserting keys in ascending order degrades every operation to
//! `O(N)`. That's the price of admission for the textbook tree.
//!
//! ## Flavors
//!
//! * [`recursive`] - the textbook presentation. Every operation is a single
//!   recursive pass over the tree, so the call stack grows with the tree's
//!   height.
//! * [`iterative`] - the same tree with the recursion converted to explicit
//!   loops and work lists. Observable behavior is identical; stack usage is
//!   bounded even for pathological chain-shaped trees.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod iterative;
pub mod recursive;
