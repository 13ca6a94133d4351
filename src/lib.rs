//! This crate exposes a Binary Search Tree (BST) of unique integer keys,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and remove stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). The [`Tree`] here doesn't rebalance
//! itself, so its height depends on insertion order: `O(lg N)` for keys inserted in
//! a random order, but `N` when they're inserted in sorted order. BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree (see [`Tree::iter`]).
//!
//! ## Ownership
//!
//! Every node is owned by exactly one parent (or by the tree, for the root), so
//! cloning a [`Tree`] produces a fully independent copy and dropping one releases
//! each node exactly once. None of the operations recurse, so even a tree that has
//! degenerated into a single long chain can be copied, iterated, and dropped.
//!
//! ## Logging
//!
//! Structural changes are logged at `trace` level through the [`log`] facade.
//! Nothing is printed unless the application installs a logger.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod iter;
mod node;
pub mod tree;

pub use error::AllocError;
pub use iter::{IntoIter, Iter};
pub use node::Node;
pub use tree::Tree;
