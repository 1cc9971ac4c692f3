//! This crate exposes an ordered, in-memory Binary Search Tree (BST) over
//! any totally-ordered element type.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The invariants of this BST are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value.
//!
//! > Equal values are routed to the right. Inserting the same value twice stores
//! > it twice, and removal takes out the first copy met on the way down.
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). This tree never
//! rebalances, so its shape is decided entirely by insertion order: inserting
//! sorted values produces a chain whose height equals its length. BSTs also
//! naturally support sorted iteration by visiting the left subtree, then the
//! subtree root, then the right subtree.
//!
//! # Examples
//!
//! ```
//! use binary_tree::Tree;
//!
//! let mut tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//!
//! assert!(tree.contains(&7));
//! assert!(tree.remove(&5));
//! assert!(!tree.contains(&5));
//!
//! let sorted: Vec<_> = tree.iter().copied().collect();
//! assert_eq!(sorted, [1, 3, 4, 7, 8, 9]);
//! assert_eq!(tree.len(), 6);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod iter;
mod node;
pub mod tree;

pub use error::{InvariantError, Result};
pub use iter::Iter;
pub use tree::Tree;
