//! Errors reported by [`Tree::check_invariants`][crate::Tree::check_invariants].
//!
//! None of the tree's everyday operations fail: a missing value is reported as `false` or
//! `None`. These errors only describe a tree whose structure has been corrupted, and name the
//! depth (the root is at depth 0) of the first offending node found.

use thiserror::Error;

/// A broken structural invariant of a [`Tree`][crate::Tree].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantError {
    /// A node sits in the left subtree of an ancestor whose value is not greater than its own.
    #[error("node at depth {depth} is not less than an ancestor it sits left of")]
    LeftOutOfOrder {
        /// Depth of the offending node.
        depth: usize,
    },

    /// A node sits in the right subtree of an ancestor whose value is greater than its own.
    #[error("node at depth {depth} is less than an ancestor it sits right of")]
    RightOutOfOrder {
        /// Depth of the offending node.
        depth: usize,
    },

    /// The running element count disagrees with the number of nodes reachable from the root.
    #[error("tree records {recorded} values but {reachable} nodes are reachable")]
    CountMismatch {
        /// The count the tree maintains across inserts and removals.
        recorded: usize,
        /// The number of nodes actually linked into the tree.
        reachable: usize,
    },
}

/// A Result type alias using [`InvariantError`].
pub type Result<T> = std::result::Result<T, InvariantError>;
