//! The lazy in-order iterator over a [`Tree`][crate::Tree].
//!
//! Rather than recursing, the iterator keeps the path it still has to come back to on an
//! explicit stack, so it can hand out one value at a time and pick up exactly where it stopped.
//! Every call to [`Tree::iter`][crate::Tree::iter] builds a fresh stack; two iterators over the
//! same tree never share a cursor.
//!
//! An `Iter` borrows its tree, so the tree cannot be changed while the iterator is alive.

use std::iter::FusedIterator;

use crate::node::Node;

/// An iterator over the values of a [`Tree`][crate::Tree] in ascending order.
///
/// Created by [`Tree::iter`][crate::Tree::iter].
pub struct Iter<'a, T> {
    /// Ancestors whose value still has to be yielded once their left subtree is exhausted. The
    /// root is pushed once up front and acts as a sentinel: popping it means the walk is done.
    stack: Vec<&'a Node<T>>,
    /// The node the next step starts from.
    current: Option<&'a Node<T>>,
    /// Whether the next step must first descend to the leftmost node under `current`. Cleared
    /// after popping an ancestor, whose left subtree has already been visited.
    go_left_next: bool,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            current: root,
            go_left_next: true,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stack.is_empty() {
            return None;
        }
        let mut current = self.current?;

        if self.go_left_next {
            while let Some(left) = current.left() {
                self.stack.push(current);
                current = left;
            }
        }

        match current.right() {
            Some(right) => {
                self.current = Some(right);
                self.go_left_next = true;
            }
            None => {
                self.current = self.stack.pop();
                self.go_left_next = false;
            }
        }

        self.remaining = self.remaining.saturating_sub(1);
        Some(current.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
