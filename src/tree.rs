//! A mutable, unbalanced BST. Values are stored once per insert (duplicates included) and the
//! tree's shape follows directly from the order values arrive in: nothing is ever rotated.
//!
//! # Examples
//!
//! ```
//! use binary_tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1);
//! assert!(tree.contains(&1));
//!
//! // Inserting an equal value stores a second copy.
//! tree.insert(1);
//! assert_eq!(tree.len(), 2);
//!
//! // Each removal takes out one copy.
//! assert!(tree.remove(&1));
//! assert!(tree.contains(&1));
//! assert!(tree.remove(&1));
//! assert!(!tree.remove(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::error::{InvariantError, Result};
use crate::iter::Iter;
use crate::node::{Link, Node};

/// A Binary Search Tree. This can be used for inserting, finding, and removing values, and for
/// visiting them in pre-, post- or in-order.
///
/// Values less than a node live in its left subtree; values greater than *or equal to* it live
/// in its right subtree.
#[derive(Clone)]
pub struct Tree<T> {
    root: Link<T>,
    count: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Unlink nodes one at a time so a long chain doesn't drop recursively, one stack frame
        // per level.
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Which of the three removal strategies applied to a matched node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Removal {
    /// The node had no right child so its left child (possibly nothing) took its place.
    NoRightChild,
    /// The right child had no left child, so it took the node's place and adopted its left
    /// subtree.
    RightHasNoLeft,
    /// The in-order successor was unhooked from the right subtree and took the node's place.
    Successor,
}

impl Removal {
    fn as_str(self) -> &'static str {
        match self {
            Self::NoRightChild => "no_right_child",
            Self::RightHasNoLeft => "right_has_no_left",
            Self::Successor => "successor",
        }
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            count: 0,
        }
    }

    /// The number of values in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Inserts the value into the tree. This never fails and never rejects a duplicate: a value
    /// equal to one already stored is placed in that node's right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &2, &2]);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        match self.root.as_deref_mut() {
            Some(root) => root.insert(value),
            None => self.root = Some(Node::new_boxed(value)),
        }

        self.count += 1;
        trace!(count = self.count, "inserted value");
    }

    /// Whether the tree holds a value equal to the given one.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let (found, _parent) = self.find_with_parent(value);
        found.is_some()
    }

    /// Walks down from the root and returns the first node equal to `value` along with its
    /// parent. The parent is `None` when the match is the root, and both are `None` when nothing
    /// matches.
    pub(crate) fn find_with_parent(&self, value: &T) -> (Option<&Node<T>>, Option<&Node<T>>)
    where
        T: Ord,
    {
        let mut current = self.root();
        let mut parent = None;

        while let Some(node) = current {
            match value.cmp(node.value()) {
                Ordering::Less => {
                    parent = Some(node);
                    current = node.left();
                }
                Ordering::Greater => {
                    parent = Some(node);
                    current = node.right();
                }
                Ordering::Equal => return (Some(node), parent),
            }
        }

        (None, None)
    }

    /// Follows the same path as [`Tree::find_with_parent`] but returns the link that owns the
    /// match: either the root link or the parent's left or right child slot. Holding the slot
    /// itself means removal never has to work out which side of the parent the match hung from.
    fn find_slot_mut(&mut self, value: &T) -> Option<&mut Link<T>>
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        loop {
            let ordering = value.cmp(slot.as_deref()?.value());
            slot = match ordering {
                Ordering::Less => &mut slot.as_mut()?.left,
                Ordering::Greater => &mut slot.as_mut()?.right,
                Ordering::Equal => return Some(slot),
            };
        }
    }

    /// Removes one value equal to the given one and returns whether anything was removed. When
    /// duplicates are stored, the copy closest to the root goes first.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert!(tree.remove(&5));
    /// assert!(!tree.remove(&5));
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&3, &8]);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        let Some(slot) = self.find_slot_mut(value) else {
            return false;
        };
        let Some(mut current) = slot.take() else {
            return false;
        };

        let (replacement, removal) = match current.right.take() {
            None => (current.left.take(), Removal::NoRightChild),
            Some(mut right) => match right.detach_leftmost() {
                None => {
                    right.left = current.left.take();
                    (Some(right), Removal::RightHasNoLeft)
                }
                Some(mut successor) => {
                    successor.left = current.left.take();
                    successor.right = Some(right);
                    (Some(successor), Removal::Successor)
                }
            },
        };
        *slot = replacement;

        self.count -= 1;
        trace!(case = removal.as_str(), count = self.count, "removed value");
        true
    }

    /// Calls `visit` on every value, visiting each node before its left subtree and then its
    /// right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let mut seen = Vec::new();
    /// tree.pre_order_traversal(|v| seen.push(*v));
    ///
    /// assert_eq!(seen, [2, 1, 3]);
    /// ```
    pub fn pre_order_traversal<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        if let Some(root) = self.root() {
            root.pre_order(&mut visit);
        }
    }

    /// Calls `visit` on every value, visiting both subtrees of a node before the node itself.
    pub fn post_order_traversal<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        if let Some(root) = self.root() {
            root.post_order(&mut visit);
        }
    }

    /// Calls `visit` on every value in ascending order.
    ///
    /// This recurses once per level of the tree. Use [`Tree::iter`] to walk the values lazily
    /// without recursing.
    pub fn in_order_traversal<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        if let Some(root) = self.root() {
            root.in_order(&mut visit);
        }
    }

    /// Returns a lazy iterator over the values in ascending order. Each call starts a new,
    /// independent walk.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// let mut iter = tree.iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&3));
    ///
    /// // A second iterator starts over from the smallest value.
    /// assert_eq!(tree.iter().next(), Some(&1));
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root(), self.count)
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node.value())
    }

    /// The largest value in the tree. When the largest value is stored more than once, this is
    /// the copy inserted last.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node.value())
    }

    /// The number of nodes on the longest path from the root down to a leaf. An empty tree has a
    /// height of 0 and a single node has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(&Node<T>, usize)> =
            self.root().map(|root| (root, 1)).into_iter().collect();

        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(node.left().map(|left| (left, depth + 1)));
            pending.extend(node.right().map(|right| (right, depth + 1)));
        }

        height
    }

    /// Checks that every node respects the ordering invariant (left subtrees hold smaller values,
    /// right subtrees hold greater or equal values) and that [`Tree::len`] matches the number of
    /// reachable nodes.
    ///
    /// A tree built only through this type's methods always passes.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::Tree;
    ///
    /// let mut tree: Tree<_> = (0..100).rev().collect();
    /// tree.remove(&50);
    ///
    /// assert_eq!(tree.check_invariants(), Ok(()));
    /// ```
    pub fn check_invariants(&self) -> Result<()>
    where
        T: Ord,
    {
        // Each pending node carries the bounds its ancestors impose on it: values must be at least
        // `lower` (it is right of that ancestor) and strictly below `upper` (it is left of it).
        let mut pending: Vec<(&Node<T>, Option<&T>, Option<&T>, usize)> = self
            .root()
            .map(|root| (root, None, None, 0))
            .into_iter()
            .collect();
        let mut reachable = 0;

        while let Some((node, lower, upper, depth)) = pending.pop() {
            let value = node.value();
            if upper.is_some_and(|upper| value >= upper) {
                debug!(depth, "left subtree out of order");
                return Err(InvariantError::LeftOutOfOrder { depth });
            }
            if lower.is_some_and(|lower| value < lower) {
                debug!(depth, "right subtree out of order");
                return Err(InvariantError::RightOutOfOrder { depth });
            }

            reachable += 1;
            if let Some(left) = node.left() {
                pending.push((left, lower, Some(value), depth + 1));
            }
            if let Some(right) = node.right() {
                pending.push((right, Some(value), upper, depth + 1));
            }
        }

        if reachable != self.count {
            debug!(recorded = self.count, reachable, "count out of sync");
            return Err(InvariantError::CountMismatch {
                recorded: self.count,
                reachable,
            });
        }

        Ok(())
    }

    fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
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
