use std::cmp::Ordering;

/// An owning pointer to a child subtree. `None` marks the empty position below a leaf.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` owns its value and at most two children. Nodes never point back at their parent:
/// each one is owned by exactly one parent link (or by the `Tree` itself for the root).
#[derive(Clone)]
pub(crate) struct Node<T> {
    value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Recursively walks down to the first empty position for `value` and attaches a new node
    /// there. Values equal to this node's value go right.
    pub(crate) fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let child = match value.cmp(&self.value) {
            Ordering::Less => &mut self.left,
            Ordering::Equal | Ordering::Greater => &mut self.right,
        };

        if let Some(node) = child {
            node.insert(value);
        } else {
            *child = Some(Self::new_boxed(value));
        }
    }

    /// Unhooks the leftmost node of this node's left subtree and returns it. Whatever was to the
    /// right of the unhooked node takes its place under its old parent.
    ///
    /// Returns `None` (and changes nothing) when this node has no left child.
    pub(crate) fn detach_leftmost(&mut self) -> Link<T> {
        let mut parent = self;
        while parent.left().is_some_and(|left| left.left.is_some()) {
            parent = parent.left.as_deref_mut()?;
        }

        let mut leftmost = parent.left.take()?;
        parent.left = leftmost.right.take();
        Some(leftmost)
    }

    pub(crate) fn pre_order<F>(&self, visit: &mut F)
    where
        F: FnMut(&T),
    {
        visit(&self.value);
        if let Some(left) = self.left() {
            left.pre_order(visit);
        }
        if let Some(right) = self.right() {
            right.pre_order(visit);
        }
    }

    pub(crate) fn post_order<F>(&self, visit: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(left) = self.left() {
            left.post_order(visit);
        }
        if let Some(right) = self.right() {
            right.post_order(visit);
        }
        visit(&self.value);
    }

    pub(crate) fn in_order<F>(&self, visit: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(left) = self.left() {
            left.in_order(visit);
        }
        visit(&self.value);
        if let Some(right) = self.right() {
            right.in_order(visit);
        }
    }
}
