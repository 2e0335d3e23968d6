//! The building block of an [`OrderedTree`][crate::OrderedTree].

/// An owning child slot. Either empty or the sole owner of a subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` holds one item and owns up to two children. There is no parent pointer: anything
/// that needs to walk back up keeps its own stack or holds a cursor on the parent's slot.
pub(crate) struct Node<T> {
    pub(crate) item: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `item`.
    pub(crate) fn new_boxed(item: T) -> Box<Self> {
        Box::new(Self {
            item,
            left: None,
            right: None,
        })
    }

    /// Construct a `Node` holding `item` with the given children.
    pub(crate) fn with_children(item: T, left: Link<T>, right: Link<T>) -> Box<Self> {
        Box::new(Self { item, left, right })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Removes the largest node of the subtree owned by `link` and returns its item. The largest
    /// node has no right child so its left child (possibly empty) takes its place.
    ///
    /// Returns `None` only when `link` is empty.
    pub(crate) fn pop_max(link: &mut Link<T>) -> Option<T> {
        let mut link = link;
        while link.as_ref().is_some_and(|node| node.right.is_some()) {
            link = &mut link.as_mut().expect("Checked above").right;
        }

        let max = link.take()?;
        let Node { item, left, .. } = *max;
        *link = left;
        Some(item)
    }
}

/// Drops every node reachable from `stack` one at a time. Letting a `Box<Node>` drop on its own
/// recurses once per level, which overflows the call stack on a long degenerate chain.
pub(crate) fn teardown<T>(stack: &mut Vec<Box<Node<T>>>) {
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
