//! Traversals over an [`OrderedTree`][crate::OrderedTree].
//!
//! Every traversal keeps its own stack (or queue) instead of recursing, so walking a degenerate
//! tree whose height is close to its length costs heap space rather than call stack.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::{teardown, Link, Node};

/// Pre-order traversal: a node, then its left subtree, then its right subtree. This is the
/// default iteration order of the tree.
///
/// Created by [`OrderedTree::iter`][crate::OrderedTree::iter] and
/// [`OrderedTree::preorder`][crate::OrderedTree::preorder].
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is finished before it.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// In-order traversal yielding items in ascending order.
///
/// Created by [`OrderedTree::inorder`][crate::OrderedTree::inorder].
pub struct InOrder<'a, T> {
    /// Nodes whose left subtree is being (or has been) visited but which haven't been yielded.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    /// Starts the traversal at the first item that is not less than `low`. Nodes skipped over on
    /// the way down are never yielded so the length is unknown up front.
    pub(crate) fn starting_at(root: Option<&'a Node<T>>, low: &T, len: usize) -> Self
    where
        T: Ord,
    {
        let mut stack = Vec::new();
        let mut node = root;
        while let Some(n) = node {
            if n.item < *low {
                node = n.right();
            } else {
                stack.push(n);
                node = n.left();
            }
        }

        Self {
            stack,
            remaining: len,
        }
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len().min(self.remaining), Some(self.remaining))
    }
}

/// Post-order traversal: left subtree, right subtree, then the node itself.
///
/// Created by [`OrderedTree::postorder`][crate::OrderedTree::postorder].
pub struct PostOrder<'a, T> {
    /// Each node is pushed twice: once to expand its children and once, marked `true`, to be
    /// yielded after them.
    stack: Vec<(&'a Node<T>, bool)>,
    remaining: usize,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            stack: root.map(|n| (n, false)).into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                self.remaining -= 1;
                return Some(&node.item);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Level-order (breadth first) traversal, left to right within each level.
///
/// Created by [`OrderedTree::levelorder`][crate::OrderedTree::levelorder].
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            queue: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Consuming in-order traversal. Yields the owned items in ascending order, dismantling the tree
/// as it goes.
///
/// Created by [`OrderedTree::into_inorder`][crate::OrderedTree::into_inorder].
pub struct IntoInOrder<T> {
    /// Nodes whose left child has already been detached and pushed.
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoInOrder<T> {
    pub(crate) fn new(root: Link<T>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoInOrder<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        self.remaining -= 1;
        Some(node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> Drop for IntoInOrder<T> {
    fn drop(&mut self) {
        teardown(&mut self.stack);
    }
}

impl<T> ExactSizeIterator for PreOrder<'_, T> {}
impl<T> ExactSizeIterator for PostOrder<'_, T> {}
impl<T> ExactSizeIterator for LevelOrder<'_, T> {}
impl<T> ExactSizeIterator for IntoInOrder<T> {}

impl<T> FusedIterator for PreOrder<'_, T> {}
impl<T> FusedIterator for InOrder<'_, T> {}
impl<T> FusedIterator for PostOrder<'_, T> {}
impl<T> FusedIterator for LevelOrder<'_, T> {}
impl<T> FusedIterator for IntoInOrder<T> {}
