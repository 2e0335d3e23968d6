//! Height, the coarse balance check, and rebuilding a tree at minimal height.

use std::mem;

use crate::node::{Link, Node};
use crate::OrderedTree;

impl<T> OrderedTree<T> {
    /// The number of edges on the longest path from the root to a leaf. A single item has a
    /// height of 0 and an empty tree has a height of -1.
    ///
    /// Levels are counted breadth first, so this is safe on trees of any shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.extend([5, 3, 8, 1, 4, 7, 9]);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> isize {
        let mut levels = 0;
        let mut level: Vec<&Node<T>> = self.root().into_iter().collect();
        let mut next = Vec::new();
        while !level.is_empty() {
            levels += 1;
            for node in level.drain(..) {
                next.extend(node.left());
                next.extend(node.right());
            }
            mem::swap(&mut level, &mut next);
        }

        levels - 1
    }

    /// Returns `true` when the height is below `2 * log2(len + 1) - 1`, i.e. the tree is not much
    /// taller than a balanced tree holding the same number of items. An empty tree is balanced.
    ///
    /// This is a whole-tree check, not a per-node balance factor.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = (1..=1000).collect();
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        if self.is_empty() {
            return true;
        }

        let limit = 2.0 * ((self.len + 1) as f64).log2() - 1.0;
        (self.height() as f64) < limit
    }

    /// Rebuilds the tree at minimal height. The items are taken out in ascending order and the
    /// item at index `len / 2` of every run becomes the root of that run's subtree, with the items
    /// before it on the left and the items after it on the right. A tree of `n` items ends up with
    /// a height of `ceil(log2(n + 1)) - 1`.
    ///
    /// With duplicates, the chosen middle item can have equal items in its left subtree. Searches
    /// stop at the first equal item on the way down, so lookups and removals are unaffected and
    /// in-order iteration stays sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = (1..=7).collect();
    /// assert_eq!(tree.height(), 6);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(tree.iter().next(), Some(&4));
    /// assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6, 7]);
    /// ```
    pub fn rebalance(&mut self) {
        let count = self.len;
        let height_before = log::log_enabled!(log::Level::Debug).then(|| self.height());

        let mut sorted = mem::take(self).into_inorder();
        self.root = build_balanced(count, &mut sorted, &mut self.len);

        if let Some(height_before) = height_before {
            log::debug!(
                "rebalanced {} items: height {} -> {}",
                self.len,
                height_before,
                self.height()
            );
        }
    }
}

/// Builds a minimal-height subtree from the next `count` items of an ascending stream, bumping
/// `len` once per node created.
///
/// Recursion depth is the height of the subtree being built, which is logarithmic in `count`.
fn build_balanced<T>(
    count: usize,
    sorted: &mut impl Iterator<Item = T>,
    len: &mut usize,
) -> Link<T> {
    if count == 0 {
        return None;
    }

    let mid = count / 2;
    let left = build_balanced(mid, sorted, len);
    let item = sorted.next()?;
    *len += 1;
    let right = build_balanced(count - mid - 1, sorted, len);

    Some(Node::with_children(item, left, right))
}
