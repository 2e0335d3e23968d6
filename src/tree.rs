//! The tree itself and the operations that only descend from the root.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::error::{BstError, Result};
use crate::iter::{InOrder, IntoInOrder, LevelOrder, PostOrder, PreOrder};
use crate::node::{teardown, Link, Node};

/// A Binary Search Tree of items. Items in a node's left subtree order strictly before the node's
/// item and items in its right subtree order at or after it, so equal items are kept side by side
/// and the tree behaves like a sorted multiset.
///
/// [`rebalance`][OrderedTree::rebalance] may put an item equal to a node's item in that node's
/// left subtree, so for equal items the left rule relaxes to "at or before". Searches stop at the
/// first equal item on the way down and in-order iteration stays sorted either way.
///
/// The tree never balances itself. Adding already sorted items builds a chain as tall as the tree
/// is long; call [`rebalance`][OrderedTree::rebalance] to rebuild it at minimal height.
pub struct OrderedTree<T> {
    pub(crate) root: Link<T>,
    pub(crate) len: usize,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> OrderedTree<T> {
    /// Generate a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of items in the tree, counting each duplicate.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        let mut stack: Vec<_> = self.root.take().into_iter().collect();
        teardown(&mut stack);
        self.len = 0;
    }

    /// Iterates the items in pre-order: each node before its left subtree, then its right
    /// subtree. This is also what `for item in &tree` does.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&2, &1, &3]);
    /// ```
    pub fn iter(&self) -> PreOrder<'_, T> {
        self.preorder()
    }

    /// Iterates the items in pre-order. Same as [`iter`][OrderedTree::iter].
    pub fn preorder(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root(), self.len)
    }

    /// Iterates the items in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
    /// ```
    pub fn inorder(&self) -> InOrder<'_, T> {
        InOrder::new(self.root(), self.len)
    }

    /// Iterates the items in post-order: both subtrees before the node.
    pub fn postorder(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root(), self.len)
    }

    /// Iterates the items one level at a time, starting from the root.
    pub fn levelorder(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self.root(), self.len)
    }

    /// Consumes the tree, yielding its items in ascending order.
    pub fn into_inorder(mut self) -> IntoInOrder<T> {
        let len = mem::take(&mut self.len);
        IntoInOrder::new(self.root.take(), len)
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T: Ord> OrderedTree<T> {
    /// Adds `item` to the tree. An item equal to one already present is placed after it.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.add("b");
    /// tree.add("a");
    /// tree.add("b");
    ///
    /// assert_eq!(tree.inorder().collect::<Vec<_>>(), [&"a", &"b", &"b"]);
    /// ```
    pub fn add(&mut self, item: T) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if item < node.item {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        *link = Some(Node::new_boxed(item));
        self.len += 1;
    }

    /// Finds the stored item equal to `item`. If the tree holds several, the one nearest the root
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [1, 2].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, item: &T) -> Option<&T> {
        let mut node = self.root();
        while let Some(n) = node {
            match item.cmp(&n.item) {
                Ordering::Equal => return Some(&n.item),
                Ordering::Less => node = n.left(),
                Ordering::Greater => node = n.right(),
            }
        }

        None
    }

    /// Returns `true` if the tree holds an item equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }

    /// Overwrites the stored item equal to `item` with `new_item` and returns the old one, or
    /// returns `None` if there is no such item.
    ///
    /// The tree is not reshaped, so `new_item` must order exactly where the replaced item did.
    /// This is meant for items whose `Ord` looks at a key while other fields change.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.replace(&2, 2), Some(2));
    /// assert_eq!(tree.replace(&7, 7), None);
    /// ```
    pub fn replace(&mut self, item: &T, new_item: T) -> Option<T> {
        let mut node = self.root.as_deref_mut();
        while let Some(n) = node {
            match item.cmp(&n.item) {
                Ordering::Equal => return Some(mem::replace(&mut n.item, new_item)),
                Ordering::Less => node = n.left.as_deref_mut(),
                Ordering::Greater => node = n.right.as_deref_mut(),
            }
        }

        None
    }

    /// Removes an item equal to `item` from the tree and returns it. When several equal items are
    /// stored, the one nearest the root goes.
    ///
    /// # Errors
    ///
    /// [`BstError::NotPresent`] if the tree holds no such item.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{BstError, OrderedTree};
    ///
    /// let mut tree: OrderedTree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&5).ok(), Some(5));
    /// assert!(matches!(tree.remove(&5), Err(BstError::NotPresent)));
    /// assert_eq!(tree.inorder().collect::<Vec<_>>(), [&3, &8]);
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<T> {
        // Walk the owning slots instead of nodes so the slot holding the target can be repointed.
        let mut link = &mut self.root;
        loop {
            let go_left = match link.as_deref() {
                Some(node) if *item < node.item => true,
                Some(node) if *item != node.item => false,
                _ => break,
            };
            let node = link.as_mut().expect("Descending implies a node");
            link = if go_left {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        let Some(mut node) = link.take() else {
            log::trace!("remove: item not in tree of {} items", self.len);
            return Err(BstError::NotPresent);
        };
        self.len -= 1;

        // Two children: the largest item of the left subtree moves up into this node.
        if node.right.is_some() {
            if let Some(max) = Node::pop_max(&mut node.left) {
                let removed = mem::replace(&mut node.item, max);
                *link = Some(node);
                return Ok(removed);
            }
        }

        // At most one child, which takes this node's place.
        let Node {
            item: removed,
            left,
            right,
        } = *node;
        *link = left.or(right);
        Ok(removed)
    }

    /// Returns the smallest item that orders strictly after `item`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.successor(&5), Some(&7));
    /// assert_eq!(tree.successor(&6), Some(&7));
    /// assert_eq!(tree.successor(&9), None);
    /// ```
    pub fn successor(&self, item: &T) -> Option<&T> {
        let mut best = None;
        let mut node = self.root();
        while let Some(n) = node {
            if n.item > *item {
                best = Some(&n.item);
                node = n.left();
            } else {
                node = n.right();
            }
        }

        best
    }

    /// Returns the largest item that orders strictly before `item`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.predecessor(&5), Some(&4));
    /// assert_eq!(tree.predecessor(&1), None);
    /// ```
    pub fn predecessor(&self, item: &T) -> Option<&T> {
        let mut best = None;
        let mut node = self.root();
        while let Some(n) = node {
            if n.item < *item {
                best = Some(&n.item);
                node = n.right();
            } else {
                node = n.left();
            }
        }

        best
    }

    /// Returns, in ascending order, the items from the first `low` up to and including the first
    /// `high`. Both bounds must be stored in the tree.
    ///
    /// # Errors
    ///
    /// [`BstError::InvalidRange`] if `low` orders after `high` and [`BstError::MissingBound`] if
    /// either bound is not in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// let found = tree.range_find(&3, &8).unwrap();
    /// assert_eq!(found, [&3, &4, &5, &7, &8]);
    /// assert!(tree.range_find(&2, &8).is_err());
    /// ```
    pub fn range_find(&self, low: &T, high: &T) -> Result<Vec<&T>> {
        if low > high {
            log::trace!("range_find: low bound orders after high bound");
            return Err(BstError::InvalidRange);
        }
        if !self.contains(low) || !self.contains(high) {
            log::trace!("range_find: bound not in tree");
            return Err(BstError::MissingBound);
        }

        let mut found = Vec::new();
        for item in InOrder::starting_at(self.root(), low, self.len) {
            found.push(item);
            if item == high {
                break;
            }
        }

        Ok(found)
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    /// Builds a tree by adding the items one at a time, so the shape follows the source order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = PreOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Display for OrderedTree<T>
where
    T: fmt::Display,
{
    /// Draws the tree turned a quarter turn counter-clockwise: the right subtree above a node, the
    /// left subtree below it, and one `"| "` per level in front of every item.
    ///
    /// ```text
    /// | 8
    /// 5
    /// | 3
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<(&Node<T>, usize, bool)> =
            self.root().map(|n| (n, 0, false)).into_iter().collect();
        while let Some((node, depth, expanded)) = stack.pop() {
            if expanded {
                writeln!(f, "{}{}", "| ".repeat(depth), node.item)?;
                continue;
            }

            stack.extend(node.left().map(|n| (n, depth + 1, false)));
            stack.push((node, depth, true));
            stack.extend(node.right().map(|n| (n, depth + 1, false)));
        }

        Ok(())
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("len", &self.len)
            .field("items", &self.inorder().collect::<Vec<_>>())
            .finish()
    }
}
