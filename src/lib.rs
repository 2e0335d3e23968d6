//! An ordered container backed by a plain, node-linked Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores items in `Node`s. Every `Node` holds one item and owns up to two
//! child `Node`s. The invariant that makes it a search tree is:
//!
//! 1. For every `Node`, all the items in its left subtree order strictly before its own item.
//! 2. For every `Node`, all the items in its right subtree order at or after its own item.
//!
//! Equal items are always sent right, so an [`OrderedTree`] happily stores duplicates and behaves
//! like a sorted multiset.
//!
//! Searching, adding and removing take `O(height)` where `height` is the longest path from the
//! root to a leaf. This tree does **not** balance itself: adding items that are already sorted
//! builds a chain whose height is the number of items. [`OrderedTree::rebalance`] rebuilds the
//! tree at minimal height (`O(lg N)`) on demand and [`OrderedTree::is_balanced`] tells you when
//! it might be worth it.
//!
//! Nodes never point back at their parents. Walks that need to come back up keep their own
//! stack, which also means no operation recurses once per level of a lopsided tree.
//!
//! # Examples
//!
//! ```
//! use linked_bst::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.add(1);
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Adding an equal item keeps both.
//! tree.add(1);
//! assert_eq!(tree.len(), 2);
//!
//! // Removing an item returns it, removing a missing item is an error.
//! assert_eq!(tree.remove(&1).ok(), Some(1));
//! assert_eq!(tree.remove(&1).ok(), Some(1));
//! assert!(tree.remove(&1).is_err());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod balance;
pub mod error;
pub mod iter;
mod node;
pub mod source;
mod tree;

pub use error::{BstError, Result};
pub use tree::OrderedTree;
