//! Errors reported by [`OrderedTree`][crate::OrderedTree] and the word-list loader.

use thiserror::Error;

/// Everything that can go wrong when using this crate. Plain misses (`find`, `replace`,
/// `successor`, ...) are not errors and are reported with `Option` instead.
#[derive(Error, Debug)]
pub enum BstError {
    /// `remove` was asked for an item the tree does not hold.
    #[error("item not in tree")]
    NotPresent,

    /// `range_find` was given a lower bound that orders after the upper bound.
    #[error("invalid range: low bound is greater than high bound")]
    InvalidRange,

    /// `range_find` was given a bound that is not a member of the tree.
    #[error("range bound not in tree")]
    MissingBound,

    /// Reading a word list failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand for results carrying a [`BstError`].
pub type Result<T> = std::result::Result<T, BstError>;
