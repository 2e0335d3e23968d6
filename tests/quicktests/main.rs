//! Property tests for `OrderedTree`, checked against a sorted `Vec` model.

mod ordered_tree;
mod quick;

pub(crate) use quick::Op;
