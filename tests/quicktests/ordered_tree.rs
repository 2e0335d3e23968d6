use linked_bst::{BstError, OrderedTree};
use quickcheck_macros::quickcheck;

use crate::Op;

fn build(xs: &[i8]) -> OrderedTree<i8> {
    xs.iter().copied().collect()
}

fn sorted(xs: &[i8]) -> Vec<i8> {
    let mut xs = xs.to_vec();
    xs.sort();
    xs
}

/// Smallest height a tree of `n` items can have.
fn minimal_height(n: usize) -> isize {
    (usize::BITS - n.leading_zeros()) as isize - 1
}

/// Applies a set of operations to a tree and to a sorted vec standing in for it.
/// After every operation the tree must hold exactly what the vec holds.
fn do_ops(ops: &[Op<i8>], tree: &mut OrderedTree<i8>, model: &mut Vec<i8>) -> bool {
    for op in ops {
        match *op {
            Op::Add(x) => {
                tree.add(x);
                let at = model.partition_point(|y| *y <= x);
                model.insert(at, x);
            }
            Op::Remove(x) => match (tree.remove(&x), model.binary_search(&x)) {
                (Ok(removed), Ok(at)) if removed == x => {
                    model.remove(at);
                }
                (Err(BstError::NotPresent), Err(_)) => {}
                _ => return false,
            },
            Op::Rebalance => {
                let before = tree.height();
                tree.rebalance();
                if tree.height() > before || tree.height() != minimal_height(model.len()) {
                    return false;
                }
            }
            Op::Iter => {
                if !tree.inorder().eq(model.iter()) {
                    return false;
                }
            }
        }

        if tree.len() != model.len() || tree.iter().count() != model.len() {
            return false;
        }
    }

    tree.inorder().eq(model.iter())
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model)
}

#[quickcheck]
fn inorder_is_sorted(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    tree.inorder().copied().eq(sorted(&xs))
}

#[quickcheck]
fn every_traversal_visits_everything(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let expected = sorted(&xs);
    let visit = |items: Vec<&i8>| {
        let mut items: Vec<i8> = items.into_iter().copied().collect();
        items.sort();
        items == expected
    };

    visit(tree.iter().collect())
        && visit(tree.postorder().collect())
        && visit(tree.levelorder().collect())
        && (&tree).into_iter().count() == xs.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.find(x) == Some(x) && tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);

    nots.iter()
        .filter(|x| !xs.contains(*x))
        .all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn add_then_remove_round_trips(xs: Vec<i8>, x: i8) -> bool {
    if xs.contains(&x) {
        return true;
    }
    let mut tree = build(&xs);
    tree.add(x);

    tree.remove(&x).ok() == Some(x)
        && tree.len() == xs.len()
        && tree.inorder().copied().eq(sorted(&xs))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let mut still_present = xs;
    for delete in &deletes {
        let removed = tree.remove(delete).ok();
        match still_present.iter().position(|x| x == delete) {
            Some(pos) => {
                still_present.swap_remove(pos);
                if removed != Some(*delete) {
                    return false;
                }
            }
            None if removed.is_some() => return false,
            None => {}
        }
    }

    tree.inorder().copied().eq(sorted(&still_present))
}

#[quickcheck]
fn rebalance_keeps_items(xs: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let before = tree.height();
    tree.rebalance();

    tree.len() == xs.len()
        && tree.inorder().copied().eq(sorted(&xs))
        && tree.height() <= before
        && tree.height() == minimal_height(xs.len())
        && tree.is_balanced()
}

#[quickcheck]
fn lookups_survive_rebalance(xs: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    tree.rebalance();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn successor_and_predecessor_match_scan(xs: Vec<i8>, probe: i8) -> bool {
    let tree = build(&xs);
    let successor = xs.iter().filter(|x| **x > probe).min();
    let predecessor = xs.iter().filter(|x| **x < probe).max();

    tree.successor(&probe) == successor && tree.predecessor(&probe) == predecessor
}

#[quickcheck]
fn range_find_matches_sorted_slice(xs: Vec<i8>, a: usize, b: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let tree = build(&xs);
    let all = sorted(&xs);
    let (low, high) = {
        let (a, b) = (all[a % all.len()], all[b % all.len()]);
        (a.min(b), a.max(b))
    };

    let first = |item: i8| all.iter().position(|x| *x == item).unwrap();
    let expected = &all[first(low)..=first(high)];

    match tree.range_find(&low, &high) {
        Ok(found) => found.into_iter().eq(expected.iter()),
        Err(_) => false,
    }
}

#[quickcheck]
fn range_find_rejects_missing_bounds(xs: Vec<i8>, low: i8, high: i8) -> bool {
    let tree = build(&xs);
    let result = tree.range_find(&low, &high);

    if low > high {
        matches!(result, Err(BstError::InvalidRange))
    } else if !xs.contains(&low) || !xs.contains(&high) {
        matches!(result, Err(BstError::MissingBound))
    } else {
        result.is_ok()
    }
}

#[quickcheck]
fn display_has_a_line_per_item(xs: Vec<i8>) -> bool {
    build(&xs).to_string().lines().count() == xs.len()
}
