use ordered_tree::{Error, OrderedTree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `HashSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of elements in both.
fn do_ops<E>(ops: &[Op<E>], bst: &mut OrderedTree<E>, set: &mut HashSet<E>)
where
    E: std::hash::Hash + Eq + Clone + Ord,
{
    for op in ops {
        match op {
            Op::Insert(e) => {
                bst.insert(e.clone());
                set.insert(e.clone());
            }
            Op::Remove(e) => {
                bst.remove(e);
                set.remove(e);
            }
        }
    }
}

fn tree_of<E: Ord + Clone>(xs: &[E]) -> OrderedTree<E> {
    let mut tree = OrderedTree::new();
    for x in xs {
        tree.insert(x.clone());
    }
    tree
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut set = HashSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && set.iter().all(|e| tree.contains(e))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = tree_of(&xs);
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn in_order_matches_sorted_dedup(xs: Vec<i32>) -> bool {
    let tree = tree_of(&xs);
    let sorted: BTreeSet<_> = xs.into_iter().collect();

    tree.in_order().eq(sorted.iter()) && tree.len() == sorted.len()
}

#[quickcheck]
fn duplicate_insert_changes_nothing(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = tree_of(&xs);
    tree.insert(x);
    let before = tree.to_vec();

    !tree.insert(x) && tree.to_vec() == before
}

#[quickcheck]
fn traversals_visit_every_element_once(xs: Vec<i16>) -> bool {
    let tree = tree_of(&xs);
    let expected: BTreeSet<_> = tree.in_order().collect();

    let pre: BTreeSet<_> = tree.pre_order().collect();
    let post: BTreeSet<_> = tree.post_order().collect();

    tree.pre_order().len() == tree.len()
        && tree.post_order().len() == tree.len()
        && pre == expected
        && post == expected
}

#[quickcheck]
fn pre_order_starts_and_post_order_ends_at_root(xs: Vec<i16>) -> bool {
    let tree = tree_of(&xs);

    match xs.first() {
        Some(root) => {
            tree.pre_order().next() == Some(root) && tree.post_order().last() == Some(root)
        }
        None => tree.pre_order().next().is_none(),
    }
}

#[quickcheck]
fn clone_is_equal_and_same_shape(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let cloned = tree.clone();

    cloned == tree && cloned.pre_order().eq(tree.pre_order())
}

#[quickcheck]
fn equality_ignores_insertion_order(xs: Vec<i8>) -> bool {
    let forwards = tree_of(&xs);
    let mut reversed = xs;
    reversed.reverse();
    let backwards = tree_of(&reversed);

    forwards == backwards
}

#[quickcheck]
fn first_and_last_are_extremes(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    match (xs.iter().min(), xs.iter().max()) {
        (Some(min), Some(max)) => tree.first() == Ok(min) && tree.last() == Ok(max),
        _ => tree.first() == Err(Error::Empty) && tree.last() == Err(Error::Empty),
    }
}
