use int_bst::Tree;

use std::collections::{BTreeSet, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of keys in both.
fn do_ops(ops: &[Op], tree: &mut Tree, set: &mut BTreeSet<i32>) {
    for op in ops {
        match *op {
            Op::Insert(k) => {
                tree.insert(i32::from(k));
                set.insert(i32::from(k));
            }
            Op::Remove(k) => {
                tree.remove(i32::from(k));
                set.remove(&i32::from(k));
            }
        }
    }
}

fn build(xs: &[i8]) -> Tree {
    xs.iter().copied().map(i32::from).collect()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && tree.iter().eq(set.iter().copied())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.contains(i32::from(*x)))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(i32::from(*x)) && tree.find(i32::from(*x)).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    for delete in &deletes {
        tree.remove(i32::from(*delete));
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(i32::from(*x)))
        && still_present.iter().all(|x| tree.contains(i32::from(*x)))
}

#[quickcheck]
fn size_counts_distinct_keys(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let distinct: HashSet<_> = xs.iter().collect();

    tree.len() == distinct.len() && tree.is_empty() == xs.is_empty()
}

#[quickcheck]
fn iteration_is_strictly_increasing(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree, &mut BTreeSet::new());

    let keys: Vec<i32> = tree.iter().collect();
    keys.len() == tree.len() && keys.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn min_and_max_match_iteration(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree, &mut BTreeSet::new());

    tree.min() == tree.iter().next().unwrap_or(0)
        && tree.max() == tree.iter().last().unwrap_or(0)
        && tree.first() == tree.iter().next()
        && tree.last() == tree.iter().last()
}

#[quickcheck]
fn duplicate_insert_changes_nothing(xs: Vec<i8>, dup: usize) -> bool {
    let mut tree = build(&xs);
    let Some(x) = xs.get(dup % xs.len().max(1)) else {
        return true;
    };
    let len = tree.len();
    let root = tree.root_value();

    !tree.insert(i32::from(*x)) && tree.len() == len && tree.root_value() == root
}

#[quickcheck]
fn absent_remove_changes_nothing(xs: Vec<i8>, absent: i8) -> bool {
    let mut tree = build(&xs);
    if tree.contains(i32::from(absent)) {
        return true;
    }
    let before = tree.clone();

    !tree.remove(i32::from(absent)) && tree == before && tree.root_value() == before.root_value()
}

#[quickcheck]
fn clone_is_independent(xs: Vec<i8>, ops: Vec<Op>) -> bool {
    let original = build(&xs);
    let mut copy = original.clone();
    let same_len = copy.len() == original.len();

    do_ops(&ops, &mut copy, &mut BTreeSet::new());

    same_len && original == build(&xs)
}

#[quickcheck]
fn clone_survives_mutating_original(xs: Vec<i8>, ops: Vec<Op>) -> bool {
    let mut original = build(&xs);
    let copy = original.clone();

    do_ops(&ops, &mut original, &mut BTreeSet::new());

    copy == build(&xs) && copy.len() == build(&xs).len()
}

#[quickcheck]
fn take_leaves_source_empty(xs: Vec<i8>) -> bool {
    let mut source = build(&xs);
    let expected = build(&xs);

    let dest = source.take();

    source.is_empty() && source.len() == 0 && dest == expected
}

#[quickcheck]
fn into_iter_matches_iter(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let borrowed: Vec<i32> = tree.iter().collect();

    tree.into_iter().eq(borrowed)
}
