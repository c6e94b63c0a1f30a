use pretty_bst::Tree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Keeps the first occurrence of every key, preserving order.
fn unique(xs: Vec<i8>) -> Vec<i8> {
    let mut seen = HashSet::new();
    xs.into_iter().filter(|x| seen.insert(*x)).collect()
}

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same keys in both, in the same order.
/// Keys already present aren't inserted again since duplicates are
/// not something the tree promises anything about.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, set: &mut BTreeSet<i8>) -> bool {
    for op in ops {
        match op {
            Op::Insert(k) => {
                if set.insert(*k) {
                    tree.insert(*k);
                }
            }
            Op::Delete(k) => {
                let expected = set.take(k);
                if tree.delete(k) != expected {
                    return false;
                }
            }
            Op::Traverse => {
                if !tree.iter().eq(set.iter()) {
                    return false;
                }
            }
        }
    }

    tree.len() == set.len()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set) && tree.iter().eq(set.iter())
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs.clone());
    let keys: Vec<_> = tree.iter().copied().collect();

    let mut sorted = xs;
    sorted.sort_unstable();
    keys == sorted
}

#[quickcheck]
fn every_traversal_visits_every_key(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs.clone());
    let sorted = |keys: Vec<&i8>| {
        let mut keys: Vec<i8> = keys.into_iter().copied().collect();
        keys.sort_unstable();
        keys
    };

    let mut expected = xs;
    expected.sort_unstable();
    sorted(tree.pre_order_iter().collect()) == expected
        && sorted(tree.post_order_iter().collect()) == expected
        && sorted(tree.level_order_iter().collect()) == expected
        && tree.len() == expected.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs.clone());

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn delete_absent_is_a_no_op(xs: Vec<i8>, missing: i8) -> bool {
    let xs: Vec<_> = xs.into_iter().filter(|x| *x != missing).collect();
    let mut tree = Tree::build(xs);
    let before = (
        tree.in_order(),
        tree.pre_order(),
        tree.post_order(),
        tree.level_order(),
        tree.render(),
    );

    let deleted = tree.delete(&missing);
    let after = (
        tree.in_order(),
        tree.pre_order(),
        tree.post_order(),
        tree.level_order(),
        tree.render(),
    );

    deleted.is_none() && before == after
}

#[quickcheck]
fn delete_present_removes_only_that_key(xs: Vec<i8>, pick: usize) -> bool {
    let xs = unique(xs);
    if xs.is_empty() {
        return true;
    }
    let key = xs[pick % xs.len()];
    let mut tree = Tree::build(xs.clone());

    let deleted = tree.delete(&key);

    let mut expected: Vec<_> = xs.into_iter().filter(|x| *x != key).collect();
    expected.sort_unstable();
    deleted == Some(key)
        && !tree.contains(&key)
        && tree.iter().copied().collect::<Vec<_>>() == expected
        && tree.len() == expected.len()
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::build(xs.clone());
    for delete in &deletes {
        // We may have inserted the same key multiple times - delete each one.
        while tree.delete(delete).is_some() {}
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
        && tree.len() == still_present.len()
}

#[quickcheck]
fn deleting_a_full_root_promotes_its_successor(xs: Vec<i8>) -> bool {
    let mut tree = Tree::build(unique(xs));
    let (root_key, successor) = match tree.root() {
        Some(root) => match (root.left(), root.right()) {
            (Some(_), Some(right)) => (*root.key(), *right.min_key()),
            _ => return true,
        },
        None => return true,
    };

    tree.delete(&root_key);

    let root = tree.root().unwrap();
    *root.key() == successor && root.right().map_or(true, |right| *right.min_key() > successor)
}

#[quickcheck]
fn traversals_are_repeatable(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs);

    tree.in_order() == tree.in_order()
        && tree.pre_order() == tree.pre_order()
        && tree.post_order() == tree.post_order()
        && tree.level_order() == tree.level_order()
        && tree.render() == tree.render()
}

#[quickcheck]
fn rebuilding_from_pre_order_keeps_the_shape(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs);
    let rebuilt = Tree::build(tree.pre_order_iter().copied());

    rebuilt.render() == tree.render()
}

#[quickcheck]
fn clone_keeps_the_shape(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::build(xs);
    for delete in &deletes {
        tree.delete(delete);
    }
    let copy = tree.clone();

    copy.render() == tree.render() && copy.len() == tree.len()
}

#[quickcheck]
fn render_has_a_line_per_key(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs);

    tree.render().lines().count() == tree.len()
}
