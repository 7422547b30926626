use bstree::recursive::Tree;

use std::collections::HashSet;

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a sorted vector.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same multiset of keys as the model.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, model: &mut Vec<K>)
where
    K: Ord + Copy,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(*k);
                let pos = model.binary_search(k).unwrap_or_else(|pos| pos);
                model.insert(pos, *k);
            }
            Op::Remove(k) => match model.binary_search(k) {
                Ok(pos) => {
                    model.remove(pos);
                    assert!(bst.delete(k));
                }
                Err(_) => assert!(!bst.delete(k)),
            },
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model);
    tree.len() == model.len() && tree.inorder() == model.iter().collect::<Vec<_>>()
}

#[quickcheck]
fn inorder_is_sorted(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    let inorder = tree.inorder();
    inorder.len() == xs.len() && inorder.windows(2).all(|pair| pair[0] <= pair[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    // Keys can be inserted multiple times - delete until each is gone.
    for delete in &deletes {
        while tree.delete(delete) {}
    }

    let deletes: HashSet<_> = deletes.into_iter().collect();
    deletes.iter().all(|x| !tree.contains(x))
        && xs
            .iter()
            .filter(|x| !deletes.contains(x))
            .all(|x| tree.contains(x))
}

#[quickcheck]
fn min_max_bracket_the_keys(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    match (tree.min(), tree.max()) {
        (None, None) => xs.is_empty(),
        (Some(min), Some(max)) => {
            Some(min) == xs.iter().min() && Some(max) == xs.iter().max()
        }
        _ => false,
    }
}

#[quickcheck]
fn height_brackets_the_size(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    let n = tree.len() as isize;
    let height = tree.height();
    if n == 0 {
        return height == -1;
    }

    // At best a complete tree, at worst a chain.
    let floor_log2 = (usize::BITS - 1 - (n as usize).leading_zeros()) as isize;
    floor_log2 <= height && height <= n - 1
}
