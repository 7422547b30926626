use bstree::{iterative, recursive};

use quickcheck_macros::quickcheck;

use crate::Op;

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = iterative::Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.contains(x))
}

/// The two flavors must be indistinguishable through the public API, no
/// matter what sequence of inserts and deletes they're fed. The recursive
/// flavor is held to the sorted-vector model next door, so agreement here
/// carries those guarantees over to the iterative flavor.
#[quickcheck]
fn flavors_agree(ops: Vec<Op<i8>>) -> bool {
    let mut looped = iterative::Tree::new();
    let mut recursed = recursive::Tree::new();

    for op in &ops {
        match op {
            Op::Insert(k) => {
                looped.insert(*k);
                recursed.insert(*k);
            }
            Op::Remove(k) => {
                assert_eq!(looped.delete(k), recursed.delete(k));
            }
        }
    }

    looped.len() == recursed.len()
        && looped.height() == recursed.height()
        && looped.min() == recursed.min()
        && looped.max() == recursed.max()
        && looped.inorder() == recursed.inorder()
        && looped.preorder() == recursed.preorder()
        && looped.postorder() == recursed.postorder()
        && looped.level_order() == recursed.level_order()
}
