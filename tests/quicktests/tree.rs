use binary_tree::Tree;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and to a sorted `Vec` holding the same multiset.
/// This way we can ensure that after a random smattering of inserts
/// and removes we hold the same values, duplicates included.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, model: &mut Vec<T>) -> bool
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(value) => {
                bst.insert(value.clone());
                let pos = model.partition_point(|x| x <= value);
                model.insert(pos, value.clone());
            }
            Op::Remove(value) => {
                let expected = match model.binary_search(value) {
                    Ok(pos) => {
                        model.remove(pos);
                        true
                    }
                    Err(_) => false,
                };
                if bst.remove(value) != expected {
                    return false;
                }
            }
        }
    }

    true
}

fn pre_order<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    let mut values = Vec::new();
    tree.pre_order_traversal(|v| values.push(v.clone()));
    values
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut model = Vec::new();

        do_ops(&ops, &mut tree, &mut model)
            && tree.len() == model.len()
            && tree.iter().eq(model.iter())
            && tree.check_invariants().is_ok()
    }

    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.contains(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        for delete in &deletes {
            // We may have inserted the same value multiple times - remove each one.
            while tree.remove(delete) {}
        }

        let mut still_present = xs;
        still_present.retain(|x| !deletes.contains(x));

        deletes.iter().all(|x| !tree.contains(x) && !tree.remove(x))
            && still_present.iter().all(|x| tree.contains(x))
            && tree.len() == still_present.len()
    }

    fn remove_takes_one_copy(xs: Vec<i8>, x: i8) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        tree.insert(x);
        let copies = xs.iter().filter(|v| **v == x).count() + 1;

        (0..copies).all(|_| tree.remove(&x)) && !tree.remove(&x) && !tree.contains(&x)
    }

    fn in_order_is_non_decreasing(xs: Vec<i16>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        let lazy: Vec<_> = tree.iter().copied().collect();
        let mut eager = Vec::new();
        tree.in_order_traversal(|v| eager.push(*v));

        lazy.windows(2).all(|pair| pair[0] <= pair[1]) && lazy == eager
    }

    fn count_matches_traversal(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut model = Vec::new();
        do_ops(&ops, &mut tree, &mut model);

        let mut visited = 0;
        tree.post_order_traversal(|_| visited += 1);

        visited == tree.len()
            && tree.iter().len() == tree.len()
            && tree.iter().count() == tree.len()
    }

    fn iterators_restart(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();

        tree.iter().eq(tree.iter()) && tree.iter().eq(&tree)
    }

    fn pre_order_reinsertion_keeps_shape(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        let rebuilt: Tree<_> = pre_order(&tree).into_iter().collect();

        pre_order(&rebuilt) == pre_order(&tree) && rebuilt.height() == tree.height()
    }

    fn in_order_reinsertion_degenerates(xs: HashSet<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        let chain: Tree<_> = tree.iter().copied().collect();

        // Every node only has a right child, so the pre-order is the sorted order too.
        chain.height() == chain.len()
            && pre_order(&chain) == tree.iter().copied().collect::<Vec<_>>()
    }
}

#[test]
fn balanced_insertion_order() {
    // Inserting the middle of each range first fills every level.
    let tree: Tree<_> = [8, 4, 12, 2, 6, 10, 14, 1, 3, 5, 7, 9, 11, 13, 15]
        .into_iter()
        .collect();
    let chain: Tree<_> = (1..=15).collect();

    assert_eq!(tree.height(), 4);
    assert_eq!(chain.height(), 15);
    assert!(tree.iter().eq(chain.iter()));
}

#[test]
fn concrete_removal_scenario() {
    let mut tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);

    assert!(tree.remove(&5));

    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 7, 8, 9]);
    assert!(!tree.contains(&5));
    assert_eq!(tree.len(), 6);
    assert_eq!(tree.min(), Some(&1));
    assert_eq!(tree.max(), Some(&9));
    assert_eq!(tree.check_invariants(), Ok(()));
}

#[test]
fn extend_and_debug() {
    let mut tree = Tree::new();
    tree.extend(["pear", "apple", "fig"]);
    tree.insert("apple");

    assert_eq!(format!("{:?}", tree), r#"{"apple", "apple", "fig", "pear"}"#);

    let mut lengths = Vec::new();
    for fruit in &tree {
        lengths.push(fruit.len());
    }
    assert_eq!(lengths, [5, 5, 3, 4]);
}
