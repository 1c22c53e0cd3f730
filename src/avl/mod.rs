//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.
//!
//! Every node caches the height of its subtree. After an insertion the tree is repaired by walking
//! from the new leaf up to the root; after a removal the walk starts at the slot the detached node
//! left behind. Any node whose imbalance reaches two is fixed with a single or double rotation.

mod tree;

use crate::arena::NodeId;
use crate::set::TreeSet;
use crate::tree::sealed::Sealed;
use crate::tree::{Balance, Detached, RawTree};

/// Balancing strategy that keeps a tree height-balanced with AVL rotations.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Avl;

impl Sealed for Avl {}

impl Balance for Avl {
    fn after_insert<T>(tree: &mut RawTree<T>, inserted: NodeId) {
        tree::rebalance(tree, inserted);
    }

    fn after_remove<T>(tree: &mut RawTree<T>, detached: Detached) {
        if let Some(id) = detached.resume_point(tree) {
            tree::rebalance(tree, id);
        }
    }
}

/// An ordered set implemented using an avl tree.
///
/// # Examples
///
/// ```
/// use balanced_collections::avl::AvlSet;
///
/// let mut set = AvlSet::new();
/// assert!(set.insert_all(vec![8, 6, 7, 5, 1, 3, 9, 4, 0, 2]));
///
/// assert_eq!(set.len(), 10);
/// assert_eq!(set.height(), 4);
/// assert_eq!(set.find_min(), Ok(&0));
///
/// assert!(set.remove(&3));
/// assert!(!set.remove(&3));
/// ```
pub type AvlSet<T> = TreeSet<T, Avl>;

#[cfg(test)]
mod tests {
    use super::tree::assert_balanced;
    use super::AvlSet;
    use crate::error::Error;

    const REFERENCE: [u32; 10] = [8, 6, 7, 5, 1, 3, 9, 4, 0, 2];

    fn assert_avl(set: &AvlSet<u32>) {
        set.tree.assert_structure();
        let edges = assert_balanced(&set.tree);
        assert_eq!(set.height() as i32, edges + 1);
    }

    #[test]
    fn test_insert_reference() {
        let mut set = AvlSet::new();
        for &value in REFERENCE.iter() {
            assert!(set.insert(value));
            assert_avl(&set);
        }
        assert_eq!(set.to_vec(), (0..10).collect::<Vec<u32>>());
        assert_eq!(set.len(), 10);
        assert_eq!(set.find_min(), Ok(&0));
        assert_eq!(set.find_max(), Ok(&9));
    }

    #[test]
    fn test_remove_reference() {
        let mut set: AvlSet<u32> = REFERENCE.iter().cloned().collect();
        for value in &[3, 7, 0] {
            assert!(set.remove(value));
            assert_avl(&set);
        }
        assert_eq!(set.to_vec(), vec![1, 2, 4, 5, 6, 8, 9]);
        assert_eq!(set.len(), 7);
    }

    #[test]
    fn test_ascending_insert_stays_balanced() {
        let mut set = AvlSet::new();
        for value in 0..1024 {
            set.insert(value);
        }
        assert_avl(&set);
        assert_eq!(set.height(), 11);
    }

    #[test]
    fn test_remove_root_until_empty() {
        let mut set: AvlSet<u32> = (0..100).collect();
        while let Some(root) = set.tree.root {
            let value = *set.tree.value(root);
            assert!(set.remove(&value));
            assert_avl(&set);
        }
        assert!(set.is_empty());
        assert_eq!(set.remove_min(), Err(Error::EmptyTree));
    }

    #[test]
    fn test_remove_min_max_rebalances() {
        let mut set: AvlSet<u32> = (0..64).collect();
        for expected in 0..32 {
            assert_eq!(set.remove_min(), Ok(expected));
            assert_avl(&set);
        }
        for expected in (32..64).rev() {
            assert_eq!(set.remove_max(), Ok(expected));
            assert_avl(&set);
        }
        assert!(set.is_empty());
    }

    #[test]
    fn test_interleaved_operations() {
        let mut set = AvlSet::new();
        for round in 0..20u32 {
            for value in 0..50 {
                set.insert((value * 37 + round * 11) % 101);
            }
            for value in 0..25 {
                set.remove(&((value * 53 + round * 7) % 101));
            }
            assert_avl(&set);
        }
    }
}
