//! Plain binary search tree that never restructures itself.
//!
//! Values are attached where the descent ends and removals splice nodes out in place, so the
//! shape of the tree depends entirely on insertion order. Sorted input degrades it into a list.

use crate::arena::NodeId;
use crate::set::TreeSet;
use crate::tree::sealed::Sealed;
use crate::tree::{Balance, Detached, RawTree};

/// Balancing strategy that leaves the tree as the insertions and removals shaped it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Unbalanced;

impl Sealed for Unbalanced {}

impl Balance for Unbalanced {
    fn after_insert<T>(_tree: &mut RawTree<T>, _inserted: NodeId) {}

    fn after_remove<T>(_tree: &mut RawTree<T>, _detached: Detached) {}
}

/// An ordered set implemented using an unbalanced binary search tree.
///
/// # Examples
///
/// ```
/// use balanced_collections::bst::BstSet;
///
/// let mut set = BstSet::new();
/// set.insert_all(vec![8, 6, 7, 5, 1, 3, 9, 4, 0, 2]);
/// assert_eq!(set.height(), 6);
///
/// set.remove_all(vec![3, 7, 0]);
/// assert_eq!(set.to_vec(), vec![1, 2, 4, 5, 6, 8, 9]);
/// ```
pub type BstSet<T> = TreeSet<T, Unbalanced>;
