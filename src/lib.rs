//! Ordered sets backed by binary search trees.
//!
//! Both flavours share one arena-backed tree in which every node keeps a handle to its parent.
//! What happens after each insertion or removal is decided by a `Balance` strategy chosen through
//! a type parameter:
//!
//! - [`bst::BstSet`] never restructures the tree.
//! - [`avl::AvlSet`] keeps it height-balanced with avl rotations.
//!
//! # Examples
//!
//! ```
//! use balanced_collections::avl::AvlSet;
//!
//! let mut set = AvlSet::new();
//! set.insert_all(vec![8, 6, 7, 5, 1, 3, 9, 4, 0, 2]);
//! set.remove_all(vec![3, 7, 0]);
//!
//! assert_eq!(set.to_vec(), vec![1, 2, 4, 5, 6, 8, 9]);
//! assert_eq!(set.find_max(), Ok(&9));
//! ```

mod arena;
mod error;
mod node;
mod set;
mod tree;

pub mod avl;
pub mod bst;

pub use self::error::{Error, Result};
pub use self::set::{TreeSet, TreeSetIntoIter, TreeSetIter};
pub use self::tree::Balance;
