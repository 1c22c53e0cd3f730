//! Slab of tree nodes addressed by copyable handles.

use std::mem;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// A handle to a slot in a `NodeArena<T>`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeId(usize);

#[derive(Clone)]
enum Slot<T> {
    Occupied(T),
    Vacant(Option<NodeId>),
}

/// A growable arena that only stores a single type of object.
///
/// Freed slots are threaded into a free list and handed out again by later allocations, so a
/// handle stays valid until the object it addresses is freed. The arena owns every object, which
/// lets the tree keep parent back-references as plain handles instead of pointers.
#[derive(Clone)]
pub struct NodeArena<T> {
    head: Option<NodeId>,
    slots: Vec<Slot<T>>,
    len: usize,
}

impl<T> NodeArena<T> {
    pub fn new() -> Self {
        NodeArena {
            head: None,
            slots: Vec::new(),
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        NodeArena {
            head: None,
            slots: Vec::with_capacity(capacity),
            len: 0,
        }
    }

    /// Returns the number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Stores an object in the arena and returns the handle of its slot.
    pub fn allocate(&mut self, value: T) -> NodeId {
        self.len += 1;
        match self.head.take() {
            None => {
                self.slots.push(Slot::Occupied(value));
                NodeId(self.slots.len() - 1)
            },
            Some(id) => {
                let vacant_slot = mem::replace(&mut self.slots[id.0], Slot::Occupied(value));
                match vacant_slot {
                    Slot::Vacant(next) => {
                        self.head = next;
                        id
                    },
                    Slot::Occupied(_) => panic!("Error: free list points to an occupied slot."),
                }
            },
        }
    }

    /// Releases the slot of `id` and returns the object it held.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of bounds or addresses a vacant slot.
    pub fn free(&mut self, id: NodeId) -> T {
        match self.slots.get(id.0) {
            None => panic!("Error: attempting to free invalid slot."),
            Some(Slot::Vacant(_)) => panic!("Error: attempting to free vacant slot."),
            Some(Slot::Occupied(_)) => {},
        }
        match mem::replace(&mut self.slots[id.0], Slot::Vacant(self.head)) {
            Slot::Occupied(value) => {
                self.len -= 1;
                self.head = Some(id);
                value
            },
            Slot::Vacant(_) => unreachable!(),
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Drops every object and forgets all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.len = 0;
    }
}

impl<T> Index<NodeId> for NodeArena<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.get(id).expect("Error: node handle out of bounds.")
    }
}

impl<T> IndexMut<NodeId> for NodeArena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        self.get_mut(id).expect("Error: node handle out of bounds.")
    }
}
