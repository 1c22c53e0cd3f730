use crate::arena::{NodeArena, NodeId};
use crate::node::{Node, Side};
use log::debug;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

/// The slot a physically removed node used to occupy: its former parent and the side of that
/// parent it hung from. `None` when the removed node was the root.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Detached(pub Option<(NodeId, Side)>);

impl Detached {
    /// Returns the node nearest to the removal site that is still attached: whatever now fills
    /// the vacated slot, or the former parent if the slot is empty.
    pub fn resume_point<T>(self, tree: &RawTree<T>) -> Option<NodeId> {
        let (parent, side) = self.0?;
        Some(tree.nodes[parent].child(side).unwrap_or(parent))
    }
}

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Policy run after every structural mutation of the tree backing a `TreeSet<T, B>`.
///
/// This trait is sealed. The only strategies are `bst::Unbalanced` and `avl::Avl`, and it cannot
/// be implemented outside of this crate.
///
/// ```compile_fail
/// use balanced_collections::{Balance, TreeSet};
///
/// struct Custom;
///
/// impl Balance for Custom {}
///
/// let set: TreeSet<u32, Custom> = TreeSet::new();
/// ```
pub trait Balance: sealed::Sealed {
    /// Called after `inserted` has been attached as a new leaf.
    #[doc(hidden)]
    fn after_insert<T>(tree: &mut RawTree<T>, inserted: NodeId);

    /// Called after a node has been physically detached from the tree.
    #[doc(hidden)]
    fn after_remove<T>(tree: &mut RawTree<T>, detached: Detached);
}

/// Binary search tree whose nodes live in an arena and keep a handle to their parent.
///
/// This type only knows how to attach, find, and detach nodes. Keeping the shape balanced is
/// left to a `Balance` implementation driven by the owning set.
#[derive(Clone)]
pub struct RawTree<T> {
    pub nodes: NodeArena<Node<T>>,
    pub root: Option<NodeId>,
}

impl<T> RawTree<T> {
    pub fn new() -> Self {
        RawTree {
            nodes: NodeArena::new(),
            root: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        RawTree {
            nodes: NodeArena::with_capacity(capacity),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn value(&self, id: NodeId) -> &T {
        &self.nodes[id].value
    }

    /// Returns the parent of `id` and the side of the parent that `id` hangs from.
    pub fn parent_link(&self, id: NodeId) -> Option<(NodeId, Side)> {
        let parent = self.nodes[id].parent?;
        if self.nodes[parent].left == Some(id) {
            Some((parent, Side::Left))
        } else {
            Some((parent, Side::Right))
        }
    }

    /// Points the `side` slot of `parent` at `child` and fixes the child's back-reference.
    pub fn set_child(&mut self, parent: NodeId, side: Side, child: Option<NodeId>) {
        *self.nodes[parent].child_mut(side) = child;
        if let Some(child) = child {
            self.nodes[child].parent = Some(parent);
        }
    }

    /// Makes `replacement` take the place of `id` under `id`'s parent, or at the root.
    pub fn replace_in_parent(&mut self, id: NodeId, replacement: Option<NodeId>) {
        match self.parent_link(id) {
            Some((parent, side)) => self.set_child(parent, side, replacement),
            None => {
                self.root = replacement;
                if let Some(replacement) = replacement {
                    self.nodes[replacement].parent = None;
                }
            },
        }
    }

    /// Follows `side` children from `id` for as long as possible.
    pub fn extreme(&self, mut id: NodeId, side: Side) -> NodeId {
        while let Some(child) = self.nodes[id].child(side) {
            id = child;
        }
        id
    }

    pub fn first(&self) -> Option<NodeId> {
        self.root.map(|root| self.extreme(root, Side::Left))
    }

    pub fn last(&self) -> Option<NodeId> {
        self.root.map(|root| self.extreme(root, Side::Right))
    }

    /// Returns the in-order neighbour of `id` in direction `side`: the successor for
    /// `Side::Right` and the predecessor for `Side::Left`.
    pub fn neighbour(&self, id: NodeId, side: Side) -> Option<NodeId> {
        if let Some(child) = self.nodes[id].child(side) {
            return Some(self.extreme(child, side.opposite()));
        }
        let mut curr = id;
        while let Some((parent, parent_side)) = self.parent_link(curr) {
            if parent_side != side {
                return Some(parent);
            }
            curr = parent;
        }
        None
    }

    pub fn find<Q>(&self, value: &Q) -> Option<NodeId>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut curr = self.root;
        while let Some(id) = curr {
            let node = &self.nodes[id];
            curr = match value.cmp(node.value.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// Returns the node with the greatest value less than or equal to `value`.
    pub fn floor<Q>(&self, value: &Q) -> Option<NodeId>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut curr = self.root;
        let mut best = None;
        while let Some(id) = curr {
            let node = &self.nodes[id];
            match value.cmp(node.value.borrow()) {
                Ordering::Less => curr = node.left,
                Ordering::Greater => {
                    best = Some(id);
                    curr = node.right;
                },
                Ordering::Equal => return Some(id),
            }
        }
        best
    }

    /// Returns the node with the least value greater than or equal to `value`.
    pub fn ceil<Q>(&self, value: &Q) -> Option<NodeId>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut curr = self.root;
        let mut best = None;
        while let Some(id) = curr {
            let node = &self.nodes[id];
            match value.cmp(node.value.borrow()) {
                Ordering::Greater => curr = node.right,
                Ordering::Less => {
                    best = Some(id);
                    curr = node.left;
                },
                Ordering::Equal => return Some(id),
            }
        }
        best
    }

    /// Attaches `value` as a new leaf. Returns `None` and drops `value` if an equal value is
    /// already in the tree.
    pub fn insert(&mut self, value: T) -> Option<NodeId>
    where
        T: Ord,
    {
        let mut curr = match self.root {
            Some(root) => root,
            None => {
                let id = self.nodes.allocate(Node::new(value));
                self.root = Some(id);
                return Some(id);
            },
        };

        loop {
            let side = match value.cmp(&self.nodes[curr].value) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return None,
            };
            match self.nodes[curr].child(side) {
                Some(child) => curr = child,
                None => {
                    let id = self.nodes.allocate(Node::new(value));
                    self.set_child(curr, side, Some(id));
                    return Some(id);
                },
            }
        }
    }

    /// Removes the value stored at `id` and returns it together with the slot of the node that was
    /// physically detached.
    ///
    /// A node with two children is not detached itself: it takes its successor's value and the
    /// successor, which has no left child, is spliced out instead.
    pub fn remove_node(&mut self, id: NodeId) -> (T, Detached) {
        let target = match (self.nodes[id].left, self.nodes[id].right) {
            (Some(_), Some(right)) => self.extreme(right, Side::Left),
            _ => id,
        };

        let child = {
            let node = &self.nodes[target];
            node.left.or(node.right)
        };
        let detached = Detached(self.parent_link(target));
        self.replace_in_parent(target, child);

        let Node { value, .. } = self.nodes.free(target);
        if target == id {
            (value, detached)
        } else {
            (mem::replace(&mut self.nodes[id].value, value), detached)
        }
    }

    /// Counts the levels of the tree by walking it one level at a time.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<NodeId> = self.root.into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|&id| {
                    let node = &self.nodes[id];
                    node.left.into_iter().chain(node.right)
                })
                .collect();
        }
        height
    }

    pub fn clear(&mut self) {
        debug!("clearing tree with {} nodes", self.len());
        self.nodes.clear();
        self.root = None;
    }

    /// Panics unless ordering, parent links and the node count are consistent.
    #[cfg(test)]
    pub fn assert_structure(&self)
    where
        T: Ord,
    {
        if let Some(root) = self.root {
            assert_eq!(self.nodes[root].parent, None);
        }

        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        let mut count = 0;
        while let Some(id) = stack.pop() {
            count += 1;
            let node = &self.nodes[id];
            for child in node.left.into_iter().chain(node.right) {
                assert_eq!(self.nodes[child].parent, Some(id));
                stack.push(child);
            }
        }
        assert_eq!(count, self.len());

        let mut curr = self.first();
        let mut visited = 0;
        while let Some(id) = curr {
            visited += 1;
            let next = self.neighbour(id, Side::Right);
            if let Some(next) = next {
                assert!(self.nodes[id].value < self.nodes[next].value);
            }
            curr = next;
        }
        assert_eq!(visited, self.len());
    }
}
