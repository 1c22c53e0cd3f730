use crate::arena::NodeId;

/// Which child slot of its parent a node occupies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A struct representing a vertex of a binary search tree.
///
/// `height` is only maintained by balancing strategies that need it; the unbalanced tree leaves it
/// at zero.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub value: T,
    pub parent: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    pub height: i32,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node {
            value,
            parent: None,
            left: None,
            right: None,
            height: 0,
        }
    }

    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}
