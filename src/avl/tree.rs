use crate::arena::NodeId;
use crate::node::Side;
use crate::tree::RawTree;
use log::trace;
use std::cmp;

/// Height of an optional subtree, where an empty subtree counts as `-1`.
pub fn height<T>(tree: &RawTree<T>, id: Option<NodeId>) -> i32 {
    match id {
        None => -1,
        Some(id) => tree.nodes[id].height,
    }
}

pub fn update<T>(tree: &mut RawTree<T>, id: NodeId) {
    let (left, right) = (tree.nodes[id].left, tree.nodes[id].right);
    tree.nodes[id].height = cmp::max(height(tree, left), height(tree, right)) + 1;
}

/// Height of the right subtree minus height of the left subtree.
pub fn imbalance<T>(tree: &RawTree<T>, id: NodeId) -> i32 {
    let node = &tree.nodes[id];
    height(tree, node.right) - height(tree, node.left)
}

fn update_to_root<T>(tree: &mut RawTree<T>, id: NodeId) {
    let mut curr = Some(id);
    while let Some(id) = curr {
        update(tree, id);
        curr = tree.nodes[id].parent;
    }
}

//      p              p
//      |              |
//      x              y
//     / \            / \
//    a   y    =>    x   c
//       / \        / \
//      t   c      a   t
//
// `side` is the direction `x` moves in; the child on the opposite side is lifted into its place.
fn rotate<T>(tree: &mut RawTree<T>, x: NodeId, side: Side) {
    let lifted = side.opposite();
    let y = match tree.nodes[x].child(lifted) {
        Some(y) => y,
        None => panic!("Error: rotating {:?} around a missing {:?} child.", side, lifted),
    };
    let t = tree.nodes[y].child(side);

    trace!("rotating {:?} at {:?}", side, x);
    tree.replace_in_parent(x, Some(y));
    tree.set_child(y, side, Some(x));
    tree.set_child(x, lifted, t);

    update_to_root(tree, x);
}

pub fn rotate_left<T>(tree: &mut RawTree<T>, x: NodeId) {
    rotate(tree, x, Side::Left);
}

pub fn rotate_right<T>(tree: &mut RawTree<T>, x: NodeId) {
    rotate(tree, x, Side::Right);
}

/// Walks from `id` to the root, refreshing heights and rotating every node whose imbalance falls
/// outside `[-1, 1]`.
pub fn rebalance<T>(tree: &mut RawTree<T>, id: NodeId) {
    let mut curr = Some(id);
    while let Some(id) = curr {
        update(tree, id);

        let factor = imbalance(tree, id);
        if factor >= 2 {
            let right = tree.nodes[id].right.expect("Expected right child node to be `Some`.");
            let (inner, outer) = (tree.nodes[right].left, tree.nodes[right].right);
            if height(tree, outer) < height(tree, inner) {
                trace!("right-left case at {:?}", id);
                rotate_right(tree, right);
            }
            rotate_left(tree, id);
        } else if factor <= -2 {
            let left = tree.nodes[id].left.expect("Expected left child node to be `Some`.");
            let (inner, outer) = (tree.nodes[left].right, tree.nodes[left].left);
            if height(tree, outer) < height(tree, inner) {
                trace!("left-right case at {:?}", id);
                rotate_left(tree, left);
            }
            rotate_right(tree, id);
        }

        curr = tree.nodes[id].parent;
    }
}

/// Panics unless every node caches its true height and is balanced. Returns the height of the
/// tree in edges.
#[cfg(test)]
pub fn assert_balanced<T>(tree: &RawTree<T>) -> i32 {
    fn check<T>(tree: &RawTree<T>, id: Option<NodeId>) -> i32 {
        match id {
            None => -1,
            Some(id) => {
                let node = &tree.nodes[id];
                let left = check(tree, node.left);
                let right = check(tree, node.right);
                assert_eq!(node.height, cmp::max(left, right) + 1);
                assert!((right - left).abs() <= 1);
                node.height
            },
        }
    }
    check(tree, tree.root)
}
