//! Rotation primitives.
//!
//! A rotation around `p` lifts one of its children into `p`'s place and
//! hangs `p` beneath it, keeping the in-order key sequence intact. Three
//! link pairs change: the crossover subtree, the lifted child's parent, and
//! the slot that used to hold `p` (a child slot of `p`'s parent, or the
//! root).

use log::trace;

use crate::node::NodeIdx;
use crate::node::Side;
use crate::tree::RbTree;

impl<K> RbTree<K> {
    /// Rotate so that `p` moves down towards `side`. The child on the
    /// opposite side must be present; otherwise this is a no-op.
    pub(crate) fn rotate(&mut self, p: NodeIdx, side: Side) {
        let Some(c) = self.node(p).child(side.flip()) else {
            debug_assert!(false, "rotation pivot {p} has no {:?} child", side.flip());
            return;
        };
        trace!("rotate {side:?} at {p} (lifting {c})");

        let crossover = self.node(c).child(side);
        *self.node_mut(p).child_mut(side.flip()) = crossover;
        if let Some(crossover) = crossover {
            self.node_mut(crossover).parent = Some(p);
        }

        let grand = self.parent_of(p);
        self.node_mut(c).parent = grand;
        self.replace_child(grand, p, Some(c));

        *self.node_mut(c).child_mut(side) = Some(p);
        self.node_mut(p).parent = Some(c);
    }

    /// Lift `p`'s right child into `p`'s place.
    #[inline]
    #[allow(dead_code)]
    pub(crate) fn left_rotate(&mut self, p: NodeIdx) {
        self.rotate(p, Side::Left);
    }

    /// Lift `p`'s left child into `p`'s place.
    #[inline]
    #[allow(dead_code)]
    pub(crate) fn right_rotate(&mut self, p: NodeIdx) {
        self.rotate(p, Side::Right);
    }
}

#[cfg(test)]
mod tests {
    use crate::node::Color;
    use crate::node::Node;
    use crate::tree::RbTree;

    /// Builds `2(1, 4(3, 5))` by hand, all black, without any balancing.
    fn right_heavy() -> RbTree<i32> {
        let mut tree = RbTree::new();
        let two = tree.alloc(Node::leaf(2, None));
        let one = tree.alloc(Node::leaf(1, Some(two)));
        let four = tree.alloc(Node::leaf(4, Some(two)));
        let three = tree.alloc(Node::leaf(3, Some(four)));
        let five = tree.alloc(Node::leaf(5, Some(four)));
        tree.node_mut(two).left = Some(one);
        tree.node_mut(two).right = Some(four);
        tree.node_mut(four).left = Some(three);
        tree.node_mut(four).right = Some(five);
        for idx in [two, one, four, three, five] {
            tree.node_mut(idx).color = Color::Black;
        }
        tree.root = Some(two);
        return tree;
    }

    fn keys_in_order(tree: &RbTree<i32>) -> Vec<i32> {
        return tree.iter().copied().collect();
    }

    #[test]
    fn left_rotate_at_root() {
        let mut tree = right_heavy();
        let before = keys_in_order(&tree);
        tree.left_rotate(0);

        let root = tree.root().unwrap();
        assert_eq!(*root.key(), 4);
        assert!(root.parent().is_none());
        let left = root.left().unwrap();
        assert_eq!(*left.key(), 2);
        assert_eq!(*left.right().unwrap().key(), 3);
        assert_eq!(*left.right().unwrap().parent().unwrap().key(), 2);
        assert_eq!(*root.right().unwrap().key(), 5);
        assert_eq!(keys_in_order(&tree), before);
    }

    #[test]
    fn right_rotate_undoes_left_rotate() {
        let mut tree = right_heavy();
        tree.left_rotate(0);
        let four = tree.root.unwrap();
        tree.right_rotate(four);

        let root = tree.root().unwrap();
        assert_eq!(*root.key(), 2);
        assert_eq!(*root.left().unwrap().key(), 1);
        let right = root.right().unwrap();
        assert_eq!(*right.key(), 4);
        assert_eq!(*right.left().unwrap().key(), 3);
        assert_eq!(*right.right().unwrap().key(), 5);
    }

    #[test]
    fn rotate_below_root_rewrites_parent_slot() {
        let mut tree = right_heavy();
        let four = tree.node(0).right.unwrap();
        tree.right_rotate(four);

        let root = tree.root().unwrap();
        assert_eq!(*root.key(), 2);
        let three = root.right().unwrap();
        assert_eq!(*three.key(), 3);
        assert_eq!(*three.parent().unwrap().key(), 2);
        assert_eq!(*three.right().unwrap().key(), 4);
        assert!(three.left().is_none());
        assert_eq!(keys_in_order(&tree), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn rotate_without_child_is_noop() {
        let mut tree = right_heavy();
        let one = tree.node(0).left.unwrap();
        tree.left_rotate(one);
        assert_eq!(*tree.root().unwrap().key(), 2);
        assert_eq!(keys_in_order(&tree), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "rotation pivot")]
    fn rotate_without_child_asserts_in_debug() {
        let mut tree = right_heavy();
        let one = tree.node(0).left.unwrap();
        tree.left_rotate(one);
    }
}
