//! Insertion: plain BST descent, a red leaf attached at the bottom, then
//! recoloring and rotations on the way back up until no red node has a red
//! parent.

use std::cmp::Ordering;

use log::debug;
use log::trace;

use crate::node::Color;
use crate::node::Node;
use crate::node::NodeIdx;
use crate::node::Side;
use crate::tree::RbTree;

impl<K: Ord> RbTree<K> {
    /// Insert `key`. Returns false, leaving the tree untouched, if an equal
    /// key is already stored.
    pub fn insert(&mut self, key: K) -> bool {
        let mut parent = None;
        let mut side = Side::Left;
        let mut cursor = self.root;
        while let Some(idx) = cursor {
            let node = self.node(idx);
            side = match key.cmp(&node.key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => {
                    debug!("insert: key already present at {idx}, ignoring");
                    return false;
                }
            };
            parent = Some(idx);
            cursor = node.child(side);
        }

        let idx = self.alloc(Node::leaf(key, parent));
        match parent {
            None => self.root = Some(idx),
            Some(parent) => *self.node_mut(parent).child_mut(side) = Some(idx),
        }
        self.insert_fixup(idx);
        return true;
    }

    /// Restore the invariants after `node` was attached as a red leaf.
    fn insert_fixup(&mut self, mut node: NodeIdx) {
        loop {
            let Some(mut parent) = self.parent_of(node) else { break };
            if self.node(parent).color.is_black() {
                break;
            }
            // A red parent is never the root, so the grandparent exists.
            let Some(grand) = self.parent_of(parent) else { break };
            let side = self.side_of(parent, grand);
            let uncle = self.node(grand).child(side.flip());

            if let Some(uncle) = uncle.filter(|&uncle| self.node(uncle).color.is_red()) {
                trace!("insert fixup at {node}: red uncle {uncle}, recolor");
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grand, Color::Red);
                node = grand;
                continue;
            }

            if self.node(parent).child(side.flip()) == Some(node) {
                trace!("insert fixup at {node}: inner grandchild, rotate at {parent}");
                self.rotate(parent, side);
                node = parent;
                let Some(lifted) = self.parent_of(node) else { break };
                parent = lifted;
            }
            trace!("insert fixup at {node}: outer grandchild, rotate at {grand}");
            self.set_color(parent, Color::Black);
            self.set_color(grand, Color::Red);
            self.rotate(grand, side.flip());
            break;
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }
}
