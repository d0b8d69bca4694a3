//! Deletion.
//!
//! A node with two children is not unlinked itself: it trades keys with its
//! in-order successor, and the successor (which has at most one child) is
//! the node physically spliced out. When that node is black, the fixup runs
//! while it is still in place, treating its position as one black short.

use log::debug;
use log::trace;

use crate::node::Color;
use crate::node::NodeIdx;
use crate::tree::RbTree;

impl<K: Ord> RbTree<K> {
    /// Remove `key`. Returns false, leaving the tree untouched, if it is
    /// not stored.
    pub fn erase(&mut self, key: &K) -> bool {
        let Some(idx) = self.find_idx(key) else {
            debug!("erase: key not present, ignoring");
            return false;
        };
        self.erase_node(idx);
        return true;
    }
}

impl<K> RbTree<K> {
    fn erase_node(&mut self, idx: NodeIdx) {
        let node = self.node(idx);
        let victim = match (node.left, node.right) {
            (Some(_), Some(right)) => {
                let successor = self.min_idx(right);
                self.swap_keys(idx, successor);
                successor
            }
            _ => idx,
        };

        let victim_node = self.node(victim);
        let replacement = victim_node.left.or(victim_node.right);
        if victim_node.color.is_black() {
            self.erase_fixup(victim);
        }

        let parent = self.parent_of(victim);
        if let Some(replacement) = replacement {
            self.node_mut(replacement).parent = parent;
        }
        self.replace_child(parent, victim, replacement);
        if parent.is_none() {
            if let Some(root) = self.root {
                self.set_color(root, Color::Black);
            }
        }
        self.release(victim);
    }

    /// Repair the black deficit carried by the position of `node`.
    fn erase_fixup(&mut self, mut node: NodeIdx) {
        while Some(node) != self.root && self.node(node).color.is_black() {
            let Some(parent) = self.parent_of(node) else { break };
            let side = self.side_of(node, parent);
            let far = side.flip();

            // A black non-root node always has a sibling.
            let Some(mut sibling) = self.node(parent).child(far) else {
                debug_assert!(false, "black node {node} has no sibling");
                break;
            };

            if self.node(sibling).color.is_red() {
                trace!("erase fixup at {node}: red sibling {sibling}");
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                let Some(next) = self.node(parent).child(far) else {
                    debug_assert!(false, "red sibling of {node} had a missing child");
                    break;
                };
                sibling = next;
            }

            let near_child = self.node(sibling).child(side);
            let far_child = self.node(sibling).child(far);
            if !self.is_red(near_child) && !self.is_red(far_child) {
                trace!("erase fixup at {node}: black nephews, push deficit to {parent}");
                self.set_color(sibling, Color::Red);
                node = parent;
                continue;
            }

            if !self.is_red(far_child) {
                trace!("erase fixup at {node}: near nephew red, rotate at {sibling}");
                if let Some(near_child) = near_child {
                    self.set_color(near_child, Color::Black);
                }
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, far);
                let Some(next) = self.node(parent).child(far) else { break };
                sibling = next;
            }

            trace!("erase fixup at {node}: far nephew red, rotate at {parent}");
            self.set_color(sibling, self.node(parent).color);
            self.set_color(parent, Color::Black);
            if let Some(far_child) = self.node(sibling).child(far) {
                self.set_color(far_child, Color::Black);
            }
            self.rotate(parent, side);
            if let Some(root) = self.root {
                node = root;
            }
            break;
        }
        self.set_color(node, Color::Black);
    }
}
