//! Full-tree invariant check.
//!
//! Walks every node once and confirms search order, the red rules, equal
//! black-height below every node, and that parent links agree with child
//! links. Used by the tests after every mutation; cost is O(n).

use rustc_hash::FxHashSet;

use crate::error::Violation;
use crate::node::NodeIdx;
use crate::tree::RbTree;

impl<K: Ord> RbTree<K> {
    /// Check every red-black and search-order invariant. On success returns
    /// the number of black nodes on each root-to-leaf path.
    pub fn validate(&self) -> Result<usize, Violation> {
        let Some(root) = self.root else {
            if !self.nodes.is_empty() {
                return Err(Violation::Unreachable { reachable: 0, stored: self.nodes.len() });
            }
            return Ok(0);
        };
        if self.node(root).parent.is_some() {
            return Err(Violation::BrokenParentLink { node: root });
        }
        if self.node(root).color.is_red() {
            return Err(Violation::RedRoot);
        }

        let mut seen = FxHashSet::default();
        let black_height = self.validate_subtree(root, None, None, &mut seen)?;
        if seen.len() != self.nodes.len() {
            return Err(Violation::Unreachable {
                reachable: seen.len(),
                stored: self.nodes.len(),
            });
        }
        return Ok(black_height);
    }

    /// Keys in the subtree at `idx` must lie strictly between `lower` and
    /// `upper`.
    fn validate_subtree(
        &self,
        idx: NodeIdx,
        lower: Option<&K>,
        upper: Option<&K>,
        seen: &mut FxHashSet<NodeIdx>,
    ) -> Result<usize, Violation> {
        if !seen.insert(idx) {
            return Err(Violation::SharedNode { node: idx });
        }
        let node = self.node(idx);
        let above_lower = lower.is_none_or(|lower| node.key > *lower);
        let below_upper = upper.is_none_or(|upper| node.key < *upper);
        if !above_lower || !below_upper {
            return Err(Violation::OrderViolation { node: idx });
        }

        let mut heights = [0; 2];
        for (i, child) in [node.left, node.right].into_iter().enumerate() {
            let Some(child) = child else { continue };
            if self.node(child).parent != Some(idx) {
                return Err(Violation::BrokenParentLink { node: child });
            }
            if node.color.is_red() && self.node(child).color.is_red() {
                return Err(Violation::RedRedEdge { node: idx });
            }
            let (lo, hi) = if i == 0 { (lower, Some(&node.key)) } else { (Some(&node.key), upper) };
            heights[i] = self.validate_subtree(child, lo, hi, seen)?;
        }

        if heights[0] != heights[1] {
            return Err(Violation::BlackHeightMismatch {
                node: idx,
                left: heights[0],
                right: heights[1],
            });
        }
        return Ok(heights[0] + usize::from(node.color.is_black()));
    }
}
