//! Level-order export for tree renderers.
//!
//! Positions are numbered as in a complete binary tree: the root is slot 1
//! and the children of slot `i` are `2i` and `2i + 1`. Within level `d` the
//! slot is stored at offset `i - 2^d`, so level `d` always has `2^d`
//! entries.

use smallvec::SmallVec;

use crate::node::Color;
use crate::node::NodeIdx;
use crate::query::Stack;
use crate::tree::RbTree;

/// One position in an exported level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot<K> {
    Node { key: K, color: Color },
    /// An absent child of a present node, emitted only when
    /// `show_null_leaves` is set.
    SyntheticNilLeaf,
    Empty,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LevelExport<K> {
    /// The tree has no root.
    NoTree,
    Levels(Vec<Vec<Slot<K>>>),
}

impl<K: Clone> RbTree<K> {
    /// Lay the tree out level by level.
    pub fn levels(&self) -> LevelExport<K> {
        let Some(root) = self.root else {
            return LevelExport::NoTree;
        };
        let show_nil = self.config.show_null_leaves;
        let depth = self.height() + usize::from(show_nil);
        let mut levels: Vec<Vec<Slot<K>>> =
            (0..depth).map(|d| vec![Slot::Empty; 1 << d]).collect();

        // (node, depth, 1-based complete-tree position)
        let mut stack: Stack<(NodeIdx, usize, usize)> = SmallVec::new();
        stack.push((root, 0, 1));
        while let Some((idx, d, pos)) = stack.pop() {
            let node = self.node(idx);
            levels[d][pos - (1 << d)] = Slot::Node {
                key: node.key.clone(),
                color: node.color,
            };
            for (offset, child) in [node.left, node.right].into_iter().enumerate() {
                let child_pos = pos * 2 + offset;
                match child {
                    Some(child) => stack.push((child, d + 1, child_pos)),
                    None if show_nil => {
                        levels[d + 1][child_pos - (1 << (d + 1))] = Slot::SyntheticNilLeaf;
                    }
                    None => {}
                }
            }
        }
        return LevelExport::Levels(levels);
    }
}
