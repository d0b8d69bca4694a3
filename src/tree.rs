//! The tree itself: owner of the node arena and the root link.
//!
//! Nodes are stored in a dense `Vec` and refer to each other by index.
//! Releasing a node swap-removes it from the arena, so the node that used
//! to be last takes over the freed index and everything pointing at it is
//! relinked. Indices are therefore stable only between mutations.

use log::debug;

use crate::config::TreeConfig;
use crate::node::Color;
use crate::node::Node;
use crate::node::NodeIdx;
use crate::node::Side;

/// A red-black tree of unique, totally ordered keys.
#[derive(Clone, Debug)]
pub struct RbTree<K> {
    pub(crate) nodes: Vec<Node<K>>,
    pub(crate) root: Option<NodeIdx>,
    pub(crate) config: TreeConfig,
}

impl<K> RbTree<K> {
    /// Create an empty tree with the default configuration.
    pub fn new() -> RbTree<K> {
        return RbTree::with_config(TreeConfig::default());
    }

    pub fn with_config(config: TreeConfig) -> RbTree<K> {
        return RbTree {
            nodes: Vec::new(),
            root: None,
            config,
        };
    }

    /// Number of keys stored.
    pub fn len(&self) -> usize {
        return self.nodes.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.root.is_none();
    }

    pub fn config(&self) -> &TreeConfig {
        return &self.config;
    }

    /// Toggle synthetic nil leaves in the level-order export.
    pub fn set_show_null_leaves(&mut self, show: bool) {
        self.config.show_null_leaves = show;
    }

    /// Release every node. The tree becomes empty.
    pub fn clear(&mut self) {
        debug!("clear: releasing {} nodes", self.nodes.len());
        self.nodes.clear();
        self.root = None;
    }

    // -------------------------------------------------------------------------
    // Arena helpers
    // -------------------------------------------------------------------------

    #[inline(always)]
    pub(crate) fn node(&self, idx: NodeIdx) -> &Node<K> {
        return &self.nodes[idx as usize];
    }

    #[inline(always)]
    pub(crate) fn node_mut(&mut self, idx: NodeIdx) -> &mut Node<K> {
        return &mut self.nodes[idx as usize];
    }

    #[inline(always)]
    pub(crate) fn parent_of(&self, idx: NodeIdx) -> Option<NodeIdx> {
        return self.node(idx).parent;
    }

    #[inline(always)]
    pub(crate) fn set_color(&mut self, idx: NodeIdx, color: Color) {
        self.node_mut(idx).color = color;
    }

    /// Absent children count as black.
    #[inline(always)]
    pub(crate) fn is_red(&self, idx: Option<NodeIdx>) -> bool {
        return match idx {
            Some(idx) => self.node(idx).color.is_red(),
            None => false,
        };
    }

    /// Which side of `parent` the node `child` hangs from.
    #[inline(always)]
    pub(crate) fn side_of(&self, child: NodeIdx, parent: NodeIdx) -> Side {
        if self.node(parent).left == Some(child) {
            return Side::Left;
        }
        return Side::Right;
    }

    /// Point whichever link referred to `old` (a child slot of `parent`, or
    /// the root when `parent` is None) at `new` instead.
    pub(crate) fn replace_child(
        &mut self,
        parent: Option<NodeIdx>,
        old: NodeIdx,
        new: Option<NodeIdx>,
    ) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let side = self.side_of(old, parent);
                *self.node_mut(parent).child_mut(side) = new;
            }
        }
    }

    /// Move a node into the arena and return its index.
    pub(crate) fn alloc(&mut self, node: Node<K>) -> NodeIdx {
        let idx = self.nodes.len() as NodeIdx;
        self.nodes.push(node);
        return idx;
    }

    /// Remove a node that nothing links to any more and hand back its key.
    ///
    /// The last node in the arena is moved into the freed slot, so its
    /// parent's child link (or the root), and its children's parent links,
    /// are rewritten to the new index.
    pub(crate) fn release(&mut self, idx: NodeIdx) -> K {
        let last = (self.nodes.len() - 1) as NodeIdx;
        if idx != last {
            let moved = self.node(last);
            let (parent, left, right) = (moved.parent, moved.left, moved.right);
            match parent {
                None => {
                    if self.root == Some(last) {
                        self.root = Some(idx);
                    }
                }
                Some(parent) => {
                    let side = self.side_of(last, parent);
                    *self.node_mut(parent).child_mut(side) = Some(idx);
                }
            }
            for child in [left, right].into_iter().flatten() {
                self.node_mut(child).parent = Some(idx);
            }
        }
        return self.nodes.swap_remove(idx as usize).key;
    }

    /// Exchange the keys held by two distinct nodes.
    pub(crate) fn swap_keys(&mut self, a: NodeIdx, b: NodeIdx) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.nodes.split_at_mut(hi as usize);
        std::mem::swap(&mut head[lo as usize].key, &mut tail[0].key);
    }
}

impl<K> Default for RbTree<K> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<K: Ord> FromIterator<K> for RbTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = RbTree::new();
        tree.extend(iter);
        return tree;
    }
}

impl<K: Ord> Extend<K> for RbTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}
