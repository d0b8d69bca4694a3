//! Read-only queries: lookup, extremes, height, and borrowed node views.

use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

use crate::error::TreeError;
use crate::node::Color;
use crate::node::NodeIdx;
use crate::tree::RbTree;

/// Explicit traversal stack. Red-black depth stays logarithmic, so this
/// rarely spills to the heap.
pub(crate) type Stack<T> = SmallVec<[T; 64]>;

/// A borrowed view of one node in a tree.
pub struct NodeRef<'a, K> {
    tree: &'a RbTree<K>,
    idx: NodeIdx,
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        return *self;
    }
}

impl<K> Copy for NodeRef<'_, K> {}

impl<'a, K> NodeRef<'a, K> {
    fn at(&self, idx: Option<NodeIdx>) -> Option<NodeRef<'a, K>> {
        return idx.map(|idx| NodeRef { tree: self.tree, idx });
    }

    pub fn key(&self) -> &'a K {
        return &self.tree.node(self.idx).key;
    }

    pub fn color(&self) -> Color {
        return self.tree.node(self.idx).color;
    }

    pub fn parent(&self) -> Option<NodeRef<'a, K>> {
        return self.at(self.tree.node(self.idx).parent);
    }

    pub fn left(&self) -> Option<NodeRef<'a, K>> {
        return self.at(self.tree.node(self.idx).left);
    }

    pub fn right(&self) -> Option<NodeRef<'a, K>> {
        return self.at(self.tree.node(self.idx).right);
    }

    /// Smallest key in the subtree rooted here.
    pub fn min(&self) -> NodeRef<'a, K> {
        return NodeRef { tree: self.tree, idx: self.tree.min_idx(self.idx) };
    }

    /// Largest key in the subtree rooted here.
    pub fn max(&self) -> NodeRef<'a, K> {
        return NodeRef { tree: self.tree, idx: self.tree.max_idx(self.idx) };
    }

    /// Number of levels in the subtree rooted here (a leaf has height 1).
    pub fn height(&self) -> usize {
        return self.tree.subtree_height(Some(self.idx));
    }
}

impl<K: fmt::Debug> fmt::Debug for NodeRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f
            .debug_struct("NodeRef")
            .field("key", self.key())
            .field("color", &self.color())
            .finish();
    }
}

impl<K> RbTree<K> {
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        return self.root.map(|idx| NodeRef { tree: self, idx });
    }

    /// Follow the left spine down from `idx`.
    pub(crate) fn min_idx(&self, mut idx: NodeIdx) -> NodeIdx {
        while let Some(left) = self.node(idx).left {
            idx = left;
        }
        return idx;
    }

    /// Follow the right spine down from `idx`.
    pub(crate) fn max_idx(&self, mut idx: NodeIdx) -> NodeIdx {
        while let Some(right) = self.node(idx).right {
            idx = right;
        }
        return idx;
    }

    /// Smallest key in the tree.
    pub fn min(&self) -> Result<&K, TreeError> {
        let root = self.root.ok_or(TreeError::EmptyTree)?;
        return Ok(&self.node(self.min_idx(root)).key);
    }

    /// Largest key in the tree.
    pub fn max(&self) -> Result<&K, TreeError> {
        let root = self.root.ok_or(TreeError::EmptyTree)?;
        return Ok(&self.node(self.max_idx(root)).key);
    }

    /// Number of levels in the tree; 0 when empty.
    pub fn height(&self) -> usize {
        return self.subtree_height(self.root);
    }

    /// Iterative depth-first walk; absent subtrees have height 0.
    pub(crate) fn subtree_height(&self, top: Option<NodeIdx>) -> usize {
        let mut deepest = 0;
        let mut stack: Stack<(NodeIdx, usize)> = SmallVec::new();
        if let Some(top) = top {
            stack.push((top, 1));
        }
        while let Some((idx, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let node = self.node(idx);
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        return deepest;
    }
}

impl<K: Ord> RbTree<K> {
    pub(crate) fn find_idx(&self, key: &K) -> Option<NodeIdx> {
        let mut cursor = self.root;
        while let Some(idx) = cursor {
            let node = self.node(idx);
            cursor = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(idx),
            };
        }
        return None;
    }

    /// Look up the node holding `key`.
    pub fn find(&self, key: &K) -> Option<NodeRef<'_, K>> {
        return self.find_idx(key).map(|idx| NodeRef { tree: self, idx });
    }

    pub fn contains(&self, key: &K) -> bool {
        return self.find_idx(key).is_some();
    }
}
