//! In-order traversal.

use smallvec::SmallVec;

use crate::node::Node;
use crate::node::NodeIdx;
use crate::query::Stack;
use crate::tree::RbTree;

/// Ascending iterator over the keys of a tree.
pub struct Iter<'a, K> {
    nodes: &'a [Node<K>],
    /// Nodes whose left subtree is done but who have not been yielded yet.
    stack: Stack<NodeIdx>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn push_left_spine(&mut self, mut cursor: Option<NodeIdx>) {
        while let Some(idx) = cursor {
            self.stack.push(idx);
            cursor = self.nodes[idx as usize].left;
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let idx = self.stack.pop()?;
        let node = &self.nodes[idx as usize];
        self.push_left_spine(node.right);
        self.remaining -= 1;
        return Some(&node.key);
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (self.remaining, Some(self.remaining));
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> RbTree<K> {
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter {
            nodes: &self.nodes,
            stack: SmallVec::new(),
            remaining: self.nodes.len(),
        };
        iter.push_left_spine(self.root);
        return iter;
    }
}

impl<'a, K> IntoIterator for &'a RbTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        return self.iter();
    }
}
