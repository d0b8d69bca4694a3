//! Error types.

use thiserror::Error;

use crate::node::NodeIdx;

/// Errors returned by tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// `min` or `max` was asked of a tree with no root.
    #[error("the tree is empty")]
    EmptyTree,
}

/// A broken invariant found by [`RbTree::validate`](crate::RbTree::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("the root is red")]
    RedRoot,
    #[error("red node {node} has a red child")]
    RedRedEdge { node: NodeIdx },
    #[error("children of node {node} have black-heights {left} and {right}")]
    BlackHeightMismatch { node: NodeIdx, left: usize, right: usize },
    #[error("key at node {node} is out of order")]
    OrderViolation { node: NodeIdx },
    #[error("parent link of node {node} does not match its position")]
    BrokenParentLink { node: NodeIdx },
    #[error("node {node} is reachable along more than one path")]
    SharedNode { node: NodeIdx },
    #[error("{reachable} of {stored} stored nodes are reachable from the root")]
    Unreachable { reachable: usize, stored: usize },
}
