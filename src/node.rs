//! Node storage for the arena-backed tree.
//!
//! Nodes never own each other. Every link is an index into the tree's
//! node arena, so a rotation is a handful of index rewrites.

/// Index into the node arena.
pub type NodeIdx = u32;

/// The color tag carried by every node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    #[inline(always)]
    pub fn is_red(self) -> bool {
        return self == Color::Red;
    }

    #[inline(always)]
    pub fn is_black(self) -> bool {
        return self == Color::Black;
    }
}

/// Which child slot of a parent a node sits in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline(always)]
    pub(crate) fn flip(self) -> Side {
        return match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        };
    }
}

/// A node in the arena.
#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) color: Color,
    /// Back-reference used for navigation only (None for the root).
    pub(crate) parent: Option<NodeIdx>,
    pub(crate) left: Option<NodeIdx>,
    pub(crate) right: Option<NodeIdx>,
}

impl<K> Node<K> {
    /// Every node starts life as a red leaf.
    pub(crate) fn leaf(key: K, parent: Option<NodeIdx>) -> Node<K> {
        return Node {
            key,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        };
    }

    #[inline(always)]
    pub(crate) fn child(&self, side: Side) -> Option<NodeIdx> {
        return match side {
            Side::Left => self.left,
            Side::Right => self.right,
        };
    }

    #[inline(always)]
    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Option<NodeIdx> {
        return match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
    }
}
