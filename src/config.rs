//! Tree configuration.

/// Settings held by a tree. Only the level-order export reads them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeConfig {
    /// Emit [`Slot::SyntheticNilLeaf`](crate::Slot::SyntheticNilLeaf) for
    /// the absent children of present nodes.
    pub show_null_leaves: bool,
}

impl TreeConfig {
    pub fn show_null_leaves(mut self, show: bool) -> TreeConfig {
        self.show_null_leaves = show;
        return self;
    }
}
