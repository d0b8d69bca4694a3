//! An arena-backed red-black tree of unique, ordered keys.
//!
//! # Quick Start
//!
//! ```
//! use redblack::RbTree;
//!
//! let mut tree = RbTree::new();
//! for key in [10, 20, 30, 40, 50, 25] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![10, 20, 25, 30, 40, 50]);
//! assert_eq!(tree.min(), Ok(&10));
//!
//! tree.erase(&25);
//! assert!(tree.find(&25).is_none());
//! assert!(tree.validate().is_ok());
//! ```
//!
//! Nodes live in a single `Vec` and link to each other by index, so there
//! is no `unsafe` and no reference counting. The tree is not synchronized;
//! share it across threads only behind your own lock.

mod config;
mod erase;
mod error;
mod export;
mod insert;
mod iter;
mod node;
mod query;
mod rotate;
mod tree;
mod validate;

pub use config::TreeConfig;
pub use error::TreeError;
pub use error::Violation;
pub use export::LevelExport;
pub use export::Slot;
pub use iter::Iter;
pub use node::Color;
pub use node::NodeIdx;
pub use query::NodeRef;
pub use tree::RbTree;
