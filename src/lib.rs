//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.
//!
//! The tree stores bare keys and admits duplicates: inserting a key equal to one already present
//! adds a second node rather than replacing the first. In-order iteration yields the keys in
//! ascending order, each according to its multiplicity.

mod multiset;
mod node;
mod tree;

pub use self::multiset::{AvlTree, AvlTreeIntoIter, AvlTreeIter, AvlTreeNodes};
pub use self::node::NodeView;
