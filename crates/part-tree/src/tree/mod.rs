//! Core tree abstraction for part hierarchies
//!
//! This module provides the arena-backed tree that owns every node, plus a
//! generic navigation trait with traversal helpers layered on top.

mod arena;
mod node;
mod traits;

pub use arena::{ArenaTree, NodeMut};
pub use node::{NodeId, TreeNode};
pub use traits::{TraversalOrder, Tree, TreeTraversal, TreeWalker};

/// Re-export common types for convenience
pub mod prelude {
    pub use super::{
        ArenaTree, NodeId, NodeMut, TraversalOrder, Tree, TreeNode, TreeTraversal,
    };
}
