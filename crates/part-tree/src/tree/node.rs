//! Core node types for the tree abstraction

use derive_more::{Display, From};

/// Unique identifier for a node within a tree
///
/// Internally represented as an index into the owning tree's arena. Ids are
/// only handed out by the tree itself, so an id is meaningful only for the
/// tree that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display(fmt = "NodeId({})", _0)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node always has ID 0
    pub const ROOT: NodeId = NodeId(0);

    /// Create a new NodeId from a usize
    pub const fn new(id: usize) -> Self {
        NodeId(id)
    }

    /// Get the arena index
    pub const fn index(self) -> usize {
        self.0
    }

    /// Returns true if this is the root id
    pub const fn is_root(self) -> bool {
        self.0 == 0
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// A single node stored in an [`ArenaTree`](super::ArenaTree)
///
/// The parent link is a non-owning index used only to walk upwards. The
/// child list is ordered by insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TreeNode<T> {
    pub(crate) data: T,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl<T> TreeNode<T> {
    pub(crate) fn new(data: T, parent: Option<NodeId>) -> Self {
        Self {
            data,
            parent,
            children: Vec::new(),
        }
    }

    /// The payload carried by this node
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The parent of this node, `None` for the root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in insertion order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Returns true if the node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
