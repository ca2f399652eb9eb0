//! Core tree traits for hierarchical data structures

use crate::tree::{NodeId, TreeNode};
use std::collections::VecDeque;

/// A navigable tree of payload-carrying nodes
///
/// Implementations provide the primitive lookups; derived methods build
/// higher-level navigation on top of them. Every method tolerates invalid
/// ids by returning `None` or an empty result.
///
/// # Type Parameters
///
/// * `NodeData` - Payload stored at each node (e.g. a [`Part`](crate::Part))
///
/// # Example
///
/// ```
/// use part_tree::tree::{ArenaTree, TraversalOrder, Tree, TreeTraversal};
///
/// let mut tree = ArenaTree::new("root");
/// tree.root_mut().add_child("child");
///
/// for id in tree.walk(TraversalOrder::PreOrder) {
///     let depth = tree.depth(id);
///     println!("{:indent$}{}", "", tree.data(id).unwrap(), indent = depth * 2);
/// }
/// ```
pub trait Tree {
    /// Payload stored at each node
    type NodeData;

    /// Get the root node ID (always exists)
    fn root(&self) -> NodeId;

    /// Get a node by its ID
    ///
    /// Returns `None` if the ID is invalid.
    fn get(&self, id: NodeId) -> Option<&TreeNode<Self::NodeData>>;

    /// Get the parent of a node
    ///
    /// Returns `None` for the root node.
    fn parent(&self, id: NodeId) -> Option<NodeId>;

    /// Iterate over children of a node in insertion order
    ///
    /// Returns an empty iterator for leaf nodes or invalid IDs.
    fn children(&self, id: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_>;

    /// Count total nodes in the tree
    fn node_count(&self) -> usize;

    /// Get the payload of a node
    fn data_of(&self, id: NodeId) -> Option<&Self::NodeData> {
        self.get(id).map(TreeNode::data)
    }

    /// Check if a node has no children
    ///
    /// Returns false for invalid IDs.
    fn is_leaf(&self, id: NodeId) -> bool {
        self.get(id).map(TreeNode::is_leaf).unwrap_or(false)
    }

    /// Count children of a node
    fn child_count(&self, id: NodeId) -> usize {
        self.get(id).map(|n| n.children().len()).unwrap_or(0)
    }

    /// Get the depth of a node (root = 0)
    fn depth(&self, id: NodeId) -> usize {
        std::iter::successors(self.parent(id), |&current| self.parent(current)).count()
    }

    /// Get all ancestors of a node, from parent to root
    ///
    /// Returns an empty vector for the root or invalid IDs.
    fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        std::iter::successors(self.parent(id), |&current| self.parent(current)).collect()
    }

    /// Check if a node is a strict ancestor of another
    fn is_ancestor_of(&self, ancestor: NodeId, descendant: NodeId) -> bool {
        std::iter::successors(self.parent(descendant), |&current| self.parent(current))
            .any(|id| id == ancestor)
    }
}

/// Traversal order for walking the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Visit parent before children (top-down)
    PreOrder,
    /// Visit children before parent (bottom-up)
    PostOrder,
    /// Visit level by level
    BreadthFirst,
}

/// Extension trait providing tree traversal and search utilities
///
/// This trait is automatically implemented for all types that implement `Tree`.
pub trait TreeTraversal: Tree {
    /// Walk the tree from the root in the specified order
    fn walk(&self, order: TraversalOrder) -> TreeWalker<'_, Self>
    where
        Self: Sized,
    {
        TreeWalker::new(self, self.root(), order)
    }

    /// Walk the subtree rooted at `start`
    fn walk_from(&self, start: NodeId, order: TraversalOrder) -> TreeWalker<'_, Self>
    where
        Self: Sized,
    {
        TreeWalker::new(self, start, order)
    }

    /// Get all leaf nodes in pre-order
    fn leaves(&self) -> Vec<NodeId>
    where
        Self: Sized,
    {
        self.walk(TraversalOrder::PreOrder)
            .filter(|&id| self.is_leaf(id))
            .collect()
    }

    /// Find nodes whose payload matches a predicate, in pre-order
    fn find<F>(&self, predicate: F) -> Vec<NodeId>
    where
        F: Fn(&Self::NodeData) -> bool,
        Self: Sized,
    {
        self.walk(TraversalOrder::PreOrder)
            .filter(|&id| self.data_of(id).map(&predicate).unwrap_or(false))
            .collect()
    }

    /// Height of the tree: the greatest depth of any node
    fn height(&self) -> usize
    where
        Self: Sized,
    {
        self.leaves()
            .into_iter()
            .map(|id| self.depth(id))
            .max()
            .unwrap_or(0)
    }
}

// Blanket implementation for all Tree types
impl<T: Tree> TreeTraversal for T {}

/// Iterator over the ids of a subtree in a chosen order
pub struct TreeWalker<'a, T: Tree + ?Sized> {
    tree: &'a T,
    order: TraversalOrder,
    /// Pending nodes; the `bool` marks a node whose children were already
    /// expanded (post-order only)
    pending: VecDeque<(NodeId, bool)>,
}

impl<'a, T: Tree + ?Sized> TreeWalker<'a, T> {
    /// Create a new tree walker starting from the given node
    ///
    /// An invalid start id yields an empty walk.
    pub fn new(tree: &'a T, start: NodeId, order: TraversalOrder) -> Self {
        let mut pending = VecDeque::new();
        if tree.get(start).is_some() {
            pending.push_back((start, false));
        }

        Self {
            tree,
            order,
            pending,
        }
    }

    /// Push the children of `id` so the first child is popped next
    fn push_children_reversed(&mut self, id: NodeId) {
        let tree = self.tree;
        if let Some(node) = tree.get(id) {
            self.pending
                .extend(node.children().iter().rev().map(|&child| (child, false)));
        }
    }

    fn next_preorder(&mut self) -> Option<NodeId> {
        let (current, _) = self.pending.pop_back()?;
        self.push_children_reversed(current);
        Some(current)
    }

    fn next_postorder(&mut self) -> Option<NodeId> {
        while let Some((current, expanded)) = self.pending.pop_back() {
            if expanded {
                return Some(current);
            }

            self.pending.push_back((current, true));
            self.push_children_reversed(current);
        }
        None
    }

    fn next_breadthfirst(&mut self) -> Option<NodeId> {
        let (current, _) = self.pending.pop_front()?;
        let tree = self.tree;
        if let Some(node) = tree.get(current) {
            self.pending
                .extend(node.children().iter().map(|&child| (child, false)));
        }
        Some(current)
    }
}

impl<'a, T: Tree + ?Sized> Iterator for TreeWalker<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        match self.order {
            TraversalOrder::PreOrder => self.next_preorder(),
            TraversalOrder::PostOrder => self.next_postorder(),
            TraversalOrder::BreadthFirst => self.next_breadthfirst(),
        }
    }
}
