//! Arena-backed tree storage

use crate::tree::{NodeId, Tree, TreeNode};

/// A tree whose nodes all live in a single arena
///
/// Every node is reachable from the root through child lists. Parent links
/// are stored as [`NodeId`]s and never own anything, so there are no
/// reference cycles to break when the tree is dropped.
///
/// Nodes can only be created through [`ArenaTree::add_child`] (or the
/// [`NodeMut`] handle), which allocates the node, links it to its parent and
/// appends it to the parent's children in one step.
///
/// # Example
///
/// ```
/// use part_tree::tree::{ArenaTree, Tree};
///
/// let mut tree = ArenaTree::new("root");
/// let a = tree.add_child(tree.root(), "a");
/// let b = tree.add_child(a, "b");
///
/// assert_eq!(tree.parent(b), Some(a));
/// assert_eq!(tree.node_count(), 3);
/// ```
///
/// With the `serde` feature the tree deserializes through a validating step:
/// input whose parent links and child lists do not describe a single rooted,
/// acyclic tree is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawArena<T>"))]
pub struct ArenaTree<T> {
    nodes: Vec<TreeNode<T>>,
}

impl<T> ArenaTree<T> {
    /// Create a tree holding a single parentless root node
    pub fn new(data: T) -> Self {
        Self {
            nodes: vec![TreeNode::new(data, None)],
        }
    }

    /// Attach a new child carrying `data` to `parent` and return its id
    ///
    /// The child is appended after any existing children of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not produced by this tree.
    pub fn add_child(&mut self, parent: NodeId, data: T) -> NodeId {
        assert!(
            parent.index() < self.nodes.len(),
            "{parent} does not belong to this tree"
        );

        let id = NodeId::new(self.nodes.len());
        self.nodes.push(TreeNode::new(data, Some(parent)));
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Get the payload of a node
    pub fn data(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id.index()).map(TreeNode::data)
    }

    /// Get the children of a node as a slice
    ///
    /// Returns an empty slice for invalid IDs.
    pub fn child_ids(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.index())
            .map(TreeNode::children)
            .unwrap_or(&[])
    }

    /// Mutable handle on the root, for building the tree
    pub fn root_mut(&mut self) -> NodeMut<'_, T> {
        NodeMut {
            tree: self,
            id: NodeId::ROOT,
        }
    }

    /// Mutable handle on any node, `None` for invalid IDs
    pub fn node_mut(&mut self, id: NodeId) -> Option<NodeMut<'_, T>> {
        if id.index() < self.nodes.len() {
            Some(NodeMut { tree: self, id })
        } else {
            None
        }
    }
}

impl<T> Tree for ArenaTree<T> {
    type NodeData = T;

    fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    fn get(&self, id: NodeId) -> Option<&TreeNode<T>> {
        self.nodes.get(id.index())
    }

    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.index()).and_then(TreeNode::parent)
    }

    fn children(&self, id: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(self.child_ids(id).iter().copied())
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Unchecked wire form of an [`ArenaTree`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawArena<T> {
    nodes: Vec<RawNode<T>>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawNode<T> {
    data: T,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawArena<T>> for ArenaTree<T> {
    type Error = anyhow::Error;

    /// Accepts only arenas `add_child` could have produced: node 0 is the
    /// parentless root, every other node points at an earlier parent, and
    /// each non-root node is listed exactly once, in its parent's children.
    fn try_from(raw: RawArena<T>) -> anyhow::Result<Self> {
        use anyhow::bail;

        let Some(root) = raw.nodes.first() else {
            bail!("tree has no root node");
        };
        if let Some(parent) = root.parent {
            bail!("root node has parent {parent}");
        }

        for (index, node) in raw.nodes.iter().enumerate().skip(1) {
            match node.parent {
                Some(parent) if parent.index() < index => {}
                Some(parent) => bail!("node {index} has parent {parent}, which is not an earlier node"),
                None => bail!("node {index} has no parent"),
            }
        }

        let mut listed = vec![false; raw.nodes.len()];
        listed[0] = true;
        for (index, node) in raw.nodes.iter().enumerate() {
            for &child in &node.children {
                let Some(entry) = raw.nodes.get(child.index()) else {
                    bail!("node {index} lists unknown child {child}");
                };
                if entry.parent != Some(NodeId::new(index)) {
                    bail!("node {index} lists {child}, whose parent is {:?}", entry.parent);
                }
                if std::mem::replace(&mut listed[child.index()], true) {
                    bail!("{child} is listed as a child more than once");
                }
            }
        }

        if let Some(missing) = listed.iter().position(|seen| !seen) {
            bail!("{} is missing from its parent's children", NodeId::new(missing));
        }

        Ok(Self {
            nodes: raw
                .nodes
                .into_iter()
                .map(|node| TreeNode {
                    data: node.data,
                    parent: node.parent,
                    children: node.children,
                })
                .collect(),
        })
    }
}

/// Mutable handle on one node of an [`ArenaTree`]
///
/// `add_child` consumes the handle and returns one for the new child, which
/// lets a chain of calls build a path downwards. Use `append_child` to add
/// several siblings under the same node.
pub struct NodeMut<'a, T> {
    tree: &'a mut ArenaTree<T>,
    id: NodeId,
}

impl<'a, T> NodeMut<'a, T> {
    /// The id of the node this handle points at
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The payload of the node
    pub fn data(&self) -> &T {
        &self.tree.nodes[self.id.index()].data
    }

    /// Add a child and move the handle onto it
    pub fn add_child(self, data: T) -> NodeMut<'a, T> {
        let id = self.tree.add_child(self.id, data);
        NodeMut {
            tree: self.tree,
            id,
        }
    }

    /// Add a child and keep the handle on the current node
    pub fn append_child(&mut self, data: T) -> NodeId {
        self.tree.add_child(self.id, data)
    }
}
