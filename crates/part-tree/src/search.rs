//! Name search over a tree and root-path reconstruction
//!
//! Both operations are stateless pre-order traversals. A node matches when
//! its payload's [`Named::name`] equals the target exactly (case-sensitive).
//! For [`Part`] that is the part name only; the part number plays no role.

use crate::part::Part;
use crate::tree::{NodeId, TraversalOrder, Tree, TreeWalker};
use log::{debug, trace};

/// A payload that can be looked up by name
pub trait Named {
    /// The name compared against search targets
    fn name(&self) -> &str;
}

impl Named for Part {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for str {
    fn name(&self) -> &str {
        self
    }
}

impl Named for String {
    fn name(&self) -> &str {
        self
    }
}

impl<N: Named + ?Sized> Named for &N {
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Collect every node under `node` (inclusive) whose name is `target_name`
///
/// The traversal keeps its own stack, so tree depth is bounded only by
/// memory. Results are in pre-order: a matching ancestor always precedes its
/// matching descendants, and siblings appear in insertion order. A match does
/// not stop the descent into its children. Returns an empty vector when
/// nothing matches or `node` is not part of the tree.
pub fn recursive_search<T>(tree: &T, node: NodeId, target_name: &str) -> Vec<NodeId>
where
    T: Tree + ?Sized,
    T::NodeData: Named,
{
    let results: Vec<_> = TreeWalker::new(tree, node, TraversalOrder::PreOrder)
        .filter(|&id| tree.data_of(id).is_some_and(|data| data.name() == target_name))
        .inspect(|id| trace!("{} matches {:?}", id, target_name))
        .collect();
    debug!("search for {:?} from {} found {} match(es)", target_name, node, results.len());
    results
}

/// Ids on the path from `root` down to `node`, both inclusive
///
/// Built by following parent links upwards from `node` until `root` is
/// reached. If `node` does not lie under `root` the walk stops at the tree's
/// actual root instead.
pub fn path_from<T>(tree: &T, root: NodeId, node: NodeId) -> Vec<NodeId>
where
    T: Tree + ?Sized,
{
    let mut path = Vec::new();
    let mut current = Some(node);

    while let Some(id) = current {
        path.push(id);
        if id == root {
            break;
        }
        current = tree.parent(id);
    }

    path.reverse();
    path
}

/// For every match of `target_name` under `root`, the payloads on the path
/// from `root` to the match
///
/// Each path reads root-first and ends with the matched payload. Paths come
/// in the same order as [`recursive_search`] returns the matches; no matches
/// gives no paths.
pub fn trace_to_root<'t, T>(tree: &'t T, root: NodeId, target_name: &str) -> Vec<Vec<&'t T::NodeData>>
where
    T: Tree + ?Sized,
    T::NodeData: Named,
{
    recursive_search(tree, root, target_name)
        .into_iter()
        .map(|found| {
            path_from(tree, root, found)
                .into_iter()
                .filter_map(|id| tree.data_of(id))
                .collect()
        })
        .collect()
}
