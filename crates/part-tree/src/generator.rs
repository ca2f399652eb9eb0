//! Random population of part trees
//!
//! Generated parts are named from their remaining depth and sibling index:
//! the `i`-th child created with `d` levels left is `Part_{d}_{i}` with part
//! number `P{d}_{i}`. Direct children of the starting node therefore carry
//! the largest depth value and leaves carry `1`.

use crate::part::Part;
use crate::tree::{ArenaTree, NodeId};
use anyhow::bail;
use log::{debug, trace};
use rand::Rng;

/// Configuration options for random tree generation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorOptions {
    /// Number of levels to add below the starting node.
    pub depth: usize,

    /// Fewest children attached to each generated parent.
    pub min_children: usize,

    /// Most children attached to each generated parent (inclusive).
    pub max_children: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            depth: 3,
            min_children: 1,
            max_children: 3,
        }
    }
}

impl GeneratorOptions {
    /// Create new generator options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of levels to generate.
    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Set the minimum number of children per node.
    pub fn min_children(mut self, min_children: usize) -> Self {
        self.min_children = min_children;
        self
    }

    /// Set the maximum number of children per node.
    pub fn max_children(mut self, max_children: usize) -> Self {
        self.max_children = max_children;
        self
    }

    /// Check that the child-count bounds form a non-empty range.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.min_children > self.max_children {
            bail!(
                "min_children ({}) must not exceed max_children ({})",
                self.min_children,
                self.max_children
            );
        }
        Ok(())
    }
}

/// Attach 1 to 3 random children per level below `node`, `depth` levels deep
pub fn add_random_children<R>(tree: &mut ArenaTree<Part>, node: NodeId, depth: usize, rng: &mut R)
where
    R: Rng + ?Sized,
{
    let options = GeneratorOptions::default();
    grow(tree, node, depth, &options, rng);
}

/// Populate the subtree below `node` according to `options`
///
/// Returns the number of nodes added.
pub fn generate<R>(
    tree: &mut ArenaTree<Part>,
    node: NodeId,
    options: &GeneratorOptions,
    rng: &mut R,
) -> anyhow::Result<usize>
where
    R: Rng + ?Sized,
{
    options.validate()?;
    let added = grow(tree, node, options.depth, options, rng);
    debug!("generated {} node(s) below {} ({:?})", added, node, options);
    Ok(added)
}

/// A node whose children are still being attached
struct Frame {
    node: NodeId,
    depth: usize,
    child_count: usize,
    next: usize,
}

/// Depth-first growth on an explicit stack. Each child is fully populated
/// before its next sibling is created, so random draws happen in the same
/// order as a recursive walk would make them.
fn grow<R>(
    tree: &mut ArenaTree<Part>,
    node: NodeId,
    depth: usize,
    options: &GeneratorOptions,
    rng: &mut R,
) -> usize
where
    R: Rng + ?Sized,
{
    if depth == 0 {
        return 0;
    }

    let mut stack = vec![open_frame(node, depth, options, rng)];
    let mut added = 0;

    while let Some(frame) = stack.last_mut() {
        if frame.next == frame.child_count {
            stack.pop();
            continue;
        }

        let (parent, level, i) = (frame.node, frame.depth, frame.next);
        frame.next += 1;

        let part = Part::new(format!("Part_{level}_{i}"), format!("P{level}_{i}"));
        let child = tree.add_child(parent, part);
        added += 1;

        if level > 1 {
            stack.push(open_frame(child, level - 1, options, rng));
        }
    }
    added
}

fn open_frame<R>(node: NodeId, depth: usize, options: &GeneratorOptions, rng: &mut R) -> Frame
where
    R: Rng + ?Sized,
{
    let child_count = rng.gen_range(options.min_children..=options.max_children);
    trace!("{} gets {} child(ren) at depth {}", node, child_count, depth);
    Frame {
        node,
        depth,
        child_count,
        next: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{TraversalOrder, Tree, TreeTraversal};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn root() -> ArenaTree<Part> {
        ArenaTree::new(Part::new("RootPart", "RootPartNumber"))
    }

    #[test]
    fn test_options_builder() {
        let options = GeneratorOptions::new().depth(5).min_children(2).max_children(4);
        assert_eq!(options.depth, 5);
        assert_eq!(options.min_children, 2);
        assert_eq!(options.max_children, 4);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let options = GeneratorOptions::new().min_children(4).max_children(2);
        let err = options.validate().unwrap_err();
        assert!(err.to_string().contains("must not exceed"));

        let mut tree = root();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate(&mut tree, NodeId::ROOT, &options, &mut rng).is_err());
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn test_zero_depth_adds_nothing() {
        let mut tree = root();
        let mut rng = StdRng::seed_from_u64(7);
        add_random_children(&mut tree, NodeId::ROOT, 0, &mut rng);
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn test_fixed_fan_out_is_deterministic() {
        let mut tree = root();
        let mut rng = StdRng::seed_from_u64(0);
        let options = GeneratorOptions::new().depth(2).min_children(2).max_children(2);

        let added = generate(&mut tree, NodeId::ROOT, &options, &mut rng).unwrap();
        assert_eq!(added, 6);

        let names: Vec<_> = tree
            .walk(TraversalOrder::PreOrder)
            .skip(1)
            .map(|id| tree.data(id).unwrap().name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Part_2_0", "Part_1_0", "Part_1_1", "Part_2_1", "Part_1_0", "Part_1_1"]
        );
        assert_eq!(tree.data(NodeId::new(1)).unwrap().part_number, "P2_0");
    }

    #[test]
    fn test_default_fan_out_bounds() {
        let mut tree = root();
        let mut rng = StdRng::seed_from_u64(42);
        add_random_children(&mut tree, NodeId::ROOT, 3, &mut rng);

        for id in tree.walk(TraversalOrder::PreOrder) {
            let count = tree.child_count(id);
            if tree.depth(id) < 3 {
                assert!((1..=3).contains(&count), "{id} has {count} children");
            } else {
                assert_eq!(count, 0);
            }
        }
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn test_generate_below_inner_node() {
        let mut tree = root();
        let inner = tree.add_child(NodeId::ROOT, Part::new("Inner", "I0"));
        let mut rng = StdRng::seed_from_u64(3);
        let options = GeneratorOptions::new().depth(1).min_children(1).max_children(1);

        let added = generate(&mut tree, inner, &options, &mut rng).unwrap();
        assert_eq!(added, 1);
        assert_eq!(tree.child_count(NodeId::ROOT), 1);
        assert_eq!(tree.data(tree.child_ids(inner)[0]).unwrap().name, "Part_1_0");
    }
}
