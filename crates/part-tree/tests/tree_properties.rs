use part_tree::prelude::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const NAMES: &[&str] = &["A", "B", "C"];

/// Build a tree from a list of (parent selector, name index) pairs; each new
/// node hangs off one of the nodes created before it.
fn build(shape: &[(usize, usize)]) -> ArenaTree<Part> {
    let mut tree = ArenaTree::new(Part::new("A", "root"));
    for (i, &(parent, name)) in shape.iter().enumerate() {
        let parent = NodeId::new(parent % tree.node_count());
        tree.add_child(parent, Part::new(NAMES[name], format!("n{i}")));
    }
    tree
}

fn shape_strategy() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((any::<usize>(), 0..NAMES.len()), 0..40)
}

proptest! {
    #[test]
    fn parent_chain_terminates_at_root(shape in shape_strategy()) {
        let tree = build(&shape);
        for id in tree.walk(TraversalOrder::PreOrder) {
            let ancestors = tree.ancestors(id);
            prop_assert!(ancestors.len() < tree.node_count());
            let top = ancestors.last().copied().unwrap_or(id);
            prop_assert_eq!(top, tree.root());
            prop_assert_eq!(tree.parent(top), None);
        }
    }

    #[test]
    fn children_point_back_to_parent(shape in shape_strategy()) {
        let tree = build(&shape);
        let mut seen = 1;
        for id in tree.walk(TraversalOrder::BreadthFirst) {
            for child in tree.children(id) {
                prop_assert_eq!(tree.parent(child), Some(id));
                seen += 1;
            }
        }
        prop_assert_eq!(seen, tree.node_count());
    }

    #[test]
    fn search_matches_filtered_pre_order_walk(shape in shape_strategy(), target in 0..NAMES.len()) {
        let tree = build(&shape);
        let name = NAMES[target];
        let found = recursive_search(&tree, tree.root(), name);
        let expected = tree.find(|part| part.name == name);
        prop_assert_eq!(&found, &expected);

        for (i, earlier) in found.iter().enumerate() {
            for later in &found[i + 1..] {
                prop_assert!(!tree.is_ancestor_of(*later, *earlier));
            }
        }
    }

    #[test]
    fn traced_paths_follow_tree_edges(shape in shape_strategy(), target in 0..NAMES.len()) {
        let tree = build(&shape);
        let name = NAMES[target];
        let found = recursive_search(&tree, tree.root(), name);
        let paths = trace_to_root(&tree, tree.root(), name);
        prop_assert_eq!(paths.len(), found.len());

        for (path, &node) in paths.iter().zip(&found) {
            let ids = path_from(&tree, tree.root(), node);
            prop_assert_eq!(ids.len(), path.len());
            prop_assert_eq!(ids[0], tree.root());
            prop_assert_eq!(*ids.last().unwrap(), node);
            prop_assert_eq!(path[0], tree.data(tree.root()).unwrap());
            prop_assert_eq!(*path.last().unwrap(), tree.data(node).unwrap());
            prop_assert_eq!(path.last().unwrap().name.as_str(), name);

            for pair in ids.windows(2) {
                prop_assert_eq!(tree.parent(pair[1]), Some(pair[0]));
            }
            for (id, part) in ids.iter().zip(path) {
                prop_assert_eq!(tree.data(*id).unwrap(), *part);
            }
        }
    }

    #[test]
    fn absent_name_yields_nothing(shape in shape_strategy()) {
        let tree = build(&shape);
        prop_assert!(recursive_search(&tree, tree.root(), "Z").is_empty());
        prop_assert!(trace_to_root(&tree, tree.root(), "Z").is_empty());
    }

    #[test]
    fn generated_trees_respect_options(
        seed in any::<u64>(),
        depth in 0usize..5,
        min in 0usize..3,
        extra in 0usize..3,
    ) {
        let options = GeneratorOptions::new().depth(depth).min_children(min).max_children(min + extra);
        let mut tree = ArenaTree::new(Part::new("RootPart", "RootPartNumber"));
        let mut rng = StdRng::seed_from_u64(seed);

        let added = generate(&mut tree, NodeId::ROOT, &options, &mut rng).unwrap();
        prop_assert_eq!(added + 1, tree.node_count());

        for id in tree.walk(TraversalOrder::PreOrder) {
            let level = tree.depth(id);
            prop_assert!(level <= depth);
            let count = tree.child_count(id);
            if level < depth {
                prop_assert!(count >= min && count <= min + extra);
            } else {
                prop_assert_eq!(count, 0);
            }

            if level > 0 {
                let remaining = depth - level + 1;
                let part = tree.data(id).unwrap();
                let prefix = format!("Part_{remaining}_");
                prop_assert!(part.name.starts_with(&prefix));
                prop_assert_eq!(&part.part_number[1..], &part.name[5..]);
            }
        }
    }
}
