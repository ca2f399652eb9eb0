//! Example that generates a random part tree and summarises its shape
//!
//! Usage:
//!   cargo run --example random_tree [depth] [seed]
//!
//! Defaults to depth 3 and seed 0.

use part_tree::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let depth = args.get(1).map(|s| s.parse::<usize>()).transpose()?.unwrap_or(3);
    let seed = args.get(2).map(|s| s.parse::<u64>()).transpose()?.unwrap_or(0);

    let mut tree = ArenaTree::new(Part::new("RootPart", "RootPartNumber"));
    let mut rng = StdRng::seed_from_u64(seed);
    generate(&mut tree, NodeId::ROOT, &GeneratorOptions::new().depth(depth), &mut rng)?;

    print_tree(&tree, tree.root())?;

    println!();
    println!("Summary:");
    println!("  Total parts: {}", tree.node_count());
    println!("  Leaf parts: {}", tree.leaves().len());
    println!("  Height: {}", tree.height());

    // Count parts per level, breadth-first
    let mut per_level = vec![0usize; tree.height() + 1];
    for id in tree.walk(TraversalOrder::BreadthFirst) {
        per_level[tree.depth(id)] += 1;
    }
    for (level, count) in per_level.iter().enumerate() {
        println!("  Level {}: {} part(s)", level, count);
    }

    Ok(())
}
