//! part-search
//!
//! Generates a random part tree, prints it, then prints the root-to-part
//! path of every part carrying the target name.
//!
//! Logging is controlled through `RUST_LOG` (defaults to `warn`).

use anyhow::Context;
use clap::Parser;
use log::info;
use part_tree::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};

const SEPARATOR: &str = "-----------------------------------";
const PATH_HEADER: &str = "----- Path -----";

#[derive(Debug, Parser)]
#[command(name = "part-search")]
#[command(about = "Build a random part tree and trace every match of a part name", long_about = None)]
struct Cli {
    /// Name of the part to look for
    #[arg(long, env = "PART_SEARCH_TARGET", default_value = "Part_2_0")]
    target: String,

    /// Number of levels generated below the root
    #[arg(long, env = "PART_SEARCH_DEPTH", default_value_t = 3)]
    depth: usize,

    /// Seed for the random generator; entropy is used when absent
    #[arg(long, env = "PART_SEARCH_SEED")]
    seed: Option<u64>,

    /// Fewest children per generated node
    #[arg(long, env = "PART_SEARCH_MIN_CHILDREN", default_value_t = 1)]
    min_children: usize,

    /// Most children per generated node
    #[arg(long, env = "PART_SEARCH_MAX_CHILDREN", default_value_t = 3)]
    max_children: usize,

    /// Name of the root part
    #[arg(long, env = "PART_SEARCH_ROOT_NAME", default_value = "RootPart")]
    root_name: String,

    /// Part number of the root part
    #[arg(long, env = "PART_SEARCH_ROOT_NUMBER", default_value = "RootPartNumber")]
    root_number: String,

    /// Skip printing the generated tree
    #[arg(long, env = "PART_SEARCH_NO_TREE")]
    no_tree: bool,
}

impl Cli {
    fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions::new()
            .depth(self.depth)
            .min_children(self.min_children)
            .max_children(self.max_children)
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let options = cli.generator_options();
    let mut tree = ArenaTree::new(Part::new(cli.root_name.as_str(), cli.root_number.as_str()));
    let mut rng = cli.rng();

    let added = generate(&mut tree, NodeId::ROOT, &options, &mut rng)
        .context("Invalid generator options")?;
    info!("Generated {} part(s) below {}", added, cli.root_name);

    if !cli.no_tree {
        write_tree(out, &tree, tree.root(), 0)?;
    }

    writeln!(out, "{}", SEPARATOR)?;

    let paths = trace_to_root(&tree, tree.root(), &cli.target);
    info!("Found {} path(s) to {:?}", paths.len(), cli.target);

    for path in paths {
        writeln!(out, "{}", PATH_HEADER)?;
        for part in path {
            writeln!(out, "{}", part)?;
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run(&cli, &mut out) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
