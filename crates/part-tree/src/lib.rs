//! Part Tree Library
//!
//! A library for building hierarchical trees of parts, printing them and
//! locating every occurrence of a part by name together with its path from
//! the root.
//!
//! # Core Concepts
//!
//! - **ArenaTree**: Arena-backed tree; children are owned through the arena,
//!   parents are plain index links
//! - **Tree**: Navigation trait with traversal helpers built on top
//! - **Part**: The payload carried by each node
//! - **Search**: Multi-match name search and root-path reconstruction
//!
//! # Example
//!
//! ```
//! use part_tree::prelude::*;
//!
//! let mut tree = ArenaTree::new(Part::new("Root", "R0"));
//! tree.root_mut().add_child(Part::new("A", "A1")).add_child(Part::new("B", "B1"));
//!
//! let paths = trace_to_root(&tree, tree.root(), "B");
//! assert_eq!(paths.len(), 1);
//! assert_eq!(paths[0].len(), 3);
//! ```

pub mod generator;
pub mod part;
pub mod print;
pub mod search;
pub mod tree;

pub use generator::{add_random_children, generate, GeneratorOptions};
pub use part::Part;
pub use print::{print_tree, render_tree, write_tree};
pub use search::{path_from, recursive_search, trace_to_root, Named};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::generator::{add_random_children, generate, GeneratorOptions};
    pub use crate::part::Part;
    pub use crate::print::{print_tree, render_tree, write_tree};
    pub use crate::search::{path_from, recursive_search, trace_to_root, Named};
    pub use crate::tree::prelude::*;
}
