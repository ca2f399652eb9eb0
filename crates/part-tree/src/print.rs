//! Indented text rendering of a tree

use crate::tree::{NodeId, Tree};
use std::fmt::Display;
use std::io::{self, Write};

/// Write `node` and its subtree in pre-order, one line per node
///
/// Each line is the payload's `Display` output prefixed by `indent * 2`
/// spaces; children are written at `indent + 1` in insertion order. Pending
/// nodes are kept on an explicit stack rather than the call stack.
pub fn write_tree<T, W>(out: &mut W, tree: &T, node: NodeId, indent: usize) -> io::Result<()>
where
    T: Tree + ?Sized,
    T::NodeData: Display,
    W: Write + ?Sized,
{
    let mut pending = vec![(node, indent)];

    while let Some((current, level)) = pending.pop() {
        let Some(entry) = tree.get(current) else {
            continue;
        };

        writeln!(out, "{:width$}{}", "", entry.data(), width = level * 2)?;

        // Reversed so the first child is written next
        pending.extend(entry.children().iter().rev().map(|&child| (child, level + 1)));
    }

    Ok(())
}

/// Print `node` and its subtree to stdout
pub fn print_tree<T>(tree: &T, node: NodeId) -> io::Result<()>
where
    T: Tree + ?Sized,
    T::NodeData: Display,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_tree(&mut out, tree, node, 0)
}

/// Render `node` and its subtree to a string
pub fn render_tree<T>(tree: &T, node: NodeId) -> String
where
    T: Tree + ?Sized,
    T::NodeData: Display,
{
    let mut buffer = Vec::new();
    // Writing into a Vec<u8> cannot fail
    let _ = write_tree(&mut buffer, tree, node, 0);
    String::from_utf8_lossy(&buffer).into_owned()
}
