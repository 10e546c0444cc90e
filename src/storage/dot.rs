//! Graphviz DOT serialisation of a [`DependencyGraph`].

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use tracing::info;

use crate::domain::DependencyGraph;

/// Writes `graph` as a DOT digraph named `Dependencies`.
///
/// One `<from> -> <to>` line is written per edge, in edge order. Identifiers
/// are written verbatim.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_dot<W: Write>(writer: &mut W, graph: &DependencyGraph) -> io::Result<()> {
    writer.write_all(to_dot(graph).as_bytes())
}

/// Renders `graph` as a DOT string.
#[must_use]
pub fn to_dot(graph: &DependencyGraph) -> String {
    let mut dot = String::from("digraph Dependencies {\n");
    for edge in graph {
        dot.push_str(&edge.from);
        dot.push_str(" -> ");
        dot.push_str(&edge.to);
        dot.push('\n');
    }
    dot.push_str("}\n");
    dot
}

/// Writes `graph` to a DOT file at `path`, creating or truncating it.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
pub fn save(path: &Path, graph: &DependencyGraph) -> io::Result<()> {
    info!("Generating DOT file: {}", path.display());

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_dot(&mut writer, graph)?;
    writer.flush()
}
