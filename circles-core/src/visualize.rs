//! Graphviz DOT visualization of the friendship graph.
//!
//! Uses a pre-allocated buffer and the `std::fmt::Write` trait for
//! formatting.

use std::fmt::Write;

use tracing::error;

use crate::graph::circle_depths;
use crate::index::PersonIndex;

/// Fill colors cycled per circle depth.
const CIRCLE_COLORS: [&str; 4] = ["gold", "lightgreen", "lightblue", "plum"];

/// Generate a Graphviz DOT representation of the friendship graph.
///
/// - best friends are gold, later circles cycle through the palette
/// - unreached people are lightgray
/// - reached nodes are labelled with their circle depth
pub fn generate_dot(index: &PersonIndex) -> String {
    let edge_count: usize = index.people().iter().map(|p| p.friends.len()).sum();
    let mut dot = String::with_capacity(index.len() * 80 + edge_count * 40 + 150);

    if let Err(e) = write_dot_content(&mut dot, index) {
        error!(error = %e, "failed to generate DOT string");
        return "digraph circles {\n}\n".to_string();
    }

    dot
}

/// Escapes a name for use inside a double-quoted DOT identifier.
fn escape_dot(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}

fn write_dot_content(dot: &mut String, index: &PersonIndex) -> std::fmt::Result {
    let depths = circle_depths(index);
    let people = index.people();

    writeln!(dot, "digraph circles {{")?;
    writeln!(dot, "  rankdir=TB;")?;
    writeln!(dot, "  node [shape=ellipse, style=filled, fontname=\"JetBrains Mono\"];")?;
    writeln!(dot)?;

    for person in &people {
        let id = escape_dot(&person.name);
        match depths.get(person.name.as_str()) {
            Some(&depth) => writeln!(
                dot,
                "  \"{}\" [fillcolor={}, label=\"{}\\n{}\"];",
                id,
                CIRCLE_COLORS[depth % CIRCLE_COLORS.len()],
                id,
                depth
            )?,
            None => writeln!(dot, "  \"{}\" [fillcolor=lightgray];", id)?,
        }
    }

    writeln!(dot)?;

    for person in &people {
        for friend in &person.friends {
            if index.contains(friend) {
                writeln!(
                    dot,
                    "  \"{}\" -> \"{}\";",
                    escape_dot(&person.name),
                    escape_dot(friend)
                )?;
            }
        }
    }

    writeln!(dot, "}}")?;
    Ok(())
}
