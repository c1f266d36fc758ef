// src/render.rs

//! Pure tree rendering.
//!
//! Produces the printable tree as a `String` so it can be tested without a
//! real PSD document:
//!
//! ```text
//! |-- [V] Scene
//! |   |-- [V] Background
//! |   `-- [H] Old background
//! `-- [V] Title
//! ```

use crate::node::LayerNode;

/// Render a forest of root-level nodes.
pub fn render_tree(nodes: &[LayerNode]) -> String {
    let mut out = String::new();
    for (i, node) in nodes.iter().enumerate() {
        render_node(node, "", i == nodes.len() - 1, &mut out);
    }
    out
}

fn render_node(node: &LayerNode, lead: &str, is_last: bool, out: &mut String) {
    let branch = if is_last { "`-- " } else { "|-- " };
    let marker = if node.visible { "[V]" } else { "[H]" };
    out.push_str(lead);
    out.push_str(branch);
    out.push_str(marker);
    out.push(' ');
    out.push_str(&node.name);
    out.push('\n');

    // Continuation under a last child is blank; otherwise the vertical rail.
    let child_lead = format!("{lead}{}", if is_last { "    " } else { "|   " });
    for (i, child) in node.children.iter().enumerate() {
        render_node(child, &child_lead, i == node.children.len() - 1, out);
    }
}
