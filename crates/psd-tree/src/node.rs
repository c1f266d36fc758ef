// src/node.rs

//! The internal document-node model.
//!
//! Everything downstream of the adapter works against this fixed contract:
//! a node has a name, a visibility flag, a kind (group vs layer), and, if a
//! group, an ordered sequence of child nodes. The parsing library's actual
//! API is adapted to this shape exactly once, in [`crate::adapt`].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Group,
    Layer,
}

/// One node of the layer tree.
#[derive(Debug, Clone)]
pub struct LayerNode {
    pub name: String,
    pub visible: bool,
    pub kind: NodeKind,
    /// Ordered children; always empty for `NodeKind::Layer`.
    pub children: Vec<LayerNode>,
}

impl LayerNode {
    pub fn group(name: impl Into<String>, visible: bool, children: Vec<LayerNode>) -> Self {
        Self {
            name: name.into(),
            visible,
            kind: NodeKind::Group,
            children,
        }
    }

    pub fn layer(name: impl Into<String>, visible: bool) -> Self {
        Self {
            name: name.into(),
            visible,
            kind: NodeKind::Layer,
            children: Vec::new(),
        }
    }
}
