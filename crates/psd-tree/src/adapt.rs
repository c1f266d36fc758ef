// src/adapt.rs

//! The single adapter from the `psd` crate's document model to [`LayerNode`].
//!
//! The library exposes layers and groups as flat collections linked by
//! parent ids; this module reassembles them into the nested tree the rest
//! of the crate (and the renderer) works with. Group ids are assigned in
//! document order during parsing, so ascending id order reproduces the
//! order groups appear in the file; layers keep their parsed order.

use std::collections::HashMap;

use psd::Psd;

use crate::node::LayerNode;

/// Build the nested layer tree for a parsed document.
///
/// Returns the root-level nodes in document order (groups first within each
/// parent, then loose layers).
pub fn tree_from_psd(psd: &Psd) -> Vec<LayerNode> {
    // Child group ids per parent (None = document root), ascending.
    let mut child_groups: HashMap<Option<u32>, Vec<u32>> = HashMap::new();
    let mut group_ids: Vec<u32> = psd.groups().keys().copied().collect();
    group_ids.sort_unstable();

    for id in &group_ids {
        let group = &psd.groups()[id];
        child_groups.entry(group.parent_id()).or_default().push(*id);
    }

    // Leaf layers per parent, in parsed order.
    let mut child_layers: HashMap<Option<u32>, Vec<LayerNode>> = HashMap::new();
    for layer in psd.layers() {
        child_layers
            .entry(layer.parent_id())
            .or_default()
            .push(LayerNode::layer(layer.name(), layer.visible()));
    }

    build_children(psd, None, &child_groups, &mut child_layers)
}

fn build_children(
    psd: &Psd,
    parent: Option<u32>,
    child_groups: &HashMap<Option<u32>, Vec<u32>>,
    child_layers: &mut HashMap<Option<u32>, Vec<LayerNode>>,
) -> Vec<LayerNode> {
    let mut children = Vec::new();

    if let Some(group_ids) = child_groups.get(&parent) {
        for id in group_ids {
            let group = &psd.groups()[id];
            let grandchildren = build_children(psd, Some(*id), child_groups, child_layers);
            children.push(LayerNode::group(
                group.name(),
                group.visible(),
                grandchildren,
            ));
        }
    }

    if let Some(layers) = child_layers.remove(&parent) {
        children.extend(layers);
    }

    children
}
