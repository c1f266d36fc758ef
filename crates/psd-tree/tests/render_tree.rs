// tests/render_tree.rs

use psd_tree::node::LayerNode;
use psd_tree::render::render_tree;

#[test]
fn single_layer_renders_as_last_child() {
    let nodes = vec![LayerNode::layer("Background", true)];

    assert_eq!(render_tree(&nodes), "`-- [V] Background\n");
}

#[test]
fn hidden_nodes_are_marked() {
    let nodes = vec![
        LayerNode::layer("Visible", true),
        LayerNode::layer("Hidden", false),
    ];

    let rendered = render_tree(&nodes);
    assert_eq!(rendered, "|-- [V] Visible\n`-- [H] Hidden\n");
}

#[test]
fn nested_groups_use_rails_and_corners() {
    let nodes = vec![
        LayerNode::group(
            "Scene",
            true,
            vec![
                LayerNode::layer("Background", true),
                LayerNode::group(
                    "Characters",
                    true,
                    vec![
                        LayerNode::layer("Hero", true),
                        LayerNode::layer("Sidekick", false),
                    ],
                ),
            ],
        ),
        LayerNode::layer("Title", true),
    ];

    let expected = "\
|-- [V] Scene
|   |-- [V] Background
|   `-- [V] Characters
|       |-- [V] Hero
|       `-- [H] Sidekick
`-- [V] Title
";

    assert_eq!(render_tree(&nodes), expected);
}

#[test]
fn empty_group_renders_without_children() {
    let nodes = vec![LayerNode::group("Empty", false, vec![])];

    assert_eq!(render_tree(&nodes), "`-- [H] Empty\n");
}

#[test]
fn empty_forest_renders_to_nothing() {
    assert_eq!(render_tree(&[]), "");
}
