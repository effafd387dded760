use serde::Serialize;

use crate::map::MindMap;
use crate::node::Node;

/// Read-only snapshot of a map in the shape visualization libraries expect:
/// a nested hierarchy for tree layouts plus a flat cross-edge list.
///
/// The snapshot borrows nothing and carries no layout data; positioning,
/// styling and drawing are entirely the consumer's concern.
#[derive(Debug, Clone, Serialize)]
pub struct RenderTree {
    pub root: RenderNode,
    pub links: Vec<RenderLink>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderNode {
    pub id: String,
    pub title: String,
    pub text: String,
    pub children: Vec<RenderNode>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderLink {
    pub source: String,
    pub target: String,
}

impl RenderTree {
    /// Snapshots `map`, or `None` when the map has lost its root.
    pub fn from_map(map: &MindMap) -> Option<Self> {
        let root = map.root()?;
        Some(Self {
            root: render_node(map, root),
            links: map
                .links()
                .iter()
                .map(|link| RenderLink {
                    source: link.source.clone(),
                    target: link.target.clone(),
                })
                .collect(),
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn render_node(map: &MindMap, node: &Node) -> RenderNode {
    RenderNode {
        id: node.id.clone(),
        title: node.title.clone(),
        text: node.text.clone(),
        children: node
            .children()
            .iter()
            .filter_map(|child| map.node(child))
            .map(|child| render_node(map, child))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    #[test]
    fn snapshot_mirrors_hierarchy_and_links() {
        let mut map = MindMap::new(Node::new("r", "Root", ""));
        map.add_node(Node::new("a", "A", ""), "r", &[]).unwrap();
        map.add_node(Node::new("b", "B", ""), "a", &["a"]).unwrap();

        let tree = RenderTree::from_map(&map).unwrap();
        assert_eq!(tree.root.id, "r");
        assert_eq!(tree.root.children.len(), 1);
        assert_eq!(tree.root.children[0].id, "a");
        assert_eq!(tree.root.children[0].children[0].id, "b");
        assert_eq!(tree.links.len(), 1);
        assert_eq!(tree.links[0].source, "b");
        assert_eq!(tree.links[0].target, "a");
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let map = MindMap::new(Node::new("r", "Root", "the one node"));
        let json = RenderTree::from_map(&map).unwrap().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["root"]["title"], "Root");
        assert!(value["links"].as_array().unwrap().is_empty());
    }
}
