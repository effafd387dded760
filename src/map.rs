use std::collections::HashMap;
use std::fmt::Write as FmtWrite;

use crate::error::{GraphError, Result};
use crate::node::{Node, NodeId, NodePatch};

/// One cross-link, recorded once per unordered pair of connected nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub source: NodeId,
    pub target: NodeId,
}

impl Link {
    /// Matches the unordered pair, regardless of which side the link was
    /// recorded from.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }

    pub fn touches(&self, id: &str) -> bool {
        self.source == id || self.target == id
    }
}

/// Owner of a mind map: the root node, every node reachable from it, and
/// every cross-link between them.
///
/// All structural mutation goes through [`add_node`](MindMap::add_node),
/// [`delete_node`](MindMap::delete_node) and
/// [`update_node`](MindMap::update_node); each either fully succeeds or
/// fails without touching the map. Mutations take `&mut self`, so exclusive
/// access is enforced at compile time while shared references allow any
/// number of concurrent readers.
#[derive(Debug, Clone)]
pub struct MindMap {
    root: NodeId,
    nodes: HashMap<NodeId, Node>,
    order: Vec<NodeId>,
    links: Vec<Link>,
}

impl MindMap {
    /// Creates a map containing only `root`.
    pub fn new(root: Node) -> Self {
        let root_id = root.id.clone();
        let mut nodes = HashMap::new();
        nodes.insert(root_id.clone(), root);
        Self {
            root: root_id.clone(),
            nodes,
            order: vec![root_id],
            links: Vec::new(),
        }
    }

    /// Id of the designated root. Fixed at construction.
    pub fn root_id(&self) -> &str {
        &self.root
    }

    /// The root node, or `None` if a caller ignored the "do not delete the
    /// root" precondition of [`delete_node`](MindMap::delete_node).
    pub fn root(&self) -> Option<&Node> {
        self.nodes.get(&self.root)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Mutable access to a node's display fields. Relationship fields stay
    /// sealed: they are not reachable through the returned reference.
    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// All nodes in insertion order, root first.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// All cross-links, one entry per unordered connection pair.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Attaches `node` under `parent` and cross-links it to every id in
    /// `connections`.
    ///
    /// Preconditions are checked before anything is written: the parent and
    /// every connection target must already be members, the node's id must
    /// not be, and no connection target may be listed twice. On error the
    /// map is left unchanged.
    pub fn add_node(&mut self, node: Node, parent: &str, connections: &[&str]) -> Result<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(GraphError::DuplicateNode(node.id));
        }
        if !self.nodes.contains_key(parent) {
            return Err(GraphError::UnknownParent(parent.to_string()));
        }
        for (idx, connection) in connections.iter().enumerate() {
            if !self.nodes.contains_key(*connection) {
                return Err(GraphError::UnknownConnection(connection.to_string()));
            }
            if connections[..idx].contains(connection) {
                return Err(GraphError::DuplicateConnection(connection.to_string()));
            }
        }

        let mut node = node;
        let id = node.id.clone();
        node.parent = Some(parent.to_string());
        node.connections = connections.iter().map(|c| c.to_string()).collect();

        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.push(id.clone());
        }
        for connection in connections {
            if let Some(peer) = self.nodes.get_mut(*connection) {
                peer.connections.push(id.clone());
            }
            self.links.push(Link {
                source: id.clone(),
                target: connection.to_string(),
            });
        }

        self.order.push(id.clone());
        self.nodes.insert(id, node);
        Ok(())
    }

    /// Removes `id` and, transitively, every node in its subtree, along
    /// with all cross-links touching any of them.
    ///
    /// Deleting an id that is not a member is a silent no-op and returns
    /// `false`. Deleting the root is structurally possible but leaves the
    /// map without a valid root; callers must not do it.
    pub fn delete_node(&mut self, id: &str) -> bool {
        if !self.nodes.contains_key(id) {
            return false;
        }
        self.remove_subtree(id);
        true
    }

    fn remove_subtree(&mut self, id: &str) {
        let Some(node) = self.nodes.remove(id) else {
            return;
        };
        self.order.retain(|entry| entry != id);

        if let Some(parent_id) = &node.parent {
            if let Some(parent) = self.nodes.get_mut(parent_id) {
                parent.children.retain(|child| child != id);
            }
        }

        for connection in &node.connections {
            if let Some(peer) = self.nodes.get_mut(connection) {
                peer.connections.retain(|entry| entry != id);
            }
            // Either orientation: the link may have been recorded from the
            // other side when this node was the connection target.
            self.links.retain(|link| !link.connects(id, connection));
        }

        for child in &node.children {
            self.remove_subtree(child);
        }
    }

    /// Merges `patch` into the node's display fields. `title` and `text`
    /// overwrite when present; extra attributes are shallow-merged key by
    /// key. Structure (`id`, parent, children, connections) is untouchable
    /// here: [`NodePatch`] cannot express it.
    pub fn update_node(&mut self, id: &str, patch: NodePatch) -> Result<()> {
        let node = self
            .nodes
            .get_mut(id)
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))?;

        if let Some(title) = patch.title {
            node.title = title;
        }
        if let Some(text) = patch.text {
            node.text = text;
        }
        for (key, value) in patch.attrs {
            node.attrs.insert(key, value);
        }
        Ok(())
    }

    /// Indented plain-text outline of the tree, followed by the cross-link
    /// list. Meant for terminal output; graphical rendering belongs to
    /// external visualization libraries fed by
    /// [`RenderTree`](crate::RenderTree).
    pub fn outline(&self) -> String {
        let mut out = String::new();
        if let Some(root) = self.root() {
            self.write_outline(root, 0, &mut out);
        }
        if !self.links.is_empty() {
            out.push('\n');
            for link in &self.links {
                let _ = writeln!(out, "{} <-> {}", link.source, link.target);
            }
        }
        out
    }

    fn write_outline(&self, node: &Node, depth: usize, out: &mut String) {
        let _ = writeln!(out, "{}- {}", "  ".repeat(depth), node.title);
        for child in &node.children {
            if let Some(child_node) = self.nodes.get(child) {
                self.write_outline(child_node, depth + 1, out);
            }
        }
    }
}
