use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// Caller-supplied node identifier. Uniqueness within one map is a
/// precondition of [`MindMap::add_node`](crate::MindMap::add_node) and is
/// checked there.
pub type NodeId = String;

/// Extra attribute value. The original design carried an untyped open bag
/// here; constraining values to these three shapes keeps patches and
/// snapshots checkable without giving up the extension point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

/// One mind-map entry.
///
/// A node starts standalone (no parent, no children, no connections) and
/// only becomes part of a tree through
/// [`MindMap::add_node`](crate::MindMap::add_node). Identity and the
/// relationship fields are crate-private: reading goes through
/// [`id`](Node::id), [`parent`](Node::parent), [`children`](Node::children)
/// and [`connections`](Node::connections), writing only ever happens inside
/// [`MindMap`](crate::MindMap). `title`, `text` and `attrs` are plain
/// public fields and may be edited directly.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) id: NodeId,
    pub title: String,
    pub text: String,
    pub attrs: BTreeMap<String, AttrValue>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) connections: Vec<NodeId>,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            text: text.into(),
            attrs: BTreeMap::new(),
            parent: None,
            children: Vec::new(),
            connections: Vec::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: AttrValue) -> Self {
        self.attrs.insert(key.into(), value);
        self
    }

    /// Caller-supplied identity. Fixed for the life of the node.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Id of the owning parent, `None` for the root.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Child ids in display order (insertion order).
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Ids of the nodes this node is cross-linked to. Symmetric: `b` shows
    /// up here exactly when this node shows up in `b`'s connections.
    pub fn connections(&self) -> &[NodeId] {
        &self.connections
    }
}

/// The structural field names a patch may never carry.
const STRUCTURAL_FIELDS: [&str; 4] = ["id", "parent", "children", "connections"];

/// Whitelisted update for [`MindMap::update_node`](crate::MindMap::update_node).
///
/// A patch can only express display fields, so structural invariants cannot
/// be broken through a generic merge: there is simply no way to write
/// `parent`, `children`, `connections` or `id` into one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodePatch {
    pub title: Option<String>,
    pub text: Option<String>,
    pub attrs: BTreeMap<String, AttrValue>,
}

impl NodePatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: AttrValue) -> Self {
        self.attrs.insert(key.into(), value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.text.is_none() && self.attrs.is_empty()
    }

    /// Parses a flat JSON object into a patch.
    ///
    /// `"title"` and `"text"` must be strings; any other key becomes an
    /// extra attribute. Keys naming structural fields are rejected with
    /// [`GraphError::StructuralField`] instead of being merged, which is
    /// the routing the in-code builder enforces by construction.
    pub fn from_json(raw: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|err| GraphError::MalformedPatch(err.to_string()))?;

        let serde_json::Value::Object(entries) = value else {
            return Err(GraphError::MalformedPatch(
                "patch must be a JSON object".to_string(),
            ));
        };

        let mut patch = NodePatch::default();
        for (key, value) in entries {
            if STRUCTURAL_FIELDS.contains(&key.as_str()) {
                return Err(GraphError::StructuralField(key));
            }

            match key.as_str() {
                "title" | "text" => {
                    let serde_json::Value::String(text) = value else {
                        return Err(GraphError::MalformedPatch(format!(
                            "'{key}' must be a string"
                        )));
                    };
                    if key == "title" {
                        patch.title = Some(text);
                    } else {
                        patch.text = Some(text);
                    }
                }
                _ => {
                    patch.attrs.insert(key, attr_from_json(value)?);
                }
            }
        }

        Ok(patch)
    }
}

fn attr_from_json(value: serde_json::Value) -> Result<AttrValue> {
    match value {
        serde_json::Value::Bool(flag) => Ok(AttrValue::Flag(flag)),
        serde_json::Value::Number(number) => number
            .as_f64()
            .map(AttrValue::Number)
            .ok_or_else(|| GraphError::MalformedPatch(format!("unsupported number '{number}'"))),
        serde_json::Value::String(text) => Ok(AttrValue::Text(text)),
        other => Err(GraphError::MalformedPatch(format!(
            "unsupported attribute value '{other}'"
        ))),
    }
}
