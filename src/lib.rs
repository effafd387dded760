//! In-memory mind-map graphs: a tree of titled nodes plus free-form
//! symmetric cross-links ("connections") between arbitrary nodes.
//!
//! [`MindMap`] owns every node and every cross-link and is the only place
//! structural relationships (parent, children, connections) can change.
//! Display fields on a [`Node`] (title, text, extra attributes) are freely
//! mutable; relationship fields are sealed behind read-only accessors so
//! the tree and link bookkeeping cannot drift out of sync.
//!
//! Layout and drawing are deliberately out of scope. [`RenderTree`] exposes
//! the hierarchy and cross-edges as a serializable snapshot that any
//! visualization library (d3-style radial trees, force graphs, ...) can
//! consume as-is.

mod error;
mod map;
mod node;
mod render;
pub mod sample;

pub use error::{GraphError, Result};
pub use map::{Link, MindMap};
pub use node::{AttrValue, Node, NodeId, NodePatch};
pub use render::{RenderLink, RenderNode, RenderTree};
