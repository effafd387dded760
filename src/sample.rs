//! The hardcoded demo map: a small mind map about mind-map software.
//! Used by the CLI and as a fixture in tests.

use crate::map::MindMap;
use crate::node::Node;

/// Builds the demo map: three branches under the root, one cross-link
/// ("Share" relates to the "Pros" branch).
pub fn sample_map() -> MindMap {
    let mut map = MindMap::new(Node::new(
        "mindmap",
        "Mind Map",
        "A small mind-mapping demo",
    ));

    let entries: [(&str, &str, &str, &str, &[&str]); 12] = [
        ("features", "Features", "What the software can do", "mindmap", &[]),
        ("pros", "Pros", "Why it helps", "mindmap", &[]),
        ("cons", "Cons", "Where it falls short", "mindmap", &[]),
        ("create", "Create", "Create new maps", "features", &[]),
        ("edit", "Edit", "Edit existing maps", "features", &[]),
        ("save", "Save", "Save maps for later", "features", &[]),
        ("share", "Share", "Share maps with others", "features", &["pros"]),
        ("visual", "Visual", "Shows information at a glance", "pros", &[]),
        ("flexible", "Flexible", "Organizes information freely", "pros", &[]),
        ("efficient", "Efficient", "Processes information quickly", "pros", &[]),
        ("complex", "Complex", "Large maps get hard to read", "cons", &[]),
        ("limited", "Limited", "Not every idea fits a tree", "cons", &[]),
    ];

    for (id, title, text, parent, connections) in entries {
        map.add_node(Node::new(id, title, text), parent, connections)
            .expect("sample map entries are consistent");
    }

    map
}
