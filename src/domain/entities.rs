//! Domain entities: core data structures

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Icon used for nodes with children when the node carries no icon of its own.
pub const DEFAULT_CONTAINER_ICON: &str = "folder";
/// Icon used for leaf nodes when the node carries no icon of its own.
pub const DEFAULT_LEAF_ICON: &str = "description";

/// A labeled node in a document forest.
///
/// Nodes are immutable once handed to the store. Filtering produces copies,
/// expansion state lives outside the node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Identity for expand/collapse. Expected to be unique forest-wide.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    /// Leaf node without id or icon.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            id: None,
            children: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = Some(children);
        self
    }

    /// True if children are present and non-empty.
    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Children as a slice; empty for leaves.
    pub fn child_nodes(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Key under which this node's expansion state is tracked.
    ///
    /// Nodes without an id all share the empty key.
    pub fn expansion_key(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }

    /// Case-insensitive substring match against an already lower-cased needle.
    pub(crate) fn label_matches(&self, needle: &str) -> bool {
        self.label.to_lowercase().contains(needle)
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{} [{}]", self.label, id),
            None => write!(f, "{}", self.label),
        }
    }
}

/// A named forest owned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    #[serde(rename = "treeData", default)]
    pub tree_data: Vec<TreeNode>,
}

impl Document {
    pub fn new(id: impl Into<String>, name: impl Into<String>, tree_data: Vec<TreeNode>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tree_data,
        }
    }

    /// Document with a freshly generated id.
    pub fn with_generated_id(name: impl Into<String>, tree_data: Vec<TreeNode>) -> Self {
        Self::new(Uuid::new_v4().to_string(), name, tree_data)
    }

    pub(crate) fn name_matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

/// A node as it appears in the flattened display list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleNode<'a> {
    pub node: &'a TreeNode,
    /// Depth below the forest root, roots are level 0.
    pub level: usize,
}

/// Icons picked for nodes that don't carry their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconTheme {
    pub container: String,
    pub leaf: String,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            container: DEFAULT_CONTAINER_ICON.into(),
            leaf: DEFAULT_LEAF_ICON.into(),
        }
    }
}

impl IconTheme {
    /// Own icon, else container icon for nodes with children, else leaf icon.
    pub fn icon_for<'a>(&'a self, node: &'a TreeNode) -> &'a str {
        if let Some(icon) = node.icon.as_deref() {
            return icon;
        }
        if node.has_children() {
            &self.container
        } else {
            &self.leaf
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_children_when_checking_has_children_then_false() {
        let node = TreeNode::new("x").with_children(vec![]);
        assert!(!node.has_children());
        assert!(!TreeNode::new("y").has_children());
        assert!(TreeNode::new("z")
            .with_children(vec![TreeNode::new("c")])
            .has_children());
    }

    #[test]
    fn given_node_without_id_when_getting_key_then_empty() {
        assert_eq!(TreeNode::new("x").expansion_key(), "");
        assert_eq!(TreeNode::new("x").with_id("a").expansion_key(), "a");
    }

    #[test]
    fn given_default_theme_when_picking_icons_then_follows_precedence() {
        let theme = IconTheme::default();
        let own = TreeNode::new("k").with_icon("key").with_children(vec![TreeNode::new("c")]);
        let folder = TreeNode::new("f").with_children(vec![TreeNode::new("c")]);
        let leaf = TreeNode::new("l").with_children(vec![]);

        assert_eq!(theme.icon_for(&own), "key");
        assert_eq!(theme.icon_for(&folder), "folder");
        assert_eq!(theme.icon_for(&leaf), "description");
    }

    #[test]
    fn given_document_json_when_deserializing_then_reads_tree_data() {
        let json = r#"{"id":"d","name":"N","treeData":[{"label":"a","id":"a","children":[{"label":"b"}]}]}"#;
        let doc: Document = serde_json::from_str(json).expect("parse document");
        assert_eq!(doc.tree_data.len(), 1);
        assert_eq!(doc.tree_data[0].child_nodes()[0].label, "b");
        assert_eq!(doc.tree_data[0].child_nodes()[0].id, None);
    }

    #[test]
    fn given_generated_id_when_creating_documents_then_ids_differ() {
        let a = Document::with_generated_id("a", vec![]);
        let b = Document::with_generated_id("b", vec![]);
        assert_ne!(a.id, b.id);
    }
}
