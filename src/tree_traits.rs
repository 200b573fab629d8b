//! Conversion of documents into `termtree` trees for outline display.

use termtree::Tree;
use tracing::instrument;

use crate::domain::{Document, TreeNode};

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for TreeNode {
    fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = self
            .child_nodes()
            .iter()
            .map(|c| c.to_tree_string())
            .collect();

        Tree::new(self.to_string()).with_leaves(leaves)
    }
}

impl TreeNodeConvert for Document {
    #[instrument(level = "debug", skip(self), fields(id = %self.id))]
    fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = self.tree_data.iter().map(|n| n.to_tree_string()).collect();
        Tree::new(self.name.clone()).with_leaves(leaves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_document_when_converting_then_renders_every_node() {
        let doc = Document::new(
            "d",
            "Doc",
            vec![TreeNode::new("root")
                .with_id("r")
                .with_children(vec![TreeNode::new("a"), TreeNode::new("b").with_id("b")])],
        );

        let rendered = doc.to_tree_string().to_string();

        assert!(rendered.starts_with("Doc\n"));
        assert!(rendered.contains("root [r]"));
        assert!(rendered.contains("├── a"));
        assert!(rendered.contains("└── b [b]"));
    }
}
