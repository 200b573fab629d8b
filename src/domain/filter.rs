//! Search filtering over document forests.
//!
//! Filtering is pure: it returns the pruned forest together with the ids of
//! branches that contain a match. Applying those ids to the expanded set is
//! the caller's job.

use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::domain::entities::{Document, TreeNode};

/// Normalized search needle, `None` for an empty or whitespace-only query.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Result of filtering a forest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeFilter {
    /// Matching nodes, in input order.
    pub nodes: Vec<TreeNode>,
    /// Ids of included nodes whose descendants matched.
    pub expand: BTreeSet<String>,
}

/// Filter `nodes` by a lower-cased needle.
///
/// A node is kept if its label matches or any descendant does. A kept node
/// with matching descendants gets the filtered children; a node that only
/// matches itself keeps its original, unfiltered subtree.
pub fn filter_tree(nodes: &[TreeNode], needle: &str) -> TreeFilter {
    let mut expand = BTreeSet::new();
    let nodes = filter_nodes(nodes, needle, &mut expand);
    TreeFilter { nodes, expand }
}

fn filter_nodes(nodes: &[TreeNode], needle: &str, expand: &mut BTreeSet<String>) -> Vec<TreeNode> {
    let mut result = Vec::new();

    for node in nodes {
        let node_matches = node.label_matches(needle);
        let child_matches = match &node.children {
            Some(children) => filter_nodes(children, needle, expand),
            None => Vec::new(),
        };

        if !node_matches && child_matches.is_empty() {
            continue;
        }

        let children = if child_matches.is_empty() {
            node.children.clone()
        } else {
            if let Some(id) = &node.id {
                expand.insert(id.clone());
            }
            Some(child_matches)
        };

        result.push(TreeNode {
            label: node.label.clone(),
            icon: node.icon.clone(),
            id: node.id.clone(),
            children,
        });
    }

    result
}

/// Result of filtering a document collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFilter<'a> {
    /// Borrowed when the query is empty, owned otherwise.
    pub documents: Cow<'a, [Document]>,
    pub expand: BTreeSet<String>,
}

/// Filter a document collection by a raw query.
///
/// Documents whose name matches are included whole. Other documents are
/// included with a filtered forest, or dropped when nothing matches.
pub fn filter_documents<'a>(documents: &'a [Document], query: &str) -> DocumentFilter<'a> {
    let Some(needle) = normalize_query(query) else {
        return DocumentFilter {
            documents: Cow::Borrowed(documents),
            expand: BTreeSet::new(),
        };
    };

    let mut expand = BTreeSet::new();
    let mut filtered = Vec::new();

    for doc in documents {
        if doc.name_matches(&needle) {
            filtered.push(doc.clone());
            continue;
        }

        let tree = filter_tree(&doc.tree_data, &needle);
        if !tree.nodes.is_empty() {
            expand.extend(tree.expand);
            filtered.push(Document {
                id: doc.id.clone(),
                name: doc.name.clone(),
                tree_data: tree.nodes,
            });
        }
    }

    DocumentFilter {
        documents: Cow::Owned(filtered),
        expand,
    }
}
