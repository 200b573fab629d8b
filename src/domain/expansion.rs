//! Expanded-node set and flattening of forests into display rows.

use std::collections::HashSet;

use itertools::Itertools;

use crate::domain::entities::{TreeNode, VisibleNode};

/// Set of node keys whose children are visible.
///
/// Keys are node ids, shared across all documents. Nodes without an id use
/// the empty key, so they all expand and collapse together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedSet {
    keys: HashSet<String>,
}

impl ExpandedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn is_expanded(&self, node: &TreeNode) -> bool {
        self.contains(node.expansion_key())
    }

    /// Returns true if the key was not present.
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        self.keys.insert(key.into())
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.keys.remove(key)
    }

    /// Flip a node's membership. Nodes without children are left alone.
    ///
    /// Returns true if the set changed.
    pub fn toggle(&mut self, node: &TreeNode) -> bool {
        if !node.has_children() {
            return false;
        }
        let key = node.expansion_key();
        if !self.remove(key) {
            self.insert(key);
        }
        true
    }

    /// Insert every key, returning how many were new.
    pub fn extend<I, S>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut added = 0;
        for key in keys {
            if self.keys.insert(key.into()) {
                added += 1;
            }
        }
        added
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in sorted order.
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.keys.iter().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

/// Depth-first pre-order flattening honoring the expanded set.
///
/// Roots get `level`, each child one more than its parent. Children follow
/// their parent only when the parent has children and is expanded.
pub fn flatten_tree<'a>(
    nodes: &'a [TreeNode],
    expanded: &ExpandedSet,
    level: usize,
) -> Vec<VisibleNode<'a>> {
    let mut result = Vec::new();
    push_visible(nodes, expanded, level, &mut result);
    result
}

fn push_visible<'a>(
    nodes: &'a [TreeNode],
    expanded: &ExpandedSet,
    level: usize,
    out: &mut Vec<VisibleNode<'a>>,
) {
    for node in nodes {
        out.push(VisibleNode { node, level });
        if let Some(children) = &node.children {
            if expanded.is_expanded(node) {
                push_visible(children, expanded, level + 1, out);
            }
        }
    }
}

/// Every id in the forest, in pre-order.
pub fn collect_ids(nodes: &[TreeNode]) -> Vec<&str> {
    let mut ids = Vec::new();
    let mut stack: Vec<&TreeNode> = nodes.iter().rev().collect();
    while let Some(node) = stack.pop() {
        if let Some(id) = node.id.as_deref() {
            ids.push(id);
        }
        stack.extend(node.child_nodes().iter().rev());
    }
    ids
}

/// Ids that occur more than once in the forest, sorted.
///
/// Such nodes share expansion state.
pub fn duplicate_node_ids(nodes: &[TreeNode]) -> Vec<String> {
    collect_ids(nodes)
        .into_iter()
        .duplicates()
        .sorted()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forest() -> Vec<TreeNode> {
        vec![
            TreeNode::new("A").with_id("a").with_children(vec![
                TreeNode::new("B").with_id("b").with_children(vec![TreeNode::new("D").with_id("d")]),
                TreeNode::new("C").with_id("c"),
            ]),
            TreeNode::new("E").with_id("e"),
        ]
    }

    fn labels(rows: &[VisibleNode<'_>]) -> Vec<(String, usize)> {
        rows.iter().map(|r| (r.node.label.clone(), r.level)).collect()
    }

    #[test]
    fn given_nothing_expanded_when_flattening_then_only_roots() {
        let forest = forest();
        let rows = flatten_tree(&forest, &ExpandedSet::new(), 0);
        assert_eq!(labels(&rows), vec![("A".into(), 0), ("E".into(), 0)]);
    }

    #[test]
    fn given_nested_expansion_when_flattening_then_preorder_with_levels() {
        let forest = forest();
        let mut expanded = ExpandedSet::new();
        expanded.insert("a");
        expanded.insert("b");

        let rows = flatten_tree(&forest, &expanded, 0);

        assert_eq!(
            labels(&rows),
            vec![
                ("A".into(), 0),
                ("B".into(), 1),
                ("D".into(), 2),
                ("C".into(), 1),
                ("E".into(), 0)
            ]
        );
    }

    #[test]
    fn given_collapsed_parent_when_flattening_then_expanded_child_hidden() {
        let forest = forest();
        let mut expanded = ExpandedSet::new();
        expanded.insert("b");
        let rows = flatten_tree(&forest, &expanded, 0);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn given_start_level_when_flattening_then_roots_use_it() {
        let forest = forest();
        let rows = flatten_tree(&forest, &ExpandedSet::new(), 3);
        assert!(rows.iter().all(|r| r.level == 3));
    }

    #[test]
    fn given_idless_nodes_when_empty_key_present_then_they_expand_together() {
        let forest = vec![
            TreeNode::new("x").with_children(vec![TreeNode::new("x1")]),
            TreeNode::new("y").with_children(vec![TreeNode::new("y1")]),
        ];
        let mut expanded = ExpandedSet::new();
        assert!(expanded.toggle(&forest[0]));
        assert!(expanded.contains(""));

        let rows = flatten_tree(&forest, &expanded, 0);
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn given_childless_node_when_toggling_then_unchanged() {
        let mut expanded = ExpandedSet::new();
        assert!(!expanded.toggle(&TreeNode::new("leaf").with_id("l")));
        assert!(!expanded.toggle(&TreeNode::new("empty").with_id("e").with_children(vec![])));
        assert!(expanded.is_empty());
    }

    #[test]
    fn given_forest_with_repeated_ids_when_checking_then_reports_each_once() {
        let forest = vec![TreeNode::new("r").with_id("r").with_children(vec![
            TreeNode::new("a").with_id("w"),
            TreeNode::new("b").with_id("w"),
            TreeNode::new("c").with_id("w"),
            TreeNode::new("d").with_id("r"),
        ])];
        assert_eq!(duplicate_node_ids(&forest), vec!["r".to_string(), "w".to_string()]);
        assert_eq!(collect_ids(&forest), vec!["r", "w", "w", "w", "r"]);
    }

    #[test]
    fn given_existing_keys_when_extending_then_counts_new_only() {
        let mut expanded = ExpandedSet::new();
        expanded.insert("a");
        assert_eq!(expanded.extend(["a", "b", "c"]), 2);
        assert_eq!(expanded.len(), 3);
        assert_eq!(expanded.sorted_keys(), vec!["a", "b", "c"]);

        assert!(expanded.remove("b"));
        assert!(!expanded.remove("b"));
        assert_eq!(expanded.len(), 2);
    }
}
