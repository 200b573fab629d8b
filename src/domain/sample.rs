//! Built-in sample document seeded into a fresh store.

use crate::domain::entities::{Document, TreeNode};

pub const SAMPLE_DOCUMENT_ID: &str = "doc1";

/// The credential collection shown on first start.
///
/// Note: `waiter` is used by two key entries, so they expand together.
pub fn sample_document() -> Document {
    let name = "保存的文档(账号密码合集)";

    let host_100 = TreeNode::new("物理机: 192.168.1.100")
        .with_icon("folder")
        .with_id("server-100")
        .with_children(vec![
            TreeNode::new("物理机本身: 192.168.1.100").with_id("physical-100"),
            TreeNode::new("虚拟机1: 192.168.10.1").with_id("vm1-100"),
            TreeNode::new("虚拟机2: 192.168.10.2").with_id("vm2-100"),
        ]);

    let links = TreeNode::new("链接列表")
        .with_icon("folder")
        .with_id("links")
        .with_children(vec![
            host_100,
            TreeNode::new("物理机: 192.168.1.101").with_id("server-101"),
        ]);

    let keys = TreeNode::new("秘钥列表")
        .with_icon("key")
        .with_id("keys")
        .with_children(vec![
            TreeNode::new("通用密码_root").with_id("prompt"),
            TreeNode::new("通用密码_admin").with_id("waiter"),
            TreeNode::new("项目A通用秘钥").with_id("waiter"),
        ]);

    Document::new(
        SAMPLE_DOCUMENT_ID,
        name,
        vec![TreeNode::new(name)
            .with_id("root")
            .with_children(vec![links, keys])],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::duplicate_node_ids;

    #[test]
    fn given_sample_when_inspecting_then_has_single_root_with_two_groups() {
        let doc = sample_document();
        assert_eq!(doc.id, SAMPLE_DOCUMENT_ID);
        assert_eq!(doc.tree_data.len(), 1);
        assert_eq!(doc.tree_data[0].child_nodes().len(), 2);
        assert_eq!(doc.tree_data[0].label, doc.name);
    }

    #[test]
    fn given_sample_when_checking_ids_then_waiter_is_shared() {
        assert_eq!(duplicate_node_ids(&sample_document().tree_data), vec!["waiter"]);
    }
}
