//! Tests for ServiceContainer wiring: seeding, icons and document files

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use doctree::config::Settings;
use doctree::domain::{IconTheme, TreeNode, SAMPLE_DOCUMENT_ID};
use doctree::infrastructure::di::ServiceContainer;
use doctree::infrastructure::traits::RealFileSystem;
use doctree::infrastructure::InfraError;
use doctree::util::testing;

const DOCS_JSON: &str = r#"[
  {
    "id": "ops",
    "name": "Ops",
    "treeData": [
      {"label": "Routers", "id": "routers", "children": [
        {"label": "edge-1", "id": "edge-1"}
      ]}
    ]
  }
]"#;

fn build(settings: Settings) -> Result<ServiceContainer, InfraError> {
    testing::init_test_setup();
    ServiceContainer::with_deps(settings, Arc::new(RealFileSystem), None)
}

#[test]
fn given_default_settings_when_building_then_sample_seeded() {
    let container = build(Settings::default()).expect("container");

    let ids: Vec<_> = container.store.documents().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec![SAMPLE_DOCUMENT_ID]);
    assert!(container.view.is_left_drawer_open());
    assert!(container.app.is_window_active());
}

#[test]
fn given_documents_file_when_building_then_appended_after_sample() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("docs.json");
    fs::write(&path, DOCS_JSON).unwrap();

    let container = build(Settings {
        documents_file: Some(path),
        ..Settings::default()
    })
    .expect("container");

    let ids: Vec<_> = container.store.documents().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec![SAMPLE_DOCUMENT_ID, "ops"]);
}

#[test]
fn given_seed_disabled_when_building_then_only_file_documents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("docs.json");
    fs::write(&path, DOCS_JSON).unwrap();

    let mut container = build(Settings {
        seed_sample: false,
        documents_file: Some(path),
        ..Settings::default()
    })
    .expect("container");

    assert_eq!(container.store.documents().len(), 1);

    container.store.set_search_query("EDGE");
    let views = container.store.visible_documents();
    let labels: Vec<_> = views[0].rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["Routers", "edge-1"]);
}

#[test]
fn given_missing_documents_file_when_building_then_io_error() {
    let dir = TempDir::new().unwrap();

    let result = build(Settings {
        documents_file: Some(dir.path().join("absent.json")),
        ..Settings::default()
    });

    assert!(matches!(result, Err(InfraError::Io { .. })));
}

#[test]
fn given_invalid_json_when_building_then_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("docs.json");
    fs::write(&path, "{ not json").unwrap();

    let result = build(Settings {
        documents_file: Some(path),
        ..Settings::default()
    });

    assert!(matches!(result, Err(InfraError::Parse { .. })));
}

#[test]
fn given_file_reusing_sample_id_when_building_then_application_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("docs.json");
    fs::write(
        &path,
        format!(r#"{{"id": "{SAMPLE_DOCUMENT_ID}", "name": "Clash", "treeData": []}}"#),
    )
    .unwrap();

    let result = build(Settings {
        documents_file: Some(path),
        ..Settings::default()
    });

    let err = result.err().expect("duplicate id rejected");
    assert!(matches!(err, InfraError::Application(_)));
    assert!(err.to_string().contains(SAMPLE_DOCUMENT_ID));
}

#[test]
fn given_icon_theme_when_building_then_store_uses_it() {
    let container = build(Settings {
        icons: IconTheme {
            container: "dir".into(),
            leaf: "file".into(),
        },
        ..Settings::default()
    })
    .expect("container");

    assert_eq!(container.store.icons(), &container.settings.icons);
    assert_eq!(container.store.icon(&TreeNode::new("x")), "file");
    assert_eq!(
        container
            .store
            .icon(&TreeNode::new("x").with_children(vec![TreeNode::new("y")])),
        "dir"
    );
}
