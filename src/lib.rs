//! doctree: searchable document-tree store
//!
//! A collection of documents, each a forest of labeled nodes, that can be
//! filtered by a case-insensitive query and flattened into display rows
//! according to per-node expand/collapse state.
//!
//! ```
//! use doctree::application::services::DocumentStore;
//!
//! let mut store = DocumentStore::new();
//! store.set_search_query("192.168.10");
//! for view in store.visible_documents() {
//!     for row in &view.rows {
//!         println!("{}{}", "  ".repeat(row.level), row.label);
//!     }
//! }
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod tree_traits;
pub mod util;
