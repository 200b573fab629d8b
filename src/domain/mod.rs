//! Domain layer: entities and tree logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod expansion;
pub mod filter;
pub mod sample;
pub mod window;

pub use entities::*;
pub use error::DomainError;
pub use expansion::{collect_ids, duplicate_node_ids, flatten_tree, ExpandedSet};
pub use filter::{filter_documents, filter_tree, normalize_query, DocumentFilter, TreeFilter};
pub use sample::{sample_document, SAMPLE_DOCUMENT_ID};
pub use window::WindowCommand;
