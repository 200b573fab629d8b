//! Reading document collections from JSON files.

use std::path::Path;

use tracing::debug;

use crate::domain::Document;
use crate::infrastructure::traits::FileSystem;
use crate::infrastructure::{InfraError, InfraResult};

/// Load a JSON array of documents.
///
/// A single document object is accepted as well.
pub fn load_documents(fs: &dyn FileSystem, path: &Path) -> InfraResult<Vec<Document>> {
    debug!("load_documents: {}", path.display());
    let content = fs
        .read_to_string(path)
        .map_err(|e| InfraError::io(format!("read {}", path.display()), e))?;
    parse_documents(&content).map_err(|e| InfraError::parse(path.display().to_string(), e))
}

pub fn parse_documents(content: &str) -> serde_json::Result<Vec<Document>> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    if value.is_array() {
        serde_json::from_value(value)
    } else {
        serde_json::from_value(value).map(|doc| vec![doc])
    }
}
