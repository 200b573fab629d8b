//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the document collection's rules.
///
/// Store operations themselves are total; these come from lookups and
/// from validating imported collections.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("document not found: {0}")]
    DocumentNotFound(String),

    #[error("duplicate document id: {0}")]
    DuplicateDocumentId(String),

    #[error("unknown window route: {0}")]
    UnknownRoute(String),
}
