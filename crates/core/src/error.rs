//! Error taxonomy
//!
//! Input errors are rejected before any catalog access; a no-match search is
//! never an error. Catalog failures propagate unchanged; the engine is
//! stateless and retrying is the caller's decision.

use thiserror::Error;

/// Errors surfaced by the query-understanding engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Missing or empty query text
    #[error("Please provide a property search query.")]
    EmptyQuery,

    /// Suggestion string outside the predefined set
    #[error("Invalid suggestion. Only predefined suggestions are allowed.")]
    InvalidSuggestion(String),

    /// Requested listing id does not exist
    #[error("Property not found")]
    ListingNotFound(u64),

    /// The catalog collaborator failed to produce a snapshot
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Errors from the catalog data sources.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog source {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog source {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
