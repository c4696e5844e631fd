//! Error types for the `ollama-rag` crate.

use thiserror::Error;

/// Errors that can occur in RAG operations.
#[derive(Debug, Error)]
pub enum RagError {
    /// An index build was attempted with zero embedded chunks.
    ///
    /// Callers should treat "no documents yet" as a no-op upstream rather
    /// than letting it reach the index.
    #[error("cannot build an index from an empty chunk set")]
    EmptyInput,

    /// An error occurred during embedding generation.
    #[error("Embedding error ({provider}): {message}")]
    Embedding {
        /// The embedding backend that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// Chunking or embedding failed during ingestion.
    ///
    /// The corpus and index are left at their prior consistent state.
    #[error("Ingestion error: {0}")]
    Ingestion(String),

    /// Embedding failed while answering a query. No index mutation occurs.
    #[error("Retrieval error: {0}")]
    Retrieval(String),

    /// The generation endpoint failed: timeout, connection refused,
    /// non-200 status, or a malformed response body.
    #[error("Generation error ({endpoint}): {message}")]
    Generation {
        /// The endpoint base URL that was called.
        endpoint: String,
        /// A description of the failure.
        message: String,
    },

    /// A configuration validation error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A convenience result type for RAG operations.
pub type Result<T> = std::result::Result<T, RagError>;
