//! Data types for chunks, embedded chunks, and search results.

use serde::{Deserialize, Serialize};

/// A bounded fragment of source text tagged with its origin document.
///
/// Chunks are created during ingestion and never mutated. Content is
/// trimmed and non-empty; its length stays within the configured maximum
/// chunk size except when a single sentence has no boundary to split at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chunk {
    /// The text content of the chunk.
    pub content: String,
    /// Identifier of the originating document (e.g. a filename).
    pub source: String,
}

/// A [`Chunk`] paired with its dense embedding vector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddedChunk {
    /// The underlying chunk.
    pub chunk: Chunk,
    /// The embedding for this chunk's content. The dimension is fixed per
    /// embedder instance and invariant across all chunks in one index.
    pub vector: Vec<f32>,
}

/// A retrieved [`Chunk`] paired with a relevance score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The retrieved chunk.
    pub chunk: Chunk,
    /// Cosine similarity in `[-1, 1]`; higher is more relevant.
    pub score: f32,
}
