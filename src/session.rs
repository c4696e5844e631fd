//! Retrieval session: corpus, index, and the ingest/retrieve workflow.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::chunking::{Chunker, ParagraphChunker};
use crate::config::RagConfig;
use crate::document::{EmbeddedChunk, SearchResult};
use crate::embedding::EmbeddingProvider;
use crate::error::{RagError, Result};
use crate::index::FlatIndex;

/// Owns the accumulated corpus and its index, coordinating chunking,
/// embedding, and search.
///
/// Lifecycle: create → `ingest`* → `retrieve`* → [`clear`](Self::clear).
/// Every ingestion rebuilds the index over the entire accumulated corpus,
/// trading O(corpus) work per ingest for an index that is always fully
/// consistent with the corpus.
///
/// The session does no internal locking. Hosts that serve concurrent
/// requests must serialize `ingest`/`clear` against other calls themselves,
/// which `&mut self` on the mutating operations already enforces for a
/// single session value.
pub struct RetrievalSession {
    config: RagConfig,
    chunker: Arc<dyn Chunker>,
    embedder: Arc<dyn EmbeddingProvider>,
    corpus: Vec<EmbeddedChunk>,
    index: FlatIndex,
}

impl RetrievalSession {
    /// Create an empty session using [`ParagraphChunker`] sized from the
    /// config.
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, config: RagConfig) -> Self {
        let chunker = Arc::new(ParagraphChunker::new(config.max_chunk_size));
        Self { config, chunker, embedder, corpus: Vec::new(), index: FlatIndex::new() }
    }

    /// Replace the chunking strategy.
    pub fn with_chunker(mut self, chunker: Arc<dyn Chunker>) -> Self {
        self.chunker = chunker;
        self
    }

    /// The session configuration.
    pub fn config(&self) -> &RagConfig {
        &self.config
    }

    /// Number of chunks in the accumulated corpus.
    pub fn chunk_count(&self) -> usize {
        self.corpus.len()
    }

    /// Whether the index has been built from at least one chunk.
    pub fn is_ready(&self) -> bool {
        !self.index.is_empty()
    }

    /// Ingest a document: chunk → embed (one batch call) → append to the
    /// corpus → rebuild the index over the whole corpus.
    ///
    /// Returns the number of chunks added. Text with no non-blank content
    /// adds nothing and leaves the index untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Ingestion`] if embedding fails. Embedding runs
    /// before any state is mutated, so a failed ingest leaves the corpus
    /// and index at their prior consistent state.
    pub async fn ingest(&mut self, text: &str, source_id: &str) -> Result<usize> {
        let chunks = self.chunker.chunk(text, source_id);
        if chunks.is_empty() {
            info!(source = source_id, chunk_count = 0, "ingested document (empty)");
            return Ok(0);
        }

        let texts: Vec<&str> = chunks.iter().map(|c| c.content.as_str()).collect();
        let vectors = self.embedder.embed_batch(&texts).await.map_err(|e| {
            error!(source = source_id, error = %e, "embedding failed during ingestion");
            RagError::Ingestion(format!("embedding failed for '{source_id}': {e}"))
        })?;

        if vectors.len() != chunks.len() {
            error!(
                source = source_id,
                expected = chunks.len(),
                got = vectors.len(),
                "embedder returned wrong vector count"
            );
            return Err(RagError::Ingestion(format!(
                "embedder returned {} vectors for {} chunks from '{source_id}'",
                vectors.len(),
                chunks.len()
            )));
        }

        let added = chunks.len();
        self.corpus.extend(
            chunks.into_iter().zip(vectors).map(|(chunk, vector)| EmbeddedChunk { chunk, vector }),
        );
        self.index = FlatIndex::build(self.corpus.clone())?;

        info!(source = source_id, chunk_count = added, corpus_size = self.corpus.len(), "ingested document");
        Ok(added)
    }

    /// Retrieve the most relevant chunks for `question` using the
    /// configured default `top_k`.
    pub async fn retrieve(&self, question: &str) -> Result<Vec<SearchResult>> {
        self.retrieve_with_top_k(question, self.config.top_k).await
    }

    /// Retrieve at most `top_k` relevant chunks for `question`.
    ///
    /// An empty corpus is a valid, silent no-match state: returns an empty
    /// `Vec` without calling the embedder.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Retrieval`] if query embedding fails. No index
    /// mutation occurs.
    pub async fn retrieve_with_top_k(
        &self,
        question: &str,
        top_k: usize,
    ) -> Result<Vec<SearchResult>> {
        if self.index.is_empty() {
            debug!("retrieve on empty corpus");
            return Ok(Vec::new());
        }

        let query = self.embedder.embed(question).await.map_err(|e| {
            error!(error = %e, "embedding failed during retrieval");
            RagError::Retrieval(format!("query embedding failed: {e}"))
        })?;

        let results = self.index.search(&query, top_k);
        info!(result_count = results.len(), top_k, "retrieval completed");
        Ok(results)
    }

    /// Discard the corpus and index. Idempotent; subsequent retrievals
    /// behave as "empty corpus" until the next ingest.
    pub fn clear(&mut self) {
        self.corpus.clear();
        self.index = FlatIndex::new();
        info!("session cleared");
    }
}
