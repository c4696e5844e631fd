//! Embedding capability trait.

use async_trait::async_trait;

use crate::error::Result;

/// A provider that maps text to fixed-dimension dense vectors.
///
/// The retrieval core treats embedding as an external collaborator: given N
/// strings it expects N vectors of the dimension reported by
/// [`dimensions`](EmbeddingProvider::dimensions). Output need not be
/// normalized; the index normalizes on its side.
///
/// The default [`embed_batch`](EmbeddingProvider::embed_batch) calls
/// [`embed`](EmbeddingProvider::embed) once per input. Backends with native
/// batching should override it, since ingestion embeds all fragments of a
/// document in a single batch call.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text input.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Embed a batch of text inputs, preserving order.
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let mut vectors = Vec::with_capacity(texts.len());
        for text in texts {
            vectors.push(self.embed(text).await?);
        }
        Ok(vectors)
    }

    /// The dimensionality of vectors produced by this provider.
    fn dimensions(&self) -> usize;
}
