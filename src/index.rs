//! Exact flat vector index over L2-normalized embeddings.
//!
//! Brute-force inner product rather than an approximate structure: corpus
//! sizes are modest (tens to low thousands of chunks) and deterministic,
//! exact ranking matters more than query latency here.

use std::cmp::Ordering;

use crate::document::{EmbeddedChunk, SearchResult};
use crate::error::{RagError, Result};

/// An exact (flat) nearest-neighbor index using cosine similarity.
///
/// Vectors are L2-normalized once at build time and the query is normalized
/// at search time, so scores are comparable regardless of the embedder's
/// output norm. Entries keep their insertion order, which also serves as
/// the tie-break for equal scores.
#[derive(Debug, Default)]
pub struct FlatIndex {
    entries: Vec<EmbeddedChunk>,
}

impl FlatIndex {
    /// Create an empty index. Searching it returns no results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from embedded chunks, replacing any prior content.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::EmptyInput`] if `embedded` is empty. Callers
    /// should treat "no documents" as a no-op upstream instead.
    pub fn build(embedded: Vec<EmbeddedChunk>) -> Result<Self> {
        if embedded.is_empty() {
            return Err(RagError::EmptyInput);
        }
        let entries = embedded
            .into_iter()
            .map(|mut e| {
                normalize(&mut e.vector);
                e
            })
            .collect();
        Ok(Self { entries })
    }

    /// Number of indexed chunks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no chunks.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return at most `top_k` results ordered by descending cosine score.
    ///
    /// An empty or uninitialized index yields an empty `Vec`, never an
    /// error. The sort is stable, so equal scores keep insertion order.
    /// Repeating an identical query against an unmodified index returns
    /// identical ordering and scores.
    pub fn search(&self, query: &[f32], top_k: usize) -> Vec<SearchResult> {
        if self.entries.is_empty() || top_k == 0 {
            return Vec::new();
        }

        let mut query = query.to_vec();
        normalize(&mut query);

        let mut scored: Vec<SearchResult> = self
            .entries
            .iter()
            .map(|e| SearchResult { chunk: e.chunk.clone(), score: dot(&e.vector, &query) })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored.truncate(top_k);
        scored
    }
}

/// L2-normalize in place. Zero-magnitude vectors are left untouched; their
/// dot product with any query is 0.
fn normalize(vector: &mut [f32]) {
    let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in vector.iter_mut() {
            *x /= norm;
        }
    }
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Chunk;

    fn embedded(content: &str, vector: Vec<f32>) -> EmbeddedChunk {
        EmbeddedChunk {
            chunk: Chunk { content: content.to_string(), source: "test".to_string() },
            vector,
        }
    }

    #[test]
    fn build_rejects_empty_input() {
        assert!(matches!(FlatIndex::build(Vec::new()), Err(RagError::EmptyInput)));
    }

    #[test]
    fn empty_index_returns_no_results() {
        let index = FlatIndex::new();
        assert!(index.search(&[1.0, 0.0], 5).is_empty());
    }

    #[test]
    fn scores_are_scale_invariant() {
        // The embedder need not normalize; the index does.
        let index = FlatIndex::build(vec![
            embedded("a", vec![10.0, 0.0]),
            embedded("b", vec![0.0, 0.1]),
        ])
        .unwrap();

        let results = index.search(&[3.0, 0.0], 2);
        assert_eq!(results[0].chunk.content, "a");
        assert!((results[0].score - 1.0).abs() < 1e-6);
        assert!(results[1].score.abs() < 1e-6);
    }

    #[test]
    fn equal_scores_keep_insertion_order() {
        let index = FlatIndex::build(vec![
            embedded("first", vec![1.0, 0.0]),
            embedded("second", vec![2.0, 0.0]),
            embedded("third", vec![0.5, 0.0]),
        ])
        .unwrap();

        let results = index.search(&[1.0, 0.0], 3);
        let order: Vec<&str> = results.iter().map(|r| r.chunk.content.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn zero_vector_scores_zero() {
        let index = FlatIndex::build(vec![
            embedded("zero", vec![0.0, 0.0]),
            embedded("unit", vec![0.0, 1.0]),
        ])
        .unwrap();

        let results = index.search(&[0.0, 1.0], 2);
        assert_eq!(results[0].chunk.content, "unit");
        assert_eq!(results[1].score, 0.0);
    }
}
