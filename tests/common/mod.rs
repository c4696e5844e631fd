//! Shared test doubles: deterministic embedder and failure injection.
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use ollama_rag::embedding::EmbeddingProvider;
use ollama_rag::error::{RagError, Result};

/// A deterministic bag-of-words embedder: each lowercase word is hashed
/// (FNV-1a) into one of `DIM` buckets and counted. Texts sharing words get
/// higher cosine similarity, which is enough to exercise ranking.
pub struct BagOfWordsEmbedder;

pub const DIM: usize = 64;

fn fnv1a(word: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in word.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

fn embed_text(text: &str) -> Vec<f32> {
    let mut vector = vec![0.0f32; DIM];
    for word in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        let bucket = (fnv1a(&word.to_lowercase()) % DIM as u64) as usize;
        vector[bucket] += 1.0;
    }
    vector
}

#[async_trait]
impl EmbeddingProvider for BagOfWordsEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(embed_text(text))
    }

    fn dimensions(&self) -> usize {
        DIM
    }
}

/// Wraps [`BagOfWordsEmbedder`] with a switch that makes every call fail,
/// for exercising ingestion/retrieval failure paths.
#[derive(Default)]
pub struct SwitchableEmbedder {
    fail: AtomicBool,
}

impl SwitchableEmbedder {
    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            Err(RagError::Embedding {
                provider: "switchable-mock".to_string(),
                message: "injected failure".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl EmbeddingProvider for SwitchableEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.check()?;
        Ok(embed_text(text))
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        self.check()?;
        Ok(texts.iter().map(|t| embed_text(t)).collect())
    }

    fn dimensions(&self) -> usize {
        DIM
    }
}

pub const GEO_TEXT: &str =
    "Paris is the capital of France.\n\nBerlin is the capital of Germany.";
