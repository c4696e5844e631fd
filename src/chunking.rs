//! Document chunking.
//!
//! [`ParagraphChunker`] splits raw text on blank-line boundaries and
//! re-splits oversized paragraphs at sentence terminators.

use crate::document::Chunk;

/// A strategy for splitting raw text into chunks.
///
/// Implementations are pure: the output depends only on the input text and
/// source identifier. Returned chunks carry no embeddings; those are
/// attached later by the session.
pub trait Chunker: Send + Sync {
    /// Split `text` into chunks, tagging each with `source_id`.
    ///
    /// Returns an empty `Vec` if the text contains no non-blank content.
    fn chunk(&self, text: &str, source_id: &str) -> Vec<Chunk>;
}

/// Splits text into paragraphs at blank lines, re-splitting any paragraph
/// longer than `max_chunk_size` at sentence-terminator runs (`.`, `!`, `?`).
///
/// Sentence re-splitting greedily accumulates sentences into a buffer and
/// flushes it whenever the next sentence would reach the size limit. The
/// original terminator runs are dropped and sentences are rejoined with
/// `". "`, matching the reference splitter. A single sentence longer than
/// the limit is emitted as-is rather than truncated.
#[derive(Debug, Clone)]
pub struct ParagraphChunker {
    max_chunk_size: usize,
}

/// Default maximum chunk size in characters.
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 1000;

impl ParagraphChunker {
    /// Create a chunker with the given maximum chunk size in characters.
    pub fn new(max_chunk_size: usize) -> Self {
        Self { max_chunk_size }
    }
}

impl Default for ParagraphChunker {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHUNK_SIZE)
    }
}

/// Split text into non-empty paragraphs at blank-line boundaries. A line
/// containing only whitespace counts as blank. Paragraphs are trimmed at
/// the ends only; leading whitespace of inner lines is preserved.
fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    let mut flush = |current: &mut String| {
        let trimmed = current.trim();
        if !trimmed.is_empty() {
            paragraphs.push(trimmed.to_string());
        }
        current.clear();
    };

    for line in text.lines() {
        if line.trim().is_empty() {
            flush(&mut current);
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    flush(&mut current);

    paragraphs
}

/// Split a paragraph at runs of sentence terminators, dropping the
/// terminators. Returned pieces are trimmed and non-empty.
fn split_sentences(paragraph: &str) -> Vec<&str> {
    paragraph
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

impl Chunker for ParagraphChunker {
    fn chunk(&self, text: &str, source_id: &str) -> Vec<Chunk> {
        let mut chunks = Vec::new();

        for paragraph in split_paragraphs(text) {
            if paragraph.len() <= self.max_chunk_size {
                chunks.push(Chunk { content: paragraph, source: source_id.to_string() });
                continue;
            }

            let mut buffer = String::new();
            for sentence in split_sentences(&paragraph) {
                if !buffer.is_empty() && buffer.len() + sentence.len() >= self.max_chunk_size {
                    chunks.push(Chunk {
                        content: buffer.trim_end().to_string(),
                        source: source_id.to_string(),
                    });
                    buffer.clear();
                }
                buffer.push_str(sentence);
                buffer.push_str(". ");
            }
            if !buffer.trim().is_empty() {
                chunks.push(Chunk {
                    content: buffer.trim_end().to_string(),
                    source: source_id.to_string(),
                });
            }
        }

        chunks
    }
}
