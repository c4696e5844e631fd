//! Context-prompt construction.
//!
//! The exact phrasing is a design surface: it materially affects generation
//! quality, so it must stay stable across ingest/query cycles. Tests pin it.

use crate::document::SearchResult;

/// Composes a retrieval result plus a question into a single prompt string.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the prompt sent to the generation service.
    ///
    /// With no results, the prompt names the question and instructs the
    /// model to answer from general knowledge only. Otherwise each result
    /// becomes a labeled `Document {n} ({source})` block in the order
    /// retrieval returned them (descending score), followed by an
    /// instruction to prioritize the context, the question, and an answer
    /// cue. Deterministic; no side effects.
    pub fn build(question: &str, results: &[SearchResult]) -> String {
        if results.is_empty() {
            return format!("Question: {question}\n\nAnswer based on your general knowledge:");
        }

        let context = results
            .iter()
            .enumerate()
            .map(|(i, r)| format!("Document {} ({}): {}", i + 1, r.chunk.source, r.chunk.content))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            "You are a helpful AI assistant. Use the following documents as context \
             to answer the question. If the documents don't contain relevant \
             information, you can use your general knowledge, but prioritize the \
             document context.\n\nDocuments:\n{context}\n\nQuestion: {question}\n\nAnswer:"
        )
    }
}
