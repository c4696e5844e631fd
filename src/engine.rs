//! End-to-end RAG orchestration: retrieve → prompt → generate.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::document::SearchResult;
use crate::error::Result;
use crate::ollama::Generator;
use crate::prompt::PromptBuilder;
use crate::session::RetrievalSession;

/// The answer to a question, with the retrieval context that backed it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// The generated answer text. On generation failure this carries the
    /// failure description instead of crashing the calling flow.
    pub answer: String,
    /// How many retrieved chunks went into the prompt.
    pub context_used: usize,
    /// Source identifiers of the retrieved chunks, in score order.
    pub sources: Vec<String>,
}

/// Diagnostic snapshot of the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStatus {
    /// Number of chunks in the accumulated corpus.
    pub chunks_indexed: usize,
    /// Whether the index has been built from at least one chunk.
    pub index_ready: bool,
    /// `"connected"` if the generation endpoint answered the model
    /// listing, `"disconnected"` otherwise.
    pub generation_status: String,
    /// Model names reported by the generation endpoint, if reachable.
    pub available_models: Vec<String>,
}

/// Composes a [`RetrievalSession`] with a [`Generator`] to answer
/// questions over the ingested corpus.
///
/// Generation failure is the one failure class converted into answer text
/// rather than an error: the end user stays informed without their session
/// terminating. Ingestion and retrieval failures propagate as structured
/// errors.
pub struct RagEngine {
    session: RetrievalSession,
    generator: Arc<dyn Generator>,
}

impl RagEngine {
    /// Create an engine from a session and a generation backend.
    pub fn new(session: RetrievalSession, generator: Arc<dyn Generator>) -> Self {
        Self { session, generator }
    }

    /// The underlying retrieval session.
    pub fn session(&self) -> &RetrievalSession {
        &self.session
    }

    /// Ingest a document into the session. See [`RetrievalSession::ingest`].
    pub async fn ingest(&mut self, text: &str, source_id: &str) -> Result<usize> {
        self.session.ingest(text, source_id).await
    }

    /// Discard the corpus and index. See [`RetrievalSession::clear`].
    pub fn clear(&mut self) {
        self.session.clear();
    }

    /// Answer a question: retrieve context, build the prompt, generate.
    ///
    /// `top_k` overrides the session's configured default when given.
    /// With an empty corpus the prompt falls back to general knowledge.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Retrieval`](crate::RagError::Retrieval) if query
    /// embedding fails. Generation failure does not error; the failure
    /// description becomes the answer text.
    pub async fn ask(&self, question: &str, top_k: Option<usize>) -> Result<Answer> {
        let results = match top_k {
            Some(k) => self.session.retrieve_with_top_k(question, k).await?,
            None => self.session.retrieve(question).await?,
        };

        let prompt = PromptBuilder::build(question, &results);
        let context_used = results.len();
        let sources = sources_of(&results);

        let answer = match self.generator.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                error!(error = %e, "generation failed; surfacing error text as answer");
                e.to_string()
            }
        };

        info!(context_used, "answered question");
        Ok(Answer { answer, context_used, sources })
    }

    /// Report corpus/index state and generation-endpoint reachability.
    pub async fn status(&self) -> EngineStatus {
        let (generation_status, available_models) = match self.generator.list_models().await {
            Ok(models) => ("connected".to_string(), models),
            Err(_) => ("disconnected".to_string(), Vec::new()),
        };

        EngineStatus {
            chunks_indexed: self.session.chunk_count(),
            index_ready: self.session.is_ready(),
            generation_status,
            available_models,
        }
    }
}

fn sources_of(results: &[SearchResult]) -> Vec<String> {
    results.iter().map(|r| r.chunk.source.clone()).collect()
}
