//! Minimal local Retrieval-Augmented Generation.
//!
//! This crate provides:
//! - Paragraph chunking with sentence re-splitting for oversized paragraphs
//! - An exact flat vector index over L2-normalized embeddings
//! - A retrieval session owning corpus + index (ingest, retrieve, clear)
//! - Deterministic context-prompt construction
//! - An Ollama HTTP generation client
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ollama_rag::{OllamaClient, RagConfig, RagEngine, RetrievalSession};
//!
//! let session = RetrievalSession::new(Arc::new(my_embedder), RagConfig::default());
//! let mut engine = RagEngine::new(session, Arc::new(OllamaClient::default()));
//!
//! engine.ingest("Paris is the capital of France.", "geo.txt").await?;
//! let answer = engine.ask("What is the capital of France?", None).await?;
//! println!("{} (from {:?})", answer.answer, answer.sources);
//! ```

pub mod chunking;
pub mod config;
pub mod document;
pub mod embedding;
pub mod engine;
pub mod error;
pub mod index;
pub mod ollama;
pub mod prompt;
pub mod session;

pub use chunking::{Chunker, ParagraphChunker};
pub use config::{RagConfig, RagConfigBuilder};
pub use document::{Chunk, EmbeddedChunk, SearchResult};
pub use embedding::EmbeddingProvider;
pub use engine::{Answer, EngineStatus, RagEngine};
pub use error::{RagError, Result};
pub use index::FlatIndex;
pub use ollama::{Generator, OllamaClient};
pub use prompt::PromptBuilder;
pub use session::RetrievalSession;
