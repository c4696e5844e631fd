//! Configuration for the retrieval session.

use serde::{Deserialize, Serialize};

use crate::chunking::DEFAULT_MAX_CHUNK_SIZE;
use crate::error::{RagError, Result};

/// Configuration parameters for retrieval.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RagConfig {
    /// Maximum chunk size in characters (soft target; a single sentence
    /// with no boundary to split at may exceed it).
    pub max_chunk_size: usize,
    /// Default number of top results returned by retrieval.
    pub top_k: usize,
}

impl Default for RagConfig {
    fn default() -> Self {
        Self { max_chunk_size: DEFAULT_MAX_CHUNK_SIZE, top_k: 3 }
    }
}

impl RagConfig {
    /// Create a new builder for constructing a [`RagConfig`].
    pub fn builder() -> RagConfigBuilder {
        RagConfigBuilder::default()
    }
}

/// Builder for constructing a validated [`RagConfig`].
#[derive(Debug, Clone, Default)]
pub struct RagConfigBuilder {
    config: RagConfig,
}

impl RagConfigBuilder {
    /// Set the maximum chunk size in characters.
    pub fn max_chunk_size(mut self, size: usize) -> Self {
        self.config.max_chunk_size = size;
        self
    }

    /// Set the default number of top results returned by retrieval.
    pub fn top_k(mut self, k: usize) -> Self {
        self.config.top_k = k;
        self
    }

    /// Build the [`RagConfig`], validating that parameters are consistent.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Config`] if `max_chunk_size == 0` or `top_k == 0`.
    pub fn build(self) -> Result<RagConfig> {
        if self.config.max_chunk_size == 0 {
            return Err(RagError::Config("max_chunk_size must be greater than zero".to_string()));
        }
        if self.config.top_k == 0 {
            return Err(RagError::Config("top_k must be greater than zero".to_string()));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_values() {
        let config = RagConfig::default();
        assert_eq!(config.max_chunk_size, 1000);
        assert_eq!(config.top_k, 3);
    }

    #[test]
    fn builder_rejects_zero_top_k() {
        assert!(RagConfig::builder().top_k(0).build().is_err());
    }

    #[test]
    fn builder_rejects_zero_chunk_size() {
        assert!(RagConfig::builder().max_chunk_size(0).build().is_err());
    }

    #[test]
    fn builder_accepts_valid_values() {
        let config = RagConfig::builder().max_chunk_size(500).top_k(5).build().unwrap();
        assert_eq!(config.max_chunk_size, 500);
        assert_eq!(config.top_k, 5);
    }
}
