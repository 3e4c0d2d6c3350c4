//! Fixed-dimension embedding vector.

use serde::{Deserialize, Serialize};

/// A dense embedding vector produced by an [`crate::ports::providers::EmbeddingProvider`].
///
/// Dimensionality is fixed per deployment; callers must not mix embeddings
/// produced by different models in the same vector store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embedding {
    /// The raw float components.
    pub vector: Vec<f32>,
    /// Name of the model that produced this embedding.
    pub model: String,
    /// Number of components in `vector` (redundant with `vector.len()`, kept
    /// for cheap validation without materializing the vector).
    pub dimensions: usize,
}

impl Embedding {
    /// Construct an embedding, deriving `dimensions` from the vector length.
    #[must_use]
    pub fn new(vector: Vec<f32>, model: impl Into<String>) -> Self {
        let dimensions = vector.len();
        Self {
            vector,
            model: model.into(),
            dimensions,
        }
    }

    /// Cosine similarity against another embedding of the same dimensionality.
    ///
    /// Returns `0.0` if either vector has zero magnitude or the dimensions
    /// disagree, rather than panicking — callers filtering candidate pools
    /// should not have to special-case malformed entries.
    #[must_use]
    pub fn cosine_similarity(&self, other: &Self) -> f32 {
        if self.vector.len() != other.vector.len() {
            return 0.0;
        }
        let dot: f32 = self
            .vector
            .iter()
            .zip(other.vector.iter())
            .map(|(a, b)| a * b)
            .sum();
        let norm_a = self.vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        let norm_b = other.vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        dot / (norm_a * norm_b)
    }
}
