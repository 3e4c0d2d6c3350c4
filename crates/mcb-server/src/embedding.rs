//! Deterministic, dependency-free [`EmbeddingProvider`] reference
//! implementation.
//!
//! Production deployments inject a real embedding model behind this same
//! port; this adapter exists so the reference engine is fully self-contained
//! and its search/decay/conflict behavior is reproducible without network
//! access. It hashes token shingles into a fixed-width vector (a
//! feature-hashing / "hashing trick" embedding), which preserves enough
//! lexical signal for cosine similarity to behave sensibly on the test
//! corpus without pulling in `fastembed`.

use async_trait::async_trait;
use mcb_domain::ports::EmbeddingProvider;
use mcb_domain::{Embedding, Result};

const DIMENSIONS: usize = 256;

/// Hashing-trick embedding provider: no external model, no network calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashingEmbeddingProvider;

impl HashingEmbeddingProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn hash_embed(text: &str) -> Vec<f32> {
    let mut vector = vec![0.0f32; DIMENSIONS];
    for token in mcb_utils::text::tokenize(text, 1) {
        let digest = mcb_utils::hash::content_hash_str(&token);
        let bucket = usize::from_str_radix(&digest[..8], 16).unwrap_or(0) % DIMENSIONS;
        let sign = if digest.as_bytes()[8] % 2 == 0 { 1.0 } else { -1.0 };
        vector[bucket] += sign;
    }
    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for v in &mut vector {
            *v /= norm;
        }
    }
    vector
}

#[async_trait]
impl EmbeddingProvider for HashingEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts
            .iter()
            .map(|t| Embedding::new(hash_embed(t), "hashing-trick-v1"))
            .collect())
    }

    fn dimensions(&self) -> usize {
        DIMENSIONS
    }

    fn provider_name(&self) -> &str {
        "hashing-trick"
    }
}
