//! Decay, freshness, and retention scoring (spec §4.5): time factor,
//! importance multipliers, relationship bonus, and the non-mutating sweep.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use mcb_domain::constants::decay::{
    DECAY_EXPONENTIAL_HALF_LIFE_DAYS, DECAY_MINIMAL_FLOOR, DECAY_MINIMAL_WINDOW_DAYS,
    DECAY_MODERATE_FLOOR, DECAY_MODERATE_WINDOW_DAYS, DEFAULT_IMPORTANCE_MULTIPLIER,
    DELETION_THRESHOLD, IMPORTANCE_MULTIPLIERS, RELATIONSHIP_BONUS_CAP, RELATIONSHIP_BONUS_PER_EDGE,
    SUMMARIZATION_THRESHOLD, TASK_COMPLETED_BONUS, TASK_HIGH_PRIORITY_BONUS,
};
use mcb_domain::entities::memory::{TaskPriority, TaskStatus};
use mcb_domain::ports::{AdjacencyFilter, ChunkRepository, DecayServiceInterface, RelationshipRepository};
use mcb_domain::{ChunkId, DecayClassification, DecayScore, Error, FreshnessStatus, Result};

pub struct DecayEngine {
    chunks: Arc<dyn ChunkRepository>,
    relationships: Arc<dyn RelationshipRepository>,
}

impl DecayEngine {
    #[must_use]
    pub fn new(chunks: Arc<dyn ChunkRepository>, relationships: Arc<dyn RelationshipRepository>) -> Self {
        Self { chunks, relationships }
    }

    fn time_factor(age_days: f64) -> f64 {
        if age_days <= DECAY_MINIMAL_WINDOW_DAYS {
            1.0 - (1.0 - DECAY_MINIMAL_FLOOR) * (age_days / DECAY_MINIMAL_WINDOW_DAYS)
        } else if age_days <= DECAY_MODERATE_WINDOW_DAYS {
            let span = DECAY_MODERATE_WINDOW_DAYS - DECAY_MINIMAL_WINDOW_DAYS;
            let progressed = age_days - DECAY_MINIMAL_WINDOW_DAYS;
            DECAY_MINIMAL_FLOOR - (DECAY_MINIMAL_FLOOR - DECAY_MODERATE_FLOOR) * (progressed / span)
        } else {
            let beyond = age_days - DECAY_MODERATE_WINDOW_DAYS;
            DECAY_MODERATE_FLOOR * 0.5f64.powf(beyond / DECAY_EXPONENTIAL_HALF_LIFE_DAYS)
        }
    }

    fn importance_multiplier(metadata: &mcb_domain::ChunkMetadata, type_str: &str) -> f64 {
        let mut multiplier = IMPORTANCE_MULTIPLIERS
            .iter()
            .find(|(name, _)| *name == type_str)
            .map_or(DEFAULT_IMPORTANCE_MULTIPLIER, |(_, m)| *m);

        if type_str == "task" {
            if matches!(metadata.task.task_priority, Some(TaskPriority::High | TaskPriority::Urgent)) {
                multiplier *= TASK_HIGH_PRIORITY_BONUS;
            }
            if matches!(metadata.task.task_status, Some(TaskStatus::Completed)) {
                multiplier *= TASK_COMPLETED_BONUS;
            }
        }
        multiplier
    }

    async fn relationship_bonus(&self, chunk_id: &ChunkId) -> Result<f64> {
        let edges = self
            .relationships
            .get_adjacent(chunk_id, mcb_domain::entities::relationship::Direction::Both, &AdjacencyFilter::default())
            .await?;
        Ok((edges.len() as f64 * RELATIONSHIP_BONUS_PER_EDGE).min(RELATIONSHIP_BONUS_CAP))
    }

    async fn score_chunk(&self, chunk: &mcb_domain::Chunk) -> Result<DecayScore> {
        let age_days = (Utc::now() - chunk.timestamp).num_seconds() as f64 / 86_400.0;
        let time_factor = Self::time_factor(age_days.max(0.0));
        let importance_multiplier = Self::importance_multiplier(&chunk.metadata, chunk.r#type.as_str());
        let relationship_bonus = self.relationship_bonus(&chunk.id).await?;
        let score = (time_factor * importance_multiplier + relationship_bonus).clamp(0.0, 1.0);
        Ok(DecayScore { score, time_factor, importance_multiplier, relationship_bonus })
    }
}

#[async_trait]
impl DecayServiceInterface for DecayEngine {
    async fn score(&self, chunk_id: &ChunkId) -> Result<DecayScore> {
        let Some(chunk) = self.chunks.get_chunk(chunk_id).await? else {
            return Err(Error::chunk_not_found(chunk_id.to_string()));
        };
        self.score_chunk(&chunk).await
    }

    fn classify(&self, score: &DecayScore) -> DecayClassification {
        if score.score < DELETION_THRESHOLD {
            DecayClassification::DeletionCandidate
        } else if score.score < SUMMARIZATION_THRESHOLD {
            DecayClassification::SummarizationCandidate
        } else {
            DecayClassification::Healthy
        }
    }

    async fn freshness(&self, chunk_id: &ChunkId) -> Result<FreshnessStatus> {
        let Some(chunk) = self.chunks.get_chunk(chunk_id).await? else {
            return Err(Error::chunk_not_found(chunk_id.to_string()));
        };
        let decay = self.score_chunk(&chunk).await?;
        let classification = self.classify(&decay);
        let days_old = (Utc::now() - chunk.timestamp).num_seconds() as f64 / 86_400.0;

        let mut alerts = Vec::new();
        let mut suggested_actions = Vec::new();
        match classification {
            DecayClassification::DeletionCandidate => {
                alerts.push("decay score below deletion threshold".to_string());
                suggested_actions.push("review for deletion".to_string());
            }
            DecayClassification::SummarizationCandidate => {
                alerts.push("decay score below summarization threshold".to_string());
                suggested_actions.push("queue for summarization".to_string());
            }
            DecayClassification::Healthy => {}
        }

        Ok(FreshnessStatus {
            is_fresh: classification == DecayClassification::Healthy,
            is_stale: classification != DecayClassification::Healthy,
            score: decay.score,
            days_old,
            decay_rate: 1.0 - decay.time_factor,
            alerts,
            suggested_actions,
        })
    }

    async fn sweep(&self, repository: &str) -> Result<Vec<(ChunkId, DecayClassification)>> {
        let chunks = self.chunks.list_by_repository(repository, usize::MAX).await?;
        let mut results = Vec::with_capacity(chunks.len());
        for chunk in &chunks {
            let decay = self.score_chunk(chunk).await?;
            let classification = self.classify(&decay);
            if classification != DecayClassification::Healthy {
                results.push((chunk.id, classification));
            }
        }
        Ok(results)
    }
}
