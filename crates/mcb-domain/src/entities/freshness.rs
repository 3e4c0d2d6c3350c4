//! Decay score and freshness status (spec §4.5).

use serde::{Deserialize, Serialize};

/// Outcome of scoring a single chunk's decay.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DecayScore {
    /// Combined, clamped-to-`[0, 1]` score.
    pub score: f64,
    pub time_factor: f64,
    pub importance_multiplier: f64,
    pub relationship_bonus: f64,
}

/// Classification of a decay score against the configured thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecayClassification {
    Healthy,
    SummarizationCandidate,
    DeletionCandidate,
}

/// Freshness status produced by the freshness manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreshnessStatus {
    pub is_fresh: bool,
    pub is_stale: bool,
    pub score: f64,
    pub days_old: f64,
    pub decay_rate: f64,
    pub alerts: Vec<String>,
    pub suggested_actions: Vec<String>,
}
