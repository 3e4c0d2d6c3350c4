//! Decay, freshness, and retention constants -- Single Source of Truth.
//!
//! Mathematical/algorithmic invariants for the decay scoring subsystem
//! (spec §4.5). The source's equivalent defaults were inconsistent across
//! code paths; the values below are the canonical defaults this workspace
//! fixes them to (see `DESIGN.md` Open Question decisions).

/// Age, in days, below which a chunk is in the "minimal decay" regime.
pub const DECAY_MINIMAL_WINDOW_DAYS: f64 = 7.0;

/// Age, in days, below which a chunk is in the "moderate decay" regime.
pub const DECAY_MODERATE_WINDOW_DAYS: f64 = 30.0;

/// Time factor floor at the end of the minimal-decay window.
pub const DECAY_MINIMAL_FLOOR: f64 = 0.99;

/// Time factor floor at the end of the moderate-decay window.
pub const DECAY_MODERATE_FLOOR: f64 = 0.69;

/// Half-life, in days, of the exponential decay applied beyond the
/// moderate-decay window.
pub const DECAY_EXPONENTIAL_HALF_LIFE_DAYS: f64 = 30.0;

/// Decay score below which a chunk is queued for LLM summarization.
pub const SUMMARIZATION_THRESHOLD: f64 = 0.4;

/// Decay score below which a chunk becomes eligible for deletion.
pub const DELETION_THRESHOLD: f64 = 0.1;

/// Minimum age, in days, a chunk is protected from decay-driven deletion
/// regardless of its computed score.
pub const MINIMUM_RETENTION_WINDOW_DAYS: i64 = 3;

/// Age, in days, beyond which the periodic retention task deletes chunks
/// unconditionally.
pub const PERIODIC_RETENTION_WINDOW_DAYS: i64 = 90;

/// Per-related-edge relationship bonus applied to the decay score.
pub const RELATIONSHIP_BONUS_PER_EDGE: f64 = 0.01;

/// Cap on the cumulative relationship bonus.
pub const RELATIONSHIP_BONUS_CAP: f64 = 0.10;

/// Importance multiplier applied by chunk type.
///
/// `(type_str, multiplier)` pairs; looked up by
/// [`crate::entities::chunk::ChunkType::as_str`].
pub const IMPORTANCE_MULTIPLIERS: &[(&str, f64)] = &[
    ("architecture_decision", 2.0),
    ("solution", 1.8),
    ("problem", 1.5),
    ("code_change", 1.3),
    ("analysis", 1.2),
    ("session_summary", 1.2),
    ("discussion", 1.1),
    ("task", 1.4),
    ("task_update", 1.2),
    ("task_progress", 1.1),
];

/// Extra multiplier applied to `task` chunks with priority `high` or above.
pub const TASK_HIGH_PRIORITY_BONUS: f64 = 1.3;

/// Extra multiplier applied to `task` chunks whose `task_status` is
/// `completed`.
pub const TASK_COMPLETED_BONUS: f64 = 1.5;

/// Default importance multiplier for a type with no explicit entry.
pub const DEFAULT_IMPORTANCE_MULTIPLIER: f64 = 1.0;
