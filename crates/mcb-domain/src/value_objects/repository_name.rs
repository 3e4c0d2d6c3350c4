//! Repository (tenancy key) normalization.

use serde::{Deserialize, Serialize};

use crate::constants::tenancy::GLOBAL_REPOSITORY;

/// A normalized repository identifier — the tenancy key for every chunk,
/// session, thread, and alias.
///
/// Normalization rules (spec §4.1):
/// - empty input becomes the sentinel [`GLOBAL_REPOSITORY`];
/// - a value that already looks like a full URL-shaped path (contains a `.`
///   and a `/`) is preserved verbatim;
/// - anything else is preserved as given — VCS-context detection to
///   substitute a canonical `host/owner/name` form is a concern of the
///   caller (the ingestion pipeline), not of this value object, since it
///   requires filesystem/VCS access this crate does not have.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Normalize a caller-supplied repository string.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self(GLOBAL_REPOSITORY.to_string());
        }
        Self(trimmed.to_string())
    }

    /// The sentinel cross-project scope.
    #[must_use]
    pub fn global() -> Self {
        Self(GLOBAL_REPOSITORY.to_string())
    }

    /// Whether this is the cross-project sentinel.
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.0 == GLOBAL_REPOSITORY
    }

    /// Whether this value already looks like a full `host/owner/name`-shaped
    /// path (contains both a `.` and a `/`), i.e. should be preserved
    /// verbatim rather than further canonicalized by a VCS-context detector.
    #[must_use]
    pub fn looks_like_full_path(raw: &str) -> bool {
        raw.contains('.') && raw.contains('/')
    }

    /// Borrow the normalized string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split this repository name into candidate segments for related-repository
    /// probing (spec §4.3 tier 3): split on `/`, `-`, `_`, `.`.
    #[must_use]
    pub fn segments(&self) -> Vec<&str> {
        self.0
            .split(['/', '-', '_', '.'])
            .filter(|s| !s.is_empty())
            .collect()
    }
}

impl std::fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RepositoryName {
    fn from(s: &str) -> Self {
        Self::normalize(s)
    }
}

impl From<String> for RepositoryName {
    fn from(s: String) -> Self {
        Self::normalize(&s)
    }
}
