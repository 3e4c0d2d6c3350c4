//! Composite `repository "::" session` key (spec §4.1).

use serde::{Deserialize, Serialize};

use crate::constants::tenancy::{
    GENERIC_SESSION_VALUES, MAX_SESSION_KEY_LENGTH, SESSION_COMPONENT_SEPARATOR,
};
use crate::value_objects::RepositoryName;

/// The composite session key is the only form the storage layer ever sees.
/// It is constructed from a normalized repository and a validated, possibly
/// disambiguated, raw session string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionKey(String);

impl SessionKey {
    /// Compose a repository and raw session id into a session key, applying
    /// the character-class sanitization, generic-value disambiguation, and
    /// length cap described in spec §4.1.
    #[must_use]
    pub fn compose(repository: &RepositoryName, raw_session: &str, now_unix: i64) -> Self {
        let sanitized = sanitize(raw_session);
        let disambiguated = if GENERIC_SESSION_VALUES.contains(&sanitized.as_str()) {
            format!("{sanitized}-{now_unix}")
        } else {
            sanitized
        };
        let mut composed = format!(
            "{repository}{SESSION_COMPONENT_SEPARATOR}{disambiguated}"
        );
        composed.truncate(MAX_SESSION_KEY_LENGTH);
        Self(composed)
    }

    /// Recover the repository component from a composite key.
    #[must_use]
    pub fn repository(&self) -> &str {
        self.0
            .split_once(SESSION_COMPONENT_SEPARATOR)
            .map_or(self.0.as_str(), |(repo, _)| repo)
    }

    /// Recover the raw session component from a composite key.
    #[must_use]
    pub fn session(&self) -> &str {
        self.0
            .split_once(SESSION_COMPONENT_SEPARATOR)
            .map_or("", |(_, session)| session)
    }

    /// Borrow the full composite string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Replace characters outside `[A-Za-z0-9_:-]` with `_`.
fn sanitize(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == ':' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
