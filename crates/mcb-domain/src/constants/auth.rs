//!
//! **Documentation**: [docs/modules/domain.md](../../../../docs/modules/domain.md)
//!
//! Authentication constants — Single Source of Truth

/// Default HTTP header name for API key authentication.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Prefix for bearer token authentication in the Authorization header.
pub const BEARER_PREFIX: &str = "Bearer ";
