//! # Shared Utilities
//!
//! Cross-cutting helpers with no dependency on `mcb-domain` — hashing,
//! encryption, text processing, and filesystem scanning used by the
//! infrastructure and providers layers (and anything else below the domain
//! boundary that needs them).
//!
//! Mirrors the "Single Source of Truth, no wrapper" policy of
//! `mcb_domain::utils` but for concerns that must not pull in domain types.

#![allow(missing_docs)]

/// Error type shared by every module in this crate.
pub mod error;

/// AES-256-GCM encryption and HMAC-SHA256 signing.
pub mod crypto;
/// SHA-256 content and file hashing.
pub mod hash;
/// Directory scanning and glob-filtered file discovery.
pub mod fs;
/// Grapheme-aware truncation and token-overlap scoring.
pub mod text;

pub use error::{Result, UtilsError};
