//! Storage utilities for persistence.

pub mod file_hash;

pub use file_hash::{FileHashConfig, FileHashRecord, FileHashStore};
