//!
//! **Documentation**: [docs/modules/providers.md](../../../../docs/modules/providers.md)
//!
//! Native PMAT-style analyzers.

mod native;

pub use native::NativePmatAnalyzer;
