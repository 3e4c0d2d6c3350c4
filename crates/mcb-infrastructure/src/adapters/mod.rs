//! Infrastructure Adapters
//!
//! Provides adapter interfaces for DI integration.
//! Following Clean Architecture: adapters implement domain interfaces.

// Modules
// Note: Adapters for external providers are handled via linkme registry.
// This module contains internal infrastructure adapters.
