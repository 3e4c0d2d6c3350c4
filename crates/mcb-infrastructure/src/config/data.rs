//! Configuration data structures
//!
//! Defines the main configuration structure and related data types
//! for the MCP Context Browser system.

// Re-export all configuration types from the types module
pub use crate::config::types::{
    AdminApiKeyConfig, ApiKeyConfig, AppConfig, AuthConfig, BackupConfig, CacheProvider,
    CacheSystemConfig, DaemonConfig, DataConfig, EmbeddingConfigContainer, EventBusConfig,
    EventBusProvider, InfrastructureConfig, JwtConfig, LimitsConfig, LoggingConfig, ModeConfig,
    OperatingMode, OperationsConfig, OperationsDaemonConfig, PasswordAlgorithm, ProvidersConfig,
    ResilienceConfig, ServerConfig, ServerCorsConfig, ServerNetworkConfig, ServerSslConfig,
    ServerTimeoutConfig, SnapshotConfig, SyncConfig, SystemConfig, TransportMode,
    VectorStoreConfigContainer,
};
