//! External Provider Ports
//!
//! **Documentation**: [docs/modules/domain.md](../../../../../docs/modules/domain.md#provider-ports)
//!
//! Ports for external services the memory engine depends on: embedding
//! generation, vector storage, HTTP transport, observability metrics, and
//! background task spawning.
//!
//! | Port | Description |
//! | ------ | ------------- |
//! | EmbeddingProvider | Text embedding generation |
//! | VectorStoreProvider | Vector storage and similarity search |
//! | HttpClientProvider | Pooled HTTP client for API-based embedding providers |
//! | MetricsProvider | Observability metrics (Prometheus/OpenTelemetry) |
//! | TaskRunnerProvider | Background task spawning (retention sweep) |
//! | FileSystemProvider | Filesystem access for bulk import/export |

/// Embedding provider port
pub mod embedding;
pub mod fs;
pub mod http;
/// Observability metrics provider port (Prometheus/OpenTelemetry)
pub mod metrics;
/// Background task runner provider port
pub mod task;
/// Vector store provider port
pub mod vector_store;

pub use embedding::EmbeddingProvider;
pub use fs::{DirEntry, FileSystemProvider};
pub use http::{HttpClientConfig, HttpClientProvider};
pub use metrics::{MetricLabels, MetricsError, MetricsProvider, MetricsResult};
pub use task::TaskRunnerProvider;
pub use vector_store::{VectorStoreAdmin, VectorStoreProvider};
