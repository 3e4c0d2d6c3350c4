//! Operation logging port: single entry point (level + context + message + optional detail).

/// Log level for the unified `log` method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level
    Info,
    /// Debug level
    Debug,
    /// Trace level
    Trace,
}

/// Operation logger interface: one method for all levels, optional detail.
pub trait OperationLogger: Send + Sync {
    /// Logs at the given level. Message always; detail only when config permits.
    fn log(
        &self,
        level: LogLevel,
        context: &str,
        message: &str,
        detail: Option<&dyn std::fmt::Display>,
    );
}

/// Structured, persisted audit trail — distinct from [`OperationLogger`]'s
/// ephemeral trace logging.
#[async_trait::async_trait]
pub trait AuditLogger: Send + Sync {
    /// Records an audit event.
    async fn record(&self, record: crate::entities::audit::AuditRecord) -> crate::error::Result<()>;
}
