//!
//! **Documentation**: [docs/modules/infrastructure.md](../../../../docs/modules/infrastructure.md)
//!
/// Constant value for `EVENT_BUS_BUFFER_SIZE`.
pub const EVENT_BUS_BUFFER_SIZE: usize = 1000;
/// Constant value for `EVENT_BUS_CONNECTION_TIMEOUT_MS`.
pub const EVENT_BUS_CONNECTION_TIMEOUT_MS: u64 = 5000;
/// Constant value for `EVENT_BUS_MAX_RECONNECT_ATTEMPTS`.
pub const EVENT_BUS_MAX_RECONNECT_ATTEMPTS: u32 = 5;
