/// Constant value for `DB_POOL_SIZE`.
pub const DB_POOL_SIZE: u32 = 10;
/// Constant value for `DB_CONNECTION_TIMEOUT_SECS`.
pub const DB_CONNECTION_TIMEOUT_SECS: u64 = 30;
/// Constant value for `DB_QUERY_TIMEOUT_SECS`.
pub const DB_QUERY_TIMEOUT_SECS: u64 = 60;
