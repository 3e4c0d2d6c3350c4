/// Constant value for `CACHE_DEFAULT_TTL_SECS`.
pub const CACHE_DEFAULT_TTL_SECS: u64 = 3600;
/// Constant value for `CACHE_DEFAULT_SIZE_LIMIT`.
pub const CACHE_DEFAULT_SIZE_LIMIT: usize = 100 * 1024 * 1024;
/// Constant value for `REDIS_POOL_SIZE`.
pub const REDIS_POOL_SIZE: usize = 10;
/// Constant value for `DEFAULT_CACHE_NAMESPACE`.
pub const DEFAULT_CACHE_NAMESPACE: &str = "mcb";
/// Constant value for `CACHE_NAMESPACE_SEPARATOR`.
pub const CACHE_NAMESPACE_SEPARATOR: &str = ":";
