//!
//! **Documentation**: [docs/modules/infrastructure.md](../../../../docs/modules/infrastructure.md)
//!
/// Constant value for `AES_GCM_KEY_SIZE`.
pub const AES_GCM_KEY_SIZE: usize = 32;
/// Constant value for `AES_GCM_NONCE_SIZE`.
pub const AES_GCM_NONCE_SIZE: usize = 12;
/// Constant value for `PBKDF2_ITERATIONS`.
pub const PBKDF2_ITERATIONS: u32 = 100_000;
/// Constant value for `ENCRYPTED_DATA_PADDING`.
pub const ENCRYPTED_DATA_PADDING: usize = 256;
