//! AES-256-GCM encryption with PBKDF2-derived keys, and HMAC-SHA256 signing.
//!
//! Backs the `vectorstore-encrypted` provider feature and any
//! credential-at-rest needs in the infrastructure layer. Constants mirror
//! `mcb-infrastructure::constants::crypto`.

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use hmac::{Hmac, Mac};
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

use crate::error::{Result, UtilsError};

/// AES-256 key length in bytes.
pub const AES_GCM_KEY_SIZE: usize = 32;
/// AES-GCM nonce length in bytes.
pub const AES_GCM_NONCE_SIZE: usize = 12;
/// PBKDF2-HMAC-SHA256 iteration count for key derivation.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Derive a 256-bit AES key from a passphrase and salt via PBKDF2-HMAC-SHA256.
#[must_use]
pub fn derive_key(passphrase: &str, salt: &[u8]) -> [u8; AES_GCM_KEY_SIZE] {
    let mut key = [0u8; AES_GCM_KEY_SIZE];
    pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key);
    key
}

/// Encrypt `plaintext` under `key`, returning `nonce || ciphertext`.
///
/// # Errors
///
/// Returns [`UtilsError::Crypto`] if AES-GCM sealing fails (should only
/// happen on a malformed key).
pub fn encrypt(key: &[u8; AES_GCM_KEY_SIZE], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| UtilsError::crypto(format!("encryption failed: {e}")))?;
    let mut out = Vec::with_capacity(AES_GCM_NONCE_SIZE + ciphertext.len());
    out.extend_from_slice(nonce.as_slice());
    out.extend_from_slice(&ciphertext);
    Ok(out)
}

/// Decrypt a `nonce || ciphertext` blob produced by [`encrypt`].
///
/// # Errors
///
/// Returns [`UtilsError::InvalidInput`] if `sealed` is shorter than the
/// nonce length, or [`UtilsError::Crypto`] if authentication fails
/// (wrong key or tampered ciphertext).
pub fn decrypt(key: &[u8; AES_GCM_KEY_SIZE], sealed: &[u8]) -> Result<Vec<u8>> {
    if sealed.len() < AES_GCM_NONCE_SIZE {
        return Err(UtilsError::invalid_input("sealed blob shorter than nonce"));
    }
    let (nonce_bytes, ciphertext) = sealed.split_at(AES_GCM_NONCE_SIZE);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    let nonce = Nonce::from_slice(nonce_bytes);
    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|e| UtilsError::crypto(format!("decryption failed: {e}")))
}

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 signature over `message`, hex-encoded.
#[must_use]
pub fn sign(key: &[u8], message: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts any key length");
    mac.update(message);
    hex::encode(mac.finalize().into_bytes())
}

/// Verify an HMAC-SHA256 signature in constant time.
#[must_use]
pub fn verify(key: &[u8], message: &[u8], signature_hex: &str) -> bool {
    let Ok(expected) = hex::decode(signature_hex) else {
        return false;
    };
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts any key length");
    mac.update(message);
    mac.verify_slice(&expected).is_ok()
}
