//! RSA/PKCS#1 v1.5 encryption and decryption of individual text messages.
//!
//! **Payload bound:** PKCS#1 v1.5 padding consumes 11 bytes of the modulus,
//! so a key of `k` modulus bytes can encrypt at most `k - 11` bytes per
//! operation. Longer messages are rejected, never truncated.
//!
//! **Ciphertext is not deterministic.** The padding incorporates fresh
//! randomness from the OS CSPRNG on every call, so encrypting the same
//! message twice yields different ciphertext bytes. Both decrypt back to the
//! original message.

use rand::rngs::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};
use thiserror::Error;

/// Bytes of the modulus consumed by PKCS#1 v1.5 padding.
pub const PKCS1V15_OVERHEAD: usize = 11;

/// Errors produced by the cipher layer.
#[derive(Debug, Error)]
pub enum CipherError {
    /// The message exceeds the maximum payload the key's modulus admits.
    #[error("message too large: {size} bytes (max {max} bytes for this key)")]
    MessageTooLarge {
        /// UTF-8 byte length of the rejected message.
        size: usize,
        /// Maximum payload for the loaded key, `modulus_bytes - 11`.
        max: usize,
    },

    /// The ciphertext string is not valid hexadecimal.
    #[error("ciphertext is not valid hexadecimal")]
    InvalidHex,

    /// RSA decryption failed: malformed padding, wrong-length ciphertext, or
    /// ciphertext produced under a different key. These causes are
    /// cryptographically indistinguishable and are deliberately collapsed
    /// into one variant.
    #[error("decryption failed: malformed ciphertext or wrong key")]
    DecryptionFailure,

    /// The decrypted bytes are not valid UTF-8 text.
    #[error("decrypted bytes are not valid UTF-8")]
    InvalidUtf8,

    /// The RSA backend rejected the encryption input (should be unreachable
    /// once the payload bound has been checked).
    #[error("encryption failed")]
    EncryptionFailure,
}

/// Maximum message payload in bytes for `public_key`, `modulus_bytes - 11`.
pub fn max_message_len(public_key: &RsaPublicKey) -> usize {
    public_key.size() - PKCS1V15_OVERHEAD
}

/// Encrypt a text message under `public_key` using RSA/PKCS#1 v1.5.
///
/// Padding randomness is drawn from the OS CSPRNG per call, so repeated
/// calls with the same message produce different ciphertexts.
///
/// # Errors
///
/// Returns [`CipherError::MessageTooLarge`] if the UTF-8 encoding of
/// `message` exceeds [`max_message_len`].
pub fn encrypt_message(public_key: &RsaPublicKey, message: &str) -> Result<String, CipherError> {
    let data = message.as_bytes();
    let max = max_message_len(public_key);
    if data.len() > max {
        return Err(CipherError::MessageTooLarge {
            size: data.len(),
            max,
        });
    }

    let mut rng = OsRng;
    let ciphertext = public_key
        .encrypt(&mut rng, Pkcs1v15Encrypt, data)
        .map_err(|_| CipherError::EncryptionFailure)?;

    Ok(hex::encode(ciphertext))
}

/// Decrypt a hex-encoded RSA/PKCS#1 v1.5 ciphertext back to text.
///
/// # Errors
///
/// Returns [`CipherError::InvalidHex`] if `ciphertext_hex` is not valid
/// hexadecimal, [`CipherError::DecryptionFailure`] if padding removal fails
/// (wrong length, corrupted bytes, or a different key), and
/// [`CipherError::InvalidUtf8`] if the recovered bytes are not valid text.
pub fn decrypt_message(
    private_key: &RsaPrivateKey,
    ciphertext_hex: &str,
) -> Result<String, CipherError> {
    let ciphertext = hex::decode(ciphertext_hex).map_err(|_| CipherError::InvalidHex)?;

    let plaintext = private_key
        .decrypt(Pkcs1v15Encrypt, &ciphertext)
        .map_err(|_| CipherError::DecryptionFailure)?;

    String::from_utf8(plaintext).map_err(|_| CipherError::InvalidUtf8)
}
