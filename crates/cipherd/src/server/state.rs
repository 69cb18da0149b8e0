//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use crate::keys::KeyPair;

/// Application state shared across all request handlers.
///
/// The key pair is read-only for the process lifetime, so the state needs no
/// locks: handlers share one `Arc` and every cryptographic call is a pure
/// function of its input plus the fixed keys.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The RSA key pair loaded at startup.
    pub key_pair: Arc<KeyPair>,
}

impl AppState {
    /// Create a new [`AppState`] holding the loaded key pair.
    pub fn new(key_pair: KeyPair) -> Self {
        Self {
            key_pair: Arc::new(key_pair),
        }
    }
}

/// State backed by a freshly generated 1024-bit key pair, shared across the
/// test suite because RSA keygen dominates test runtime.
#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    use rand::rngs::OsRng;
    use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};
    use rsa::{RsaPrivateKey, RsaPublicKey};
    use std::sync::OnceLock;

    static PAIR: OnceLock<Arc<KeyPair>> = OnceLock::new();
    let key_pair = PAIR.get_or_init(|| {
        let mut rng = OsRng;
        let private = RsaPrivateKey::new(&mut rng, 1024).unwrap();
        let private_pem = private.to_pkcs8_pem(LineEnding::LF).unwrap().to_string();
        let public_pem = RsaPublicKey::from(&private)
            .to_public_key_pem(LineEnding::LF)
            .unwrap();
        let json = serde_json::json!({
            "private_key": private_pem,
            "public_key": public_pem,
        })
        .to_string();
        Arc::new(KeyPair::from_key_file(&json).unwrap())
    });
    AppState {
        key_pair: Arc::clone(key_pair),
    }
}
