//! Request and response types exchanged over the public HTTP API.
//!
//! All bodies are JSON. Ciphertext travels as a lowercase hexadecimal string;
//! key material travels as PEM text.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Encrypt endpoint
// ---------------------------------------------------------------------------

/// Request body for `POST /encrypt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptRequest {
    /// Plaintext message to encrypt. Bounded by the key's modulus: at most
    /// `modulus_bytes - 11` bytes once UTF-8 encoded.
    pub message: String,
}

/// Successful response body for `POST /encrypt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptResponse {
    /// RSA/PKCS#1 v1.5 ciphertext, hex-encoded. Always exactly
    /// `modulus_bytes * 2` characters.
    pub encrypted_message: String,
}

// ---------------------------------------------------------------------------
// Decrypt endpoint
// ---------------------------------------------------------------------------

/// Request body for `POST /decrypt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecryptRequest {
    /// Hex-encoded ciphertext previously produced by `POST /encrypt`.
    pub encrypted_message: String,
}

/// Successful response body for `POST /decrypt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecryptResponse {
    /// Recovered plaintext message.
    pub decrypted_message: String,
}

// ---------------------------------------------------------------------------
// Public key endpoint
// ---------------------------------------------------------------------------

/// Response body for `GET /publicKey`.
///
/// The PEM text is returned exactly as it was loaded at startup, so repeated
/// calls within one process lifetime are byte-identical.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicKeyResponse {
    /// PEM-encoded RSA public key.
    pub public_key: String,
}

// ---------------------------------------------------------------------------
// Error response
// ---------------------------------------------------------------------------

/// Standard error response body returned on any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short machine-readable error code (e.g. `"bad_request"`).
    pub code: String,
    /// Human-readable description safe to expose to callers.
    pub message: String,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status. Always `"ok"` once the process is serving —
    /// a key-load failure is fatal at startup, so a running process always
    /// has its key pair.
    pub status: String,
    /// Bit length of the loaded RSA modulus.
    pub key_bits: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encrypt_request_round_trip() {
        let req = EncryptRequest {
            message: "hello".into(),
        };
        let json = serde_json::to_string(&req).unwrap();
        let decoded: EncryptRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.message, "hello");
    }

    #[test]
    fn decrypt_response_field_name() {
        let resp = DecryptResponse {
            decrypted_message: "hello".into(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"decrypted_message\""));
    }

    #[test]
    fn error_response_new() {
        let e = ErrorResponse::new("bad_request", "ciphertext is not valid hex");
        assert_eq!(e.code, "bad_request");
        assert!(e.message.contains("not valid hex"));
    }

    #[test]
    fn health_response_serde() {
        let h = HealthResponse {
            status: "ok".into(),
            key_bits: 2048,
        };
        let json = serde_json::to_string(&h).unwrap();
        let decoded: HealthResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.key_bits, 2048);
    }
}
