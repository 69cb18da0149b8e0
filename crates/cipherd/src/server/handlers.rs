//! Axum request handlers for all service endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::protocol::{
    DecryptRequest, DecryptResponse, EncryptRequest, EncryptResponse, ErrorResponse,
    HealthResponse, PublicKeyResponse,
};
use common::ServiceError;
use tracing::warn;

use super::state::AppState;
use crate::crypto::cipher::{decrypt_message, encrypt_message, CipherError};

/// `POST /encrypt` — encrypt a text message under the service public key.
///
/// Returns the RSA/PKCS#1 v1.5 ciphertext as a lowercase hex string. The
/// message is bounded by the key modulus; oversized messages get a 413.
pub async fn encrypt(
    State(state): State<AppState>,
    Json(req): Json<EncryptRequest>,
) -> Response {
    match encrypt_message(state.key_pair.public(), &req.message) {
        Ok(encrypted_message) => {
            (StatusCode::OK, Json(EncryptResponse { encrypted_message })).into_response()
        }
        Err(e) => {
            // Log the size and error kind only — never message contents.
            warn!(error = %e, message_bytes = req.message.len(), "encrypt rejected");
            error_response(e)
        }
    }
}

/// `POST /decrypt` — decrypt a hex-encoded ciphertext with the private key.
///
/// A ciphertext that is not valid hex gets a 400; one that fails padding
/// removal (corrupted, wrong length, or produced under a different key — the
/// three are indistinguishable) gets a 422, as does non-UTF-8 plaintext.
pub async fn decrypt(
    State(state): State<AppState>,
    Json(req): Json<DecryptRequest>,
) -> Response {
    match decrypt_message(state.key_pair.private(), &req.encrypted_message) {
        Ok(decrypted_message) => {
            (StatusCode::OK, Json(DecryptResponse { decrypted_message })).into_response()
        }
        Err(e) => {
            warn!(error = %e, ciphertext_chars = req.encrypted_message.len(), "decrypt rejected");
            error_response(e)
        }
    }
}

/// `GET /publicKey` — publish the service public key.
///
/// Returns the PEM text verbatim as loaded at startup, byte-identical on
/// every call.
pub async fn public_key(State(state): State<AppState>) -> Json<PublicKeyResponse> {
    Json(PublicKeyResponse {
        public_key: state.key_pair.public_pem().to_owned(),
    })
}

/// `GET /health` — liveness check.
///
/// A running process always has its key pair (key-load failure is fatal at
/// startup), so this reports `"ok"` plus the loaded modulus size.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        key_bits: state.key_pair.modulus_bits(),
    })
}

/// Catch-all 404 handler.
pub async fn not_found() -> impl IntoResponse {
    let err = ErrorResponse::new("not_found", "the requested resource does not exist");
    (StatusCode::NOT_FOUND, Json(err))
}

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

/// Classify a cipher-layer error as a [`ServiceError`].
///
/// Malformed hex is the caller's fault and unambiguously detectable up front
/// (400). An oversized message can never succeed under this key (413). A
/// failed decryption or non-text plaintext means the request was well-formed
/// but unprocessable (422). Cryptographic failures are not transient, so no
/// error here invites a retry.
fn service_error(err: CipherError) -> ServiceError {
    match err {
        CipherError::InvalidHex => ServiceError::BadRequest(err.to_string()),
        CipherError::MessageTooLarge { .. } => ServiceError::PayloadTooLarge(err.to_string()),
        CipherError::DecryptionFailure | CipherError::InvalidUtf8 => {
            ServiceError::Unprocessable(err.to_string())
        }
        CipherError::EncryptionFailure => ServiceError::Internal(err.to_string()),
    }
}

/// Build the client-facing JSON error response for a cipher-layer failure.
fn error_response(err: CipherError) -> Response {
    let err = service_error(err);
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::new(err.code(), err.to_string()))).into_response()
}
