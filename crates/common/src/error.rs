//! Common error types shared across crates.

use thiserror::Error;

/// Top-level service error type.
///
/// Variants map to HTTP status codes returned to callers:
/// - [`ServiceError::BadRequest`] → 400
/// - [`ServiceError::PayloadTooLarge`] → 413
/// - [`ServiceError::Unprocessable`] → 422
/// - [`ServiceError::Internal`] → 500
///
/// The split between 4xx and 5xx matters to callers: a 4xx means the request
/// itself can never succeed (retrying is pointless), a 5xx means the service
/// is at fault.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request was malformed — invalid JSON or a ciphertext that is not
    /// valid hexadecimal.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The plaintext exceeds the maximum payload the key's modulus admits.
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),

    /// The request was well-formed but the cryptographic operation rejected
    /// it — malformed padding, wrong-length ciphertext, or non-UTF-8 plaintext.
    #[error("unprocessable: {0}")]
    Unprocessable(String),

    /// An unexpected internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns the HTTP status code that should be sent for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::BadRequest(_) => 400,
            ServiceError::PayloadTooLarge(_) => 413,
            ServiceError::Unprocessable(_) => 422,
            ServiceError::Internal(_) => 500,
        }
    }

    /// Short machine-readable code used in the JSON error body.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::BadRequest(_) => "bad_request",
            ServiceError::PayloadTooLarge(_) => "payload_too_large",
            ServiceError::Unprocessable(_) => "unprocessable",
            ServiceError::Internal(_) => "internal_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_codes() {
        assert_eq!(ServiceError::BadRequest("x".into()).http_status(), 400);
        assert_eq!(ServiceError::PayloadTooLarge("x".into()).http_status(), 413);
        assert_eq!(ServiceError::Unprocessable("x".into()).http_status(), 422);
        assert_eq!(ServiceError::Internal("x".into()).http_status(), 500);
    }

    #[test]
    fn codes_match_variants() {
        assert_eq!(ServiceError::BadRequest("x".into()).code(), "bad_request");
        assert_eq!(
            ServiceError::PayloadTooLarge("x".into()).code(),
            "payload_too_large"
        );
    }

    #[test]
    fn display_includes_message() {
        let e = ServiceError::BadRequest("ciphertext is not valid hex".into());
        assert!(e.to_string().contains("ciphertext is not valid hex"));
    }
}
