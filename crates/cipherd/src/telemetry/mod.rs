//! Structured logging setup via `tracing`.
//!
//! # Telemetry invariants
//!
//! - **No plaintext, ciphertext, or key material** must appear in any span
//!   attribute or log field. Log lengths and error kinds, never contents.
//! - Log level is configurable via `LOG_LEVEL` (default: `info`) or the
//!   standard `RUST_LOG` filter syntax.

pub mod init;

pub use init::init_telemetry;
