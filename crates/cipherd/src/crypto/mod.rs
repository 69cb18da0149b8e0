//! RSA/PKCS#1 v1.5 message encryption primitives.
//!
//! This module is intentionally free of HTTP dependencies. It provides the
//! low-level encrypt/decrypt operations used by the request handlers.
//!
//! # Ciphertext format
//!
//! Raw RSA ciphertext bytes (always exactly the modulus length), hex-encoded
//! in lowercase for transport.
//!
//! # Padding scheme
//!
//! PKCS#1 v1.5 is retained for wire compatibility with existing clients even
//! though OAEP is the modern recommendation. v1.5 is more exposed to
//! padding-oracle-style attacks, so this service must not leak padding
//! validity through distinguishable error channels. Do not swap the padding
//! scheme without versioning the wire format.

pub mod cipher;

pub use cipher::{decrypt_message, encrypt_message, max_message_len, CipherError};
