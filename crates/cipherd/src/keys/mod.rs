//! Key pair loading from the on-disk key file.
//!
//! # Lifecycle
//!
//! 1. At startup, [`load`] reads the JSON key file named in the configuration
//!    and parses both PEM fields into RSA key handles.
//! 2. The resulting [`KeyPair`] is wrapped in an `Arc` and injected into every
//!    request handler via the application state. It is never mutated, never
//!    reloaded, and lives for the whole process.
//! 3. Any load failure is fatal: the process must not start serving requests
//!    without its key pair.
//!
//! # Security invariants
//!
//! - The private key is stored unencrypted in the key file (no passphrase
//!   support); protecting that file is the deployment's job.
//! - Private key material is **never** logged, traced, or echoed in errors.
//! - The loader trusts that `public_key` is the counterpart of `private_key`;
//!   it does not verify the correspondence.

pub mod pair;

pub use pair::{KeyLoadError, KeyPair};

use tracing::info;

/// Read and parse the key file at `path`.
///
/// # Errors
///
/// Returns [`KeyLoadError`] if the file cannot be read, is not valid JSON, or
/// either PEM field fails to parse.
pub fn load(path: &str) -> Result<KeyPair, KeyLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| KeyLoadError::Read {
        path: path.to_owned(),
        source,
    })?;

    let pair = KeyPair::from_key_file(&contents)?;
    info!(path, key_bits = pair.modulus_bits(), "key pair loaded");
    Ok(pair)
}
