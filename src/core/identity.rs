//! core/identity.rs
//! Deterministic ids from file paths.
//!
//! - Pure function of the path bytes (no clock, no randomness)
//! - Same path => same id on every run and machine
//! - Not a cryptographic commitment: only the first 64 bits of the digest are used

use std::path::Path;

use sha2::{Digest, Sha256};
use uuid::{Builder, Variant, Version};

/// Derive a version-5-style id (`xxxxxxxx-xxxx-5xxx-[89ab]xxx-xxxxxxxxxxxx`).
pub fn derive_id(path: &Path) -> String {
    let digest = Sha256::digest(path.as_os_str().as_encoded_bytes());

    // 64-bit word, repeated to fill 16 bytes.
    let mut bytes = [0u8; 16];
    for (i, b) in bytes.iter_mut().enumerate() {
        *b = digest[i % 8];
    }

    Builder::from_bytes(bytes)
        .with_variant(Variant::RFC4122)
        .with_version(Version::Sha1)
        .into_uuid()
        .hyphenated()
        .to_string()
}
