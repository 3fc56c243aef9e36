//! Bearer token generation and hashing.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Generate a fresh raw bearer token. Shown once at issue time; only the
/// hash is persisted.
#[must_use]
pub fn generate_token() -> String {
    format!("pt_{}{}", Uuid::now_v7().simple(), Uuid::now_v7().simple())
}

/// Hex-encoded SHA-256 of the raw token, the stored lookup key.
#[must_use]
pub fn hash_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_stable_and_hex() {
        let hash = hash_token("pt_example");

        assert_eq!(hash, hash_token("pt_example"));
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generated_tokens_are_unique() {
        assert_ne!(generate_token(), generate_token());
    }
}
