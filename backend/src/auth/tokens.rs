//! Refresh token digests
//!
//! Refresh tokens are stored server-side as SHA-256 digests, so the
//! refresh and logout flows can look a presented token up by digest
//! without keeping the token itself in the database.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 digest of a refresh token
pub fn token_digest(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    let digest = hasher.finalize();
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        assert_eq!(token_digest("abc"), token_digest("abc"));
        assert_ne!(token_digest("abc"), token_digest("abd"));
    }

    #[test]
    fn test_digest_is_hex_sha256() {
        let digest = token_digest("abc");
        assert_eq!(digest.len(), 64);
        // SHA-256("abc") is a well-known vector
        assert_eq!(
            digest,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
