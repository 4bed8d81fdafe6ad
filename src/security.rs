//! Security helpers (payload digests, constant-time compare)

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// SHA-256 of `payload`, standard base64 encoded (padding included).
/// This is the form carried in the `sha256` claim of webhook tokens.
pub fn sha256_base64(payload: &[u8]) -> String {
    let digest = Sha256::digest(payload);
    STANDARD.encode(digest)
}

/// Constant-time equality for encoded digests.
pub fn ct_eq_str(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_base64_known_vector() {
        // sha256("") = e3b0c442...b855
        assert_eq!(
            sha256_base64(b""),
            "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU="
        );
    }

    #[test]
    fn test_ct_eq_str() {
        assert!(ct_eq_str("abc", "abc"));
        assert!(!ct_eq_str("abc", "abd"));
        assert!(!ct_eq_str("abc", "abcd"));
    }
}
