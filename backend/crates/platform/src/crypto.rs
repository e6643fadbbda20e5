//! Cryptographic Utilities
//!
//! SHA-256 hashing, random token generation, and the HMAC-signed token
//! format used for session credentials and identity assertions.

use base64::{Engine, engine::general_purpose};
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rand::rng().fill_bytes(&mut bytes);
    bytes
}

/// Generate a random hex token (`byte_len` bytes, `2 * byte_len` hex chars)
pub fn random_hex_token(byte_len: usize) -> String {
    to_hex(&random_bytes(byte_len))
}

/// Compute SHA-256 hash
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute SHA-256 hash and render it as lowercase hex
pub fn sha256_hex(data: &[u8]) -> String {
    to_hex(&sha256(data))
}

/// Encode bytes as lowercase hex
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push_str(&format!("{:02x}", b));
    }
    out
}

/// Encode bytes as base64
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decode base64 to bytes
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s)
}

/// Constant-time comparison to prevent timing attacks
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

// ============================================================================
// Signed tokens
// ============================================================================

/// Sign a payload as `"{payload}.{base64url(hmac_sha256(secret, payload))}"`
///
/// The payload must not contain `.` separators of its own beyond what the
/// caller expects to split back out; signatures cover the full payload.
pub fn sign_token(secret: &[u8; 32], payload: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    let signature = mac.finalize().into_bytes();

    format!(
        "{}.{}",
        payload,
        general_purpose::URL_SAFE_NO_PAD.encode(signature)
    )
}

/// Verify a signed token, returning the payload on success
///
/// The signature is the final `.`-separated segment; everything before it
/// is the payload. Returns `None` for malformed tokens, bad base64, or a
/// signature mismatch.
pub fn verify_token(secret: &[u8; 32], token: &str) -> Option<String> {
    let (payload, signature_b64) = token.rsplit_once('.')?;
    if payload.is_empty() {
        return None;
    }

    let signature = general_purpose::URL_SAFE_NO_PAD.decode(signature_b64).ok()?;

    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    mac.verify_slice(&signature).ok()?;

    Some(payload.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_values() {
        // SHA-256 of empty string
        let hash = sha256(b"");
        let expected =
            hex::decode("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
                .unwrap();
        assert_eq!(hash.to_vec(), expected);

        // SHA-256 of "hello"
        assert_eq!(
            sha256_hex(b"hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_random_bytes() {
        let bytes = random_bytes(32);
        assert_eq!(bytes.len(), 32);
        // Should not be all zeros (statistically)
        assert!(bytes.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_random_hex_token_length() {
        let token = random_hex_token(32);
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_base64_roundtrip() {
        let data = b"hello world";
        let encoded = to_base64(data);
        let decoded = from_base64(&encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_constant_time_eq() {
        let a = [1u8, 2, 3, 4];
        let b = [1u8, 2, 3, 4];
        let c = [1u8, 2, 3, 5];
        assert!(constant_time_eq(&a, &b));
        assert!(!constant_time_eq(&a, &c));
        assert!(!constant_time_eq(&a, &b[..3]));
    }

    #[test]
    fn test_sign_verify_roundtrip() {
        let secret = [7u8; 32];
        let token = sign_token(&secret, "abc-123");
        assert_eq!(verify_token(&secret, &token), Some("abc-123".to_string()));
    }

    #[test]
    fn test_verify_rejects_tampered_payload() {
        let secret = [7u8; 32];
        let token = sign_token(&secret, "abc-123");
        let tampered = token.replacen("abc", "abd", 1);
        assert_eq!(verify_token(&secret, &tampered), None);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = sign_token(&[7u8; 32], "abc-123");
        assert_eq!(verify_token(&[8u8; 32], &token), None);
    }

    #[test]
    fn test_verify_rejects_malformed() {
        let secret = [7u8; 32];
        assert_eq!(verify_token(&secret, "no-separator"), None);
        assert_eq!(verify_token(&secret, ".sig-only"), None);
        assert_eq!(verify_token(&secret, "payload.not!base64"), None);
    }

    #[test]
    fn test_sign_multi_segment_payload() {
        // Identity assertions carry "uid.exp" payloads; the signature is
        // always the last segment.
        let secret = [3u8; 32];
        let token = sign_token(&secret, "user-1.1924992000000");
        assert_eq!(
            verify_token(&secret, &token),
            Some("user-1.1924992000000".to_string())
        );
    }
}
