//! Password Digesting for the Static Credential Table
//!
//! The client-portal credential store is a compiled-in table of
//! precomputed SHA-256 digests; this module computes and verifies them.
//! Passwords are NFKC-normalized before digesting so that visually
//! identical Unicode input always produces the same digest.
//!
//! This is deliberately not an interactive-account password scheme: there
//! is no salt and no memory-hard KDF, because the table guards low-value
//! marketing content and the plaintexts are ops-provisioned, not
//! user-chosen.

use unicode_normalization::UnicodeNormalization;

use crate::crypto::{constant_time_eq, sha256_hex};

/// Compute the hex digest stored in the credential table
pub fn digest_password(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect();
    sha256_hex(normalized.as_bytes())
}

/// Verify a submitted password against a stored hex digest
///
/// Comparison is constant-time over the hex representation.
pub fn verify_password(raw: &str, expected_hex: &str) -> bool {
    let computed = digest_password(raw);
    constant_time_eq(computed.as_bytes(), expected_hex.as_bytes())
}
