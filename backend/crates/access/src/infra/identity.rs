//! Identity Provider Implementation
//!
//! Verifies the externally issued identity assertions the session issuer
//! consumes. The assertion is an HMAC-signed `"{uid}.{expiry_ms}"`
//! payload produced by the trusted identity service.

use chrono::Utc;
use platform::crypto;

use crate::domain::repository::IdentityProvider;
use crate::error::AccessResult;

/// HMAC-backed identity provider
#[derive(Clone)]
pub struct HmacIdentityProvider {
    secret: [u8; 32],
}

impl HmacIdentityProvider {
    pub fn new(secret: [u8; 32]) -> Self {
        Self { secret }
    }

    /// Issue an assertion for `uid` valid for `ttl_secs`
    ///
    /// The production issuer lives in the identity service; this exists
    /// for provisioning scripts and tests that share the secret.
    pub fn issue_assertion(&self, uid: &str, ttl_secs: i64) -> String {
        let expiry_ms = Utc::now().timestamp_millis() + ttl_secs * 1000;
        crypto::sign_token(&self.secret, &format!("{uid}.{expiry_ms}"))
    }
}

impl IdentityProvider for HmacIdentityProvider {
    async fn verify_assertion(&self, assertion: &str) -> AccessResult<Option<String>> {
        let Some(payload) = crypto::verify_token(&self.secret, assertion) else {
            return Ok(None);
        };

        let Some((uid, expiry_ms)) = payload.rsplit_once('.') else {
            return Ok(None);
        };

        let Ok(expiry_ms) = expiry_ms.parse::<i64>() else {
            return Ok(None);
        };

        if uid.is_empty() || expiry_ms <= Utc::now().timestamp_millis() {
            return Ok(None);
        }

        Ok(Some(uid.to_string()))
    }
}
