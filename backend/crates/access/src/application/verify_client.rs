//! Verify Client Use Case
//!
//! Client-portal credential check against the static digest table.
//! Deliberately no lockout or throttle: the portal guards low-value
//! marketing content, and the generic failure keeps usernames private.

use std::sync::Arc;

use platform::password;

use crate::domain::entity::client_config::ClientDirectory;
use crate::error::{AccessError, AccessResult};

/// Digest compared when the username is unknown, so a miss costs the
/// same work as a wrong password.
const DUMMY_DIGEST: &str = "0000000000000000000000000000000000000000000000000000000000000000";

/// Verify client output
#[derive(Debug)]
pub struct VerifiedClient {
    pub client_id: String,
    pub name: String,
    pub brand_color: String,
}

/// Verify client use case
pub struct VerifyClientUseCase {
    directory: Arc<ClientDirectory>,
}

impl VerifyClientUseCase {
    pub fn new(directory: Arc<ClientDirectory>) -> Self {
        Self { directory }
    }

    /// Check a username/password pair
    ///
    /// Unknown username and wrong password both return
    /// `InvalidCredentials`; callers must not be able to distinguish
    /// the two.
    pub fn execute(&self, username: &str, raw_password: &str) -> AccessResult<VerifiedClient> {
        let client = self.directory.find_active(username);

        let expected = client.map(|c| c.password_digest).unwrap_or(DUMMY_DIGEST);
        let password_ok = password::verify_password(raw_password, expected);

        match client {
            Some(c) if password_ok => Ok(VerifiedClient {
                client_id: c.id.to_string(),
                name: c.name.to_string(),
                brand_color: c.brand_color.to_string(),
            }),
            _ => Err(AccessError::InvalidCredentials),
        }
    }
}
