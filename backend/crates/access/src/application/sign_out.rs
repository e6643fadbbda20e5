//! Sign Out Use Case
//!
//! Destroys a session. Best-effort: an unparsable or already-deleted
//! token still clears the cookie on the presentation side.

use std::sync::Arc;

use platform::crypto;
use uuid::Uuid;

use crate::application::config::AccessConfig;
use crate::domain::repository::SessionRepository;
use crate::error::AccessResult;
use kernel::id::SessionId;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AccessConfig>,
}

impl<S> SignOutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AccessConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Delete the session referenced by `session_token`, if any
    pub async fn execute(&self, session_token: &str) -> AccessResult<()> {
        let Some(payload) = crypto::verify_token(&self.config.session_secret, session_token)
        else {
            // Nothing to delete; sign-out is idempotent
            return Ok(());
        };

        let Ok(uuid) = Uuid::parse_str(&payload) else {
            return Ok(());
        };

        self.session_repo.delete(&SessionId::from_uuid(uuid)).await?;
        tracing::debug!(session_id = %uuid, "Session destroyed");
        Ok(())
    }
}
