//! Verify Session Use Case
//!
//! The authoritative check behind the edge guard: validates the cookie
//! token cryptographically, loads the session row, and re-fetches the
//! profile so the effective role is never stale.

use std::sync::Arc;

use kernel::id::SessionId;
use platform::crypto;
use uuid::Uuid;

use crate::application::config::AccessConfig;
use crate::domain::entity::session::Session;
use crate::domain::repository::{ProfileRepository, SessionRepository};
use crate::domain::value_object::role::Role;
use crate::error::{AccessError, AccessResult};

/// Verified session output
#[derive(Debug)]
pub struct VerifiedSession {
    pub uid: String,
    pub email: String,
    pub role: Option<Role>,
    pub client_id: Option<String>,
    pub expires_at_ms: i64,
}

/// Verify session use case
pub struct VerifySessionUseCase<P, S>
where
    P: ProfileRepository,
    S: SessionRepository,
{
    profile_repo: Arc<P>,
    session_repo: Arc<S>,
    config: Arc<AccessConfig>,
}

impl<P, S> VerifySessionUseCase<P, S>
where
    P: ProfileRepository,
    S: SessionRepository,
{
    pub fn new(profile_repo: Arc<P>, session_repo: Arc<S>, config: Arc<AccessConfig>) -> Self {
        Self {
            profile_repo,
            session_repo,
            config,
        }
    }

    /// Verify a session token and return the caller's current identity
    pub async fn execute(&self, session_token: &str) -> AccessResult<VerifiedSession> {
        let session = self.get_session(session_token).await?;

        // Role comes from the profile store, not the session snapshot,
        // so a role change applies on the next verification.
        let profile = self
            .profile_repo
            .find_by_uid(&session.uid)
            .await?
            .ok_or(AccessError::ProfileNotFound)?;

        // A profile stripped of its role no longer verifies, even though
        // the session row is still live
        if profile.role.is_none() {
            return Err(AccessError::RoleMissing);
        }

        Ok(VerifiedSession {
            uid: profile.uid,
            email: profile.email,
            role: profile.role,
            client_id: profile.client_id,
            expires_at_ms: session.expires_at.timestamp_millis(),
        })
    }

    /// Verify a session token and require at least `min_role`
    pub async fn authorize(
        &self,
        session_token: &str,
        min_role: Role,
    ) -> AccessResult<VerifiedSession> {
        let verified = self.execute(session_token).await?;
        let role = verified.role.ok_or(AccessError::RoleMissing)?;
        if !role.grants(min_role) {
            return Err(AccessError::InsufficientRole);
        }
        Ok(verified)
    }

    /// Parse, verify, and load the session row
    async fn get_session(&self, session_token: &str) -> AccessResult<Session> {
        let session_id = self.parse_session_token(session_token)?;

        let session = self
            .session_repo
            .find_by_id(&session_id)
            .await?
            .ok_or(AccessError::SessionInvalid)?;

        if session.is_expired() {
            self.session_repo.delete(&session_id).await?;
            return Err(AccessError::SessionExpired);
        }

        Ok(session)
    }

    fn parse_session_token(&self, session_token: &str) -> AccessResult<SessionId> {
        let payload = crypto::verify_token(&self.config.session_secret, session_token)
            .ok_or(AccessError::SessionInvalid)?;

        let uuid = Uuid::parse_str(&payload).map_err(|_| AccessError::SessionInvalid)?;
        Ok(SessionId::from_uuid(uuid))
    }
}
