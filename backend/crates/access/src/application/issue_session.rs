//! Issue Session Use Case
//!
//! Exchanges a verified external identity assertion for a server-side
//! session and its signed cookie token.

use std::sync::Arc;

use platform::client::RequestMeta;
use platform::crypto;

use crate::application::config::AccessConfig;
use crate::domain::entity::session::Session;
use crate::domain::repository::{IdentityProvider, ProfileRepository, SessionRepository};
use crate::domain::value_object::role::Role;
use crate::error::{AccessError, AccessResult};

/// Issue session input
pub struct IssueSessionInput {
    /// Identity assertion from the external provider
    pub assertion: String,
}

/// Issue session output
#[derive(Debug)]
pub struct IssueSessionOutput {
    /// Signed token for the session cookie
    pub session_token: String,
    pub uid: String,
    pub role: Option<Role>,
    pub expires_at_ms: i64,
}

/// Issue session use case
pub struct IssueSessionUseCase<I, P, S>
where
    I: IdentityProvider,
    P: ProfileRepository,
    S: SessionRepository,
{
    identity: Arc<I>,
    profile_repo: Arc<P>,
    session_repo: Arc<S>,
    config: Arc<AccessConfig>,
}

impl<I, P, S> IssueSessionUseCase<I, P, S>
where
    I: IdentityProvider,
    P: ProfileRepository,
    S: SessionRepository,
{
    pub fn new(
        identity: Arc<I>,
        profile_repo: Arc<P>,
        session_repo: Arc<S>,
        config: Arc<AccessConfig>,
    ) -> Self {
        Self {
            identity,
            profile_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(
        &self,
        input: IssueSessionInput,
        meta: RequestMeta,
    ) -> AccessResult<IssueSessionOutput> {
        let uid = self
            .identity
            .verify_assertion(&input.assertion)
            .await?
            .ok_or(AccessError::InvalidAssertion)?;

        // The identity provider knows the account; a session still
        // requires an operator-provisioned profile with a role.
        let profile = self
            .profile_repo
            .find_by_uid(&uid)
            .await?
            .ok_or(AccessError::ProfileNotFound)?;

        if profile.role.is_none() {
            return Err(AccessError::RoleMissing);
        }

        let session = Session::new(
            profile.uid.clone(),
            profile.role,
            self.config.session_ttl_secs(),
            meta.ip.map(|ip| ip.to_string()),
            meta.user_agent,
        );

        self.session_repo.create(&session).await?;
        self.profile_repo.touch_last_login(&profile.uid).await?;

        let session_token =
            crypto::sign_token(&self.config.session_secret, &session.id.to_string());

        tracing::info!(
            uid = %profile.uid,
            role = ?profile.role,
            "Session issued"
        );

        Ok(IssueSessionOutput {
            session_token,
            uid: profile.uid,
            role: profile.role,
            expires_at_ms: session.expires_at.timestamp_millis(),
        })
    }
}
