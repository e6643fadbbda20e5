//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{profile::UserProfile, session::Session};
use crate::error::AccessResult;
use kernel::id::SessionId;

/// User profile repository trait
///
/// Profiles are created out-of-band; this crate only reads and touches
/// the login timestamp.
#[trait_variant::make(ProfileRepository: Send)]
pub trait LocalProfileRepository {
    /// Find a profile by external identity uid
    async fn find_by_uid(&self, uid: &str) -> AccessResult<Option<UserProfile>>;

    /// Record a successful session issue for the profile
    async fn touch_last_login(&self, uid: &str) -> AccessResult<()>;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Persist a new session
    async fn create(&self, session: &Session) -> AccessResult<()>;

    /// Find a session by ID
    async fn find_by_id(&self, id: &SessionId) -> AccessResult<Option<Session>>;

    /// Delete a session (sign-out)
    async fn delete(&self, id: &SessionId) -> AccessResult<()>;

    /// Delete every expired session, returning how many were removed
    async fn delete_expired(&self) -> AccessResult<u64>;
}

/// External identity verification seam
///
/// Exchanges a caller-supplied identity assertion for a verified uid.
/// Runs inside the session issuer, never inside the route guard.
#[trait_variant::make(IdentityProvider: Send)]
pub trait LocalIdentityProvider {
    /// Verify an assertion and return the asserted uid
    ///
    /// Returns `Ok(None)` for a well-formed but unverifiable assertion
    /// (bad signature, expired).
    async fn verify_assertion(&self, assertion: &str) -> AccessResult<Option<String>>;
}
