//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use chrono::{DateTime, Utc};
use kernel::id::PitchAccessId;

use crate::domain::entities::{PitchAccess, PitchView};
use crate::error::PitchResult;

/// Pitch access repository trait
#[trait_variant::make(PitchRepository: Send)]
pub trait LocalPitchRepository {
    /// Persist a new access record
    async fn create(&self, access: &PitchAccess) -> PitchResult<()>;

    /// Find by company slug and token (the validation lookup)
    async fn find_by_slug_and_token(
        &self,
        company_slug: &str,
        token: &str,
    ) -> PitchResult<Option<PitchAccess>>;

    /// Find by ID
    async fn find_by_id(&self, id: &PitchAccessId) -> PitchResult<Option<PitchAccess>>;

    /// Mark a record revoked
    async fn revoke(&self, id: &PitchAccessId) -> PitchResult<bool>;

    /// Set a new expiry and clear any revocation
    async fn extend(&self, id: &PitchAccessId, expires_at: DateTime<Utc>) -> PitchResult<bool>;

    /// All records for a company, newest first
    async fn list_by_slug(&self, company_slug: &str) -> PitchResult<Vec<PitchAccess>>;

    /// Bump the view counter and stamp last_viewed_at
    async fn record_view(&self, id: &PitchAccessId) -> PitchResult<()>;

    /// Append a view audit row
    async fn track_view(&self, view: &PitchView) -> PitchResult<()>;

    /// Audit rows for a record, newest first
    async fn list_views(&self, id: &PitchAccessId) -> PitchResult<Vec<PitchView>>;
}
