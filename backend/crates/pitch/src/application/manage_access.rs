//! Manage Access Use Case
//!
//! Owner-side operations: revoke, extend, list, analytics.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use kernel::id::PitchAccessId;
use uuid::Uuid;

use crate::application::config::PitchConfig;
use crate::domain::entities::{PitchAccess, PitchView};
use crate::domain::repository::PitchRepository;
use crate::error::{PitchError, PitchResult};

/// Manage access use case
pub struct ManageAccessUseCase<R>
where
    R: PitchRepository,
{
    repo: Arc<R>,
    config: Arc<PitchConfig>,
}

impl<R> ManageAccessUseCase<R>
where
    R: PitchRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<PitchConfig>) -> Self {
        Self { repo, config }
    }

    /// Revoke an access record
    pub async fn revoke(&self, pitch_id: &str) -> PitchResult<()> {
        let id = parse_pitch_id(pitch_id)?;
        if !self.repo.revoke(&id).await? {
            return Err(PitchError::NotFound);
        }
        tracing::info!(pitch_id = %id, "Pitch access revoked");
        Ok(())
    }

    /// Extend an access record's expiry
    ///
    /// The new expiry is the current one plus `additional_days`, capped
    /// at `max_extension_days` from now. Extending un-revokes the record.
    pub async fn extend(
        &self,
        pitch_id: &str,
        additional_days: i64,
    ) -> PitchResult<DateTime<Utc>> {
        if additional_days <= 0 {
            return Err(PitchError::BadRequest(
                "additionalDays must be positive".to_string(),
            ));
        }

        let id = parse_pitch_id(pitch_id)?;
        let access = self.repo.find_by_id(&id).await?.ok_or(PitchError::NotFound)?;

        let requested = access.expires_at + Duration::days(additional_days);
        let max_expiry = Utc::now() + Duration::days(self.config.max_extension_days);
        let final_expiry = requested.min(max_expiry);

        if !self.repo.extend(&id, final_expiry).await? {
            return Err(PitchError::NotFound);
        }

        tracing::info!(pitch_id = %id, expires_at = %final_expiry, "Pitch access extended");
        Ok(final_expiry)
    }

    /// All access records for a company, newest first
    pub async fn list(&self, company_slug: &str) -> PitchResult<Vec<PitchAccess>> {
        if company_slug.is_empty() {
            return Err(PitchError::BadRequest("companySlug is required".to_string()));
        }
        self.repo.list_by_slug(company_slug).await
    }

    /// View audit rows for a record, newest first
    pub async fn analytics(&self, pitch_id: &str) -> PitchResult<Vec<PitchView>> {
        let id = parse_pitch_id(pitch_id)?;
        // 404 for an unknown ID rather than an empty list
        self.repo.find_by_id(&id).await?.ok_or(PitchError::NotFound)?;
        self.repo.list_views(&id).await
    }
}

fn parse_pitch_id(raw: &str) -> PitchResult<PitchAccessId> {
    Uuid::parse_str(raw)
        .map(PitchAccessId::from_uuid)
        .map_err(|_| PitchError::BadRequest(format!("invalid pitch id: {raw}")))
}
