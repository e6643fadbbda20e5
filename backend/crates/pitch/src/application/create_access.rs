//! Create Access Use Case

use std::sync::Arc;

use chrono::{DateTime, Utc};
use platform::crypto;

use crate::application::config::PitchConfig;
use crate::domain::entities::{PitchAccess, RecipientMeta, TOKEN_BYTES};
use crate::domain::repository::PitchRepository;
use crate::error::{PitchError, PitchResult};

/// Create access input
pub struct CreateAccessInput {
    pub company_slug: String,
    pub expiry_days: Option<i64>,
    pub username: Option<String>,
    pub metadata: RecipientMeta,
}

/// Create access output
pub struct CreateAccessOutput {
    pub pitch_id: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub pitch_url: String,
}

/// Create access use case
pub struct CreateAccessUseCase<R>
where
    R: PitchRepository,
{
    repo: Arc<R>,
    config: Arc<PitchConfig>,
}

impl<R> CreateAccessUseCase<R>
where
    R: PitchRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<PitchConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: CreateAccessInput) -> PitchResult<CreateAccessOutput> {
        if input.company_slug.is_empty() {
            return Err(PitchError::BadRequest("companySlug is required".to_string()));
        }

        let expiry_days = match input.expiry_days {
            Some(days) if days <= 0 => {
                return Err(PitchError::BadRequest(
                    "expiryDays must be positive".to_string(),
                ));
            }
            Some(days) => days,
            None => self.config.default_expiry_days,
        };

        let token = crypto::random_hex_token(TOKEN_BYTES);
        let username = input.username.filter(|u| !u.is_empty());

        let access = PitchAccess::new(
            input.company_slug,
            token,
            username,
            expiry_days,
            input.metadata,
        );

        self.repo.create(&access).await?;

        tracing::info!(
            pitch_id = %access.id,
            company_slug = %access.company_slug,
            expires_at = %access.expires_at,
            "Pitch access created"
        );

        Ok(CreateAccessOutput {
            pitch_id: access.id.to_string(),
            token: access.token.clone(),
            expires_at: access.expires_at,
            pitch_url: access.share_url(&self.config.public_base_url),
        })
    }
}
