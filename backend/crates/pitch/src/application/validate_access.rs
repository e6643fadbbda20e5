//! Validate Access Use Case
//!
//! The public validation path. Every failure, including repository
//! errors, is reported as `{valid: false}` with a human-readable reason;
//! this endpoint never surfaces an HTTP error for a bad token.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{PitchAccess, PitchView};
use crate::domain::repository::PitchRepository;

/// Validate access input
pub struct ValidateAccessInput {
    pub company_slug: String,
    pub token: String,
    pub username: Option<String>,
    pub client_ip: String,
    pub user_agent: Option<String>,
}

/// Validation outcome; the `access` field is present only when valid
pub struct ValidationOutcome {
    pub valid: bool,
    pub error: Option<String>,
    pub requires_username: bool,
    pub access: Option<PitchAccess>,
}

impl ValidationOutcome {
    fn invalid(reason: &str) -> Self {
        Self {
            valid: false,
            error: Some(reason.to_string()),
            requires_username: false,
            access: None,
        }
    }

    fn needs_username(reason: &str) -> Self {
        Self {
            requires_username: true,
            ..Self::invalid(reason)
        }
    }

    fn valid(access: PitchAccess) -> Self {
        Self {
            valid: true,
            error: None,
            requires_username: false,
            access: Some(access),
        }
    }
}

/// Validate access use case
pub struct ValidateAccessUseCase<R>
where
    R: PitchRepository,
{
    repo: Arc<R>,
}

impl<R> ValidateAccessUseCase<R>
where
    R: PitchRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: ValidateAccessInput) -> ValidationOutcome {
        match self.check(input).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "Error validating pitch access");
                ValidationOutcome::invalid(
                    "An error occurred while validating access. Please try again.",
                )
            }
        }
    }

    async fn check(
        &self,
        input: ValidateAccessInput,
    ) -> crate::error::PitchResult<ValidationOutcome> {
        let Some(access) = self
            .repo
            .find_by_slug_and_token(&input.company_slug, &input.token)
            .await?
        else {
            return Ok(ValidationOutcome::invalid(
                "Invalid access link. Please check your URL or request a new link.",
            ));
        };

        if access.is_revoked {
            return Ok(ValidationOutcome::invalid(
                "This pitch access has been revoked. Please contact the sender for a new link.",
            ));
        }

        if access.is_expired() {
            return Ok(ValidationOutcome::invalid(
                "This pitch link has expired. Please request a new link to continue.",
            ));
        }

        if let Some(bound) = &access.username {
            match &input.username {
                None => {
                    return Ok(ValidationOutcome::needs_username(
                        "This pitch requires a username to access.",
                    ));
                }
                Some(submitted) if submitted != bound => {
                    return Ok(ValidationOutcome::invalid(
                        "Invalid username. Please enter the correct username provided by the sender.",
                    ));
                }
                Some(_) => {}
            }
        }

        if !access.ip_allowed(&input.client_ip) {
            return Ok(ValidationOutcome::invalid(
                "Access denied from this IP address. Please contact the sender.",
            ));
        }

        // All checks passed: bump the counter and append the audit row.
        // The increment can race with a concurrent validation; the view
        // count is a vanity metric, so last-write-wins is fine.
        self.repo.record_view(&access.id).await?;
        self.repo
            .track_view(&PitchView {
                pitch_id: access.id,
                client_ip: input.client_ip,
                username: input.username,
                user_agent: input.user_agent,
                viewed_at: Utc::now(),
            })
            .await?;

        tracing::info!(
            pitch_id = %access.id,
            company_slug = %access.company_slug,
            "Pitch access validated"
        );

        Ok(ValidationOutcome::valid(access))
    }
}
