//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{PitchAccess, PitchView};

// ============================================================================
// Create
// ============================================================================

/// Pitch create request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePitchRequest {
    pub company_slug: String,
    pub expiry_days: Option<i64>,
    pub username: Option<String>,
    pub recipient_name: Option<String>,
    pub recipient_email: Option<String>,
    pub recipient_company: Option<String>,
    pub notes: Option<String>,
}

/// Pitch create response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePitchResponse {
    pub pitch_id: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub pitch_url: String,
}

// ============================================================================
// Validate
// ============================================================================

/// Pitch validate request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatePitchRequest {
    pub company_slug: String,
    pub token: String,
    pub username: Option<String>,
}

/// Pitch validate response
///
/// `error` and `requiresUsername` appear only on the invalid side;
/// `access` only on the valid side.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatePitchResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub requires_username: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<PitchAccessDto>,
}

// ============================================================================
// Manage
// ============================================================================

/// Pitch revoke request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevokePitchRequest {
    pub pitch_id: String,
}

/// Pitch extend request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendPitchRequest {
    pub pitch_id: String,
    pub additional_days: i64,
}

/// Pitch extend response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendPitchResponse {
    pub pitch_id: String,
    pub expires_at: DateTime<Utc>,
}

// ============================================================================
// Shared representations
// ============================================================================

/// Non-sensitive view of an access record (never exposes the token to
/// the validation caller; the creator already holds it)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchAccessDto {
    pub pitch_id: String,
    pub company_slug: String,
    pub username: Option<String>,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub is_revoked: bool,
    pub view_count: i64,
    pub last_viewed_at: Option<DateTime<Utc>>,
}

impl From<&PitchAccess> for PitchAccessDto {
    fn from(access: &PitchAccess) -> Self {
        Self {
            pitch_id: access.id.to_string(),
            company_slug: access.company_slug.clone(),
            username: access.username.clone(),
            expires_at: access.expires_at,
            created_at: access.created_at,
            is_revoked: access.is_revoked,
            view_count: access.view_count,
            last_viewed_at: access.last_viewed_at,
        }
    }
}

/// One audit row in the analytics response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchViewDto {
    pub client_ip: String,
    pub username: Option<String>,
    pub user_agent: Option<String>,
    pub viewed_at: DateTime<Utc>,
}

impl From<&PitchView> for PitchViewDto {
    fn from(view: &PitchView) -> Self {
        Self {
            client_ip: view.client_ip.clone(),
            username: view.username.clone(),
            user_agent: view.user_agent.clone(),
            viewed_at: view.viewed_at,
        }
    }
}
