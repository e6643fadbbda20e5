//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use std::sync::Arc;

use platform::client::RequestMeta;

use crate::application::config::PitchConfig;
use crate::application::{
    CreateAccessUseCase, ManageAccessUseCase, ValidateAccessUseCase,
    create_access::CreateAccessInput, validate_access::ValidateAccessInput,
};
use crate::domain::entities::RecipientMeta;
use crate::domain::repository::PitchRepository;
use crate::error::PitchResult;
use crate::presentation::dto::{
    CreatePitchRequest, CreatePitchResponse, ExtendPitchRequest, ExtendPitchResponse,
    PitchAccessDto, PitchViewDto, RevokePitchRequest, ValidatePitchRequest,
    ValidatePitchResponse,
};

/// Shared state for pitch handlers
#[derive(Clone)]
pub struct PitchAppState<R>
where
    R: PitchRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<PitchConfig>,
}

// ============================================================================
// Create
// ============================================================================

/// POST /api/pitch/create
pub async fn create_pitch<R>(
    State(state): State<PitchAppState<R>>,
    Json(req): Json<CreatePitchRequest>,
) -> PitchResult<Json<CreatePitchResponse>>
where
    R: PitchRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateAccessUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(CreateAccessInput {
            company_slug: req.company_slug,
            expiry_days: req.expiry_days,
            username: req.username,
            metadata: RecipientMeta {
                recipient_name: req.recipient_name,
                recipient_email: req.recipient_email,
                recipient_company: req.recipient_company,
                notes: req.notes,
            },
        })
        .await?;

    Ok(Json(CreatePitchResponse {
        pitch_id: output.pitch_id,
        token: output.token,
        expires_at: output.expires_at,
        pitch_url: output.pitch_url,
    }))
}

// ============================================================================
// Validate
// ============================================================================

/// POST /api/pitch/validate
///
/// Always 200; failures are carried in the body as `{valid: false}`.
pub async fn validate_pitch<R>(
    State(state): State<PitchAppState<R>>,
    headers: HeaderMap,
    axum::extract::ConnectInfo(addr): axum::extract::ConnectInfo<std::net::SocketAddr>,
    Json(req): Json<ValidatePitchRequest>,
) -> Json<ValidatePitchResponse>
where
    R: PitchRepository + Clone + Send + Sync + 'static,
{
    let meta = RequestMeta::from_request(&headers, Some(addr.ip()));

    let use_case = ValidateAccessUseCase::new(state.repo.clone());
    let outcome = use_case
        .execute(ValidateAccessInput {
            company_slug: req.company_slug,
            token: req.token,
            username: req.username.filter(|u| !u.is_empty()),
            client_ip: meta.ip_string(),
            user_agent: meta.user_agent,
        })
        .await;

    Json(ValidatePitchResponse {
        valid: outcome.valid,
        error: outcome.error,
        requires_username: outcome.requires_username,
        access: outcome.access.as_ref().map(PitchAccessDto::from),
    })
}

// ============================================================================
// Manage (owner-gated upstream)
// ============================================================================

/// POST /api/pitch/revoke
pub async fn revoke_pitch<R>(
    State(state): State<PitchAppState<R>>,
    Json(req): Json<RevokePitchRequest>,
) -> PitchResult<Json<serde_json::Value>>
where
    R: PitchRepository + Clone + Send + Sync + 'static,
{
    let use_case = ManageAccessUseCase::new(state.repo.clone(), state.config.clone());
    use_case.revoke(&req.pitch_id).await?;
    Ok(Json(serde_json::json!({ "revoked": true })))
}

/// POST /api/pitch/extend
pub async fn extend_pitch<R>(
    State(state): State<PitchAppState<R>>,
    Json(req): Json<ExtendPitchRequest>,
) -> PitchResult<Json<ExtendPitchResponse>>
where
    R: PitchRepository + Clone + Send + Sync + 'static,
{
    let use_case = ManageAccessUseCase::new(state.repo.clone(), state.config.clone());
    let expires_at = use_case.extend(&req.pitch_id, req.additional_days).await?;

    Ok(Json(ExtendPitchResponse {
        pitch_id: req.pitch_id,
        expires_at,
    }))
}

/// GET /api/pitch/list/{companySlug}
pub async fn list_pitches<R>(
    State(state): State<PitchAppState<R>>,
    Path(company_slug): Path<String>,
) -> PitchResult<Json<Vec<PitchAccessDto>>>
where
    R: PitchRepository + Clone + Send + Sync + 'static,
{
    let use_case = ManageAccessUseCase::new(state.repo.clone(), state.config.clone());
    let accesses = use_case.list(&company_slug).await?;
    Ok(Json(accesses.iter().map(PitchAccessDto::from).collect()))
}

/// GET /api/pitch/analytics/{pitchId}
pub async fn pitch_analytics<R>(
    State(state): State<PitchAppState<R>>,
    Path(pitch_id): Path<String>,
) -> PitchResult<Json<Vec<PitchViewDto>>>
where
    R: PitchRepository + Clone + Send + Sync + 'static,
{
    let use_case = ManageAccessUseCase::new(state.repo.clone(), state.config.clone());
    let views = use_case.analytics(&pitch_id).await?;
    Ok(Json(views.iter().map(PitchViewDto::from).collect()))
}
