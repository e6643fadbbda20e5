//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::client::RequestMeta;

use crate::application::config::AccessConfig;
use crate::application::{
    IssueSessionUseCase, SignOutUseCase, VerifyClientUseCase, VerifySessionUseCase,
    issue_session::IssueSessionInput,
};
use crate::domain::entity::client_config::ClientDirectory;
use crate::domain::repository::{IdentityProvider, ProfileRepository, SessionRepository};
use crate::domain::value_object::role::Role;
use crate::error::{AccessError, AccessResult};
use crate::presentation::dto::{
    CreateSessionRequest, CreateSessionResponse, VerifyClientRequest, VerifyClientResponse,
    VerifySessionRequest, VerifySessionResponse,
};

/// Header checked before the cookie when extracting the session token
pub const SESSION_TOKEN_HEADER: &str = "x-session-token";

/// Shared state for access handlers
#[derive(Clone)]
pub struct AccessAppState<R, I>
where
    R: ProfileRepository + SessionRepository + Clone + Send + Sync + 'static,
    I: IdentityProvider + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub identity: Arc<I>,
    pub config: Arc<AccessConfig>,
}

/// Shared state for the client-portal handler
#[derive(Clone)]
pub struct ClientsAppState {
    pub directory: Arc<ClientDirectory>,
}

/// Extract the session token: explicit header first, cookie second
///
/// The header lets server-to-server callers verify without carrying a
/// browser cookie jar.
pub fn extract_session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    if let Some(token) = headers
        .get(SESSION_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|t| !t.is_empty())
    {
        return Some(token.to_string());
    }
    platform::cookie::extract_cookie(headers, cookie_name)
}

// ============================================================================
// Session Create
// ============================================================================

/// POST /api/auth/session
pub async fn create_session<R, I>(
    State(state): State<AccessAppState<R, I>>,
    headers: HeaderMap,
    axum::extract::ConnectInfo(addr): axum::extract::ConnectInfo<std::net::SocketAddr>,
    Json(req): Json<CreateSessionRequest>,
) -> AccessResult<impl IntoResponse>
where
    R: ProfileRepository + SessionRepository + Clone + Send + Sync + 'static,
    I: IdentityProvider + Clone + Send + Sync + 'static,
{
    if req.assertion.is_empty() {
        return Err(AccessError::BadRequest("assertion is required".to_string()));
    }

    let meta = RequestMeta::from_request(&headers, Some(addr.ip()));

    let use_case = IssueSessionUseCase::new(
        state.identity.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(
            IssueSessionInput {
                assertion: req.assertion,
            },
            meta,
        )
        .await?;

    let cookie = state.config.cookie().set(&output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(CreateSessionResponse {
            uid: output.uid,
            role: output.role.map(|r| r.code().to_string()),
            expires_at_ms: output.expires_at_ms,
        }),
    ))
}

// ============================================================================
// Session Verify
// ============================================================================

/// POST /api/auth/verify
///
/// Body is optional; `{"requiredRole": "team"}` adds a hierarchy check on
/// top of the identity check.
pub async fn verify_session<R, I>(
    State(state): State<AccessAppState<R, I>>,
    headers: HeaderMap,
    body: Option<Json<VerifySessionRequest>>,
) -> AccessResult<Json<VerifySessionResponse>>
where
    R: ProfileRepository + SessionRepository + Clone + Send + Sync + 'static,
    I: IdentityProvider + Clone + Send + Sync + 'static,
{
    let token = extract_session_token(&headers, &state.config.session_cookie_name)
        .ok_or(AccessError::SessionMissing)?;

    let required_role = match body.and_then(|Json(b)| b.required_role) {
        Some(code) => Some(
            Role::from_code(&code)
                .ok_or_else(|| AccessError::BadRequest(format!("unknown role: {code}")))?,
        ),
        None => None,
    };

    let use_case =
        VerifySessionUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let verified = match required_role {
        Some(min_role) => use_case.authorize(&token, min_role).await?,
        None => use_case.execute(&token).await?,
    };

    Ok(Json(VerifySessionResponse {
        valid: true,
        uid: verified.uid,
        email: verified.email,
        role: verified.role.map(|r| r.code().to_string()),
        client_id: verified.client_id,
        expires_at_ms: verified.expires_at_ms,
    }))
}

// ============================================================================
// Session Destroy
// ============================================================================

/// DELETE /api/auth/session
pub async fn destroy_session<R, I>(
    State(state): State<AccessAppState<R, I>>,
    headers: HeaderMap,
) -> AccessResult<impl IntoResponse>
where
    R: ProfileRepository + SessionRepository + Clone + Send + Sync + 'static,
    I: IdentityProvider + Clone + Send + Sync + 'static,
{
    if let Some(token) = extract_session_token(&headers, &state.config.session_cookie_name) {
        let use_case = SignOutUseCase::new(state.repo.clone(), state.config.clone());
        // Ignore errors - the cookie is cleared either way
        let _ = use_case.execute(&token).await;
    }

    let cookie = state.config.cookie().clear();

    Ok((StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)]))
}

// ============================================================================
// Client Portal Verify
// ============================================================================

/// POST /api/clients/verify
pub async fn verify_client(
    State(state): State<ClientsAppState>,
    Json(req): Json<VerifyClientRequest>,
) -> AccessResult<Json<VerifyClientResponse>> {
    if req.username.is_empty() || req.password.is_empty() {
        return Err(AccessError::BadRequest(
            "username and password are required".to_string(),
        ));
    }

    let use_case = VerifyClientUseCase::new(state.directory.clone());
    let verified = use_case.execute(&req.username, &req.password)?;

    Ok(Json(VerifyClientResponse {
        client_id: verified.client_id,
        name: verified.name,
        brand_color: verified.brand_color,
    }))
}
