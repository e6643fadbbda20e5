//! Route Guard Middleware
//!
//! The edge-side half of the two-phase access check: decides purely on
//! cookie PRESENCE whether a gated page may render, and bounces
//! anonymous visitors to the matching login page. It never verifies the
//! token; forged cookies pass here and die at `/api/auth/verify`.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::VerifySessionUseCase;
use crate::application::config::AccessConfig;
use crate::domain::repository::{ProfileRepository, SessionRepository};
use crate::domain::value_object::role::Role;
use crate::domain::value_object::route_table::RouteTable;
use crate::error::AccessError;
use crate::presentation::handlers::extract_session_token;

/// Route guard state
#[derive(Clone)]
pub struct RouteGuardState {
    pub table: Arc<RouteTable>,
    pub cookie_name: String,
}

impl RouteGuardState {
    pub fn new(table: RouteTable, cookie_name: impl Into<String>) -> Self {
        Self {
            table: Arc::new(table),
            cookie_name: cookie_name.into(),
        }
    }
}

/// Presence-only guard for gated page prefixes
///
/// Unmatched paths pass through untouched. Matched paths with no session
/// cookie get `303 See Other` to the area's login page with the original
/// path carried in `?redirect=`.
pub async fn route_guard(state: RouteGuardState, req: Request<Body>, next: Next) -> Response {
    let path = req.uri().path();

    let Some(rule) = state.table.match_path(path) else {
        return next.run(req).await;
    };

    let has_cookie =
        platform::cookie::extract_cookie(req.headers(), &state.cookie_name).is_some();

    if has_cookie {
        return next.run(req).await;
    }

    let location = format!("{}?redirect={}", rule.login_path, encode_path(path));

    tracing::debug!(path = %path, login = %rule.login_path, "Guard redirect");

    (StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response()
}

/// Role-enforcement middleware state
#[derive(Clone)]
pub struct RequireRoleState<R>
where
    R: ProfileRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AccessConfig>,
    pub min_role: Role,
}

/// Downstream half of the two-phase check for API routes
///
/// Verifies the token cryptographically and enforces the role hierarchy:
/// 401 for a missing or invalid session, 403 for an insufficient role.
pub async fn require_role<R>(
    state: RequireRoleState<R>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: ProfileRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_session_token(req.headers(), &state.config.session_cookie_name)
        .ok_or_else(|| AccessError::SessionMissing.into_response())?;

    let use_case =
        VerifySessionUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    use_case
        .authorize(&token, state.min_role)
        .await
        .map_err(IntoResponse::into_response)?;

    Ok(next.run(req).await)
}

/// Percent-encode a path for use inside a query parameter
fn encode_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for b in path.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::route_table::RouteTable;
    use axum::Router;
    use axum::routing::get;
    use tower::ServiceExt;

    fn app() -> Router {
        let state = RouteGuardState::new(RouteTable::standard(), "session");
        Router::new()
            .route("/", get(|| async { "public" }))
            .route("/owner", get(|| async { "gated" }))
            .route("/clients/billing", get(|| async { "gated" }))
            .layer(axum::middleware::from_fn(move |req, next| {
                route_guard(state.clone(), req, next)
            }))
    }

    async fn status_and_location(path: &str, cookie: Option<&str>) -> (StatusCode, Option<String>) {
        let mut builder = Request::builder().uri(path);
        if let Some(c) = cookie {
            builder = builder.header(header::COOKIE, c);
        }
        let res = app()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let location = res
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        (res.status(), location)
    }

    #[tokio::test]
    async fn test_public_path_passes() {
        let (status, _) = status_and_location("/", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_anonymous_gated_path_redirects() {
        let (status, location) = status_and_location("/owner", None).await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/owner/login?redirect=/owner"));
    }

    #[tokio::test]
    async fn test_redirect_targets_area_login() {
        let (status, location) = status_and_location("/clients/billing", None).await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(
            location.as_deref(),
            Some("/clients/login?redirect=/clients/billing")
        );
    }

    #[tokio::test]
    async fn test_cookie_presence_passes_without_verification() {
        // The guard does not verify; any cookie value passes
        let (status, _) = status_and_location("/owner", Some("session=forged")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_other_cookies_do_not_count() {
        let (status, _) = status_and_location("/owner", Some("theme=dark")).await;
        assert_eq!(status, StatusCode::SEE_OTHER);
    }

    #[test]
    fn test_encode_path() {
        assert_eq!(encode_path("/clients/billing"), "/clients/billing");
        assert_eq!(encode_path("/a b?c"), "/a%20b%3Fc");
    }
}
