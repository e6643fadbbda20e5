//! Access Routers

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::AccessConfig;
use crate::domain::entity::client_config::ClientDirectory;
use crate::domain::repository::{IdentityProvider, ProfileRepository, SessionRepository};
use crate::infra::identity::HmacIdentityProvider;
use crate::infra::postgres::PgAccessRepository;
use crate::presentation::handlers::{self, AccessAppState, ClientsAppState};

/// Create the auth router with PostgreSQL repository
pub fn auth_router(
    repo: PgAccessRepository,
    identity: HmacIdentityProvider,
    config: AccessConfig,
) -> Router {
    auth_router_generic(repo, identity, config)
}

/// Create a generic auth router for any repository implementation
pub fn auth_router_generic<R, I>(repo: R, identity: I, config: AccessConfig) -> Router
where
    R: ProfileRepository + SessionRepository + Clone + Send + Sync + 'static,
    I: IdentityProvider + Clone + Send + Sync + 'static,
{
    let state = AccessAppState {
        repo: Arc::new(repo),
        identity: Arc::new(identity),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/session",
            post(handlers::create_session::<R, I>).delete(handlers::destroy_session::<R, I>),
        )
        .route("/verify", post(handlers::verify_session::<R, I>))
        .with_state(state)
}

/// Create the client-portal router
pub fn clients_router(directory: ClientDirectory) -> Router {
    let state = ClientsAppState {
        directory: Arc::new(directory),
    };

    Router::new()
        .route("/verify", post(handlers::verify_client))
        .with_state(state)
}
