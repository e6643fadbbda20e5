//! Heirloom Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::repository::HeirloomRepository;
use crate::infra::postgres::PgHeirloomRepository;
use crate::presentation::handlers::{self, HeirloomAppState};

/// Create the heirloom router with PostgreSQL repository
pub fn heirloom_router(repo: PgHeirloomRepository) -> Router {
    heirloom_router_generic(repo)
}

/// Create a generic heirloom router for any repository implementation
pub fn heirloom_router_generic<R>(repo: R) -> Router
where
    R: HeirloomRepository + Clone + Send + Sync + 'static,
{
    let state = HeirloomAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/recipes", post(handlers::create_recipe::<R>))
        .route("/recipes/{id}", get(handlers::get_recipe::<R>))
        .route("/recipes/{id}/share", post(handlers::create_share::<R>))
        .route("/shared/{share_id}", get(handlers::get_shared_recipe::<R>))
        .route("/timeline", post(handlers::compute_timeline))
        .with_state(state)
}
