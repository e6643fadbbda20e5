//! Pitch Routers
//!
//! The public router carries only validation; everything else lives on
//! the admin router so the app can layer owner enforcement onto it.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::PitchConfig;
use crate::domain::repository::PitchRepository;
use crate::infra::postgres::PgPitchRepository;
use crate::presentation::handlers::{self, PitchAppState};

/// Create the public pitch router (validation only)
pub fn pitch_public_router(repo: PgPitchRepository, config: PitchConfig) -> Router {
    pitch_public_router_generic(repo, config)
}

/// Create the admin pitch router (create / revoke / extend / list / analytics)
pub fn pitch_admin_router(repo: PgPitchRepository, config: PitchConfig) -> Router {
    pitch_admin_router_generic(repo, config)
}

/// Generic public router for any repository implementation
pub fn pitch_public_router_generic<R>(repo: R, config: PitchConfig) -> Router
where
    R: PitchRepository + Clone + Send + Sync + 'static,
{
    let state = PitchAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/validate", post(handlers::validate_pitch::<R>))
        .with_state(state)
}

/// Generic admin router for any repository implementation
pub fn pitch_admin_router_generic<R>(repo: R, config: PitchConfig) -> Router
where
    R: PitchRepository + Clone + Send + Sync + 'static,
{
    let state = PitchAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/create", post(handlers::create_pitch::<R>))
        .route("/revoke", post(handlers::revoke_pitch::<R>))
        .route("/extend", post(handlers::extend_pitch::<R>))
        .route("/list/{company_slug}", get(handlers::list_pitches::<R>))
        .route("/analytics/{pitch_id}", get(handlers::pitch_analytics::<R>))
        .with_state(state)
}
