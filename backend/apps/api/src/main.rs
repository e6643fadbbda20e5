//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use access::models::{ClientDirectory, Role, RouteTable};
use access::{
    AccessConfig, HmacIdentityProvider, PgAccessRepository, auth_router, clients_router,
};
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use heirloom::{PgHeirloomRepository, heirloom_router};
use pitch::{PgPitchRepository, PitchConfig, pitch_admin_router, pitch_public_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,access=info,pitch=info,heirloom=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Startup cleanup: remove expired sessions
    // Errors here should not prevent server startup
    let access_repo_for_cleanup = PgAccessRepository::new(pool.clone());
    match access_repo_for_cleanup.cleanup_expired().await {
        Ok(sessions) => {
            tracing::info!(sessions_deleted = sessions, "Session cleanup completed");
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Session cleanup failed, continuing anyway"
            );
        }
    }

    // Access configuration
    let access_config = if cfg!(debug_assertions) {
        AccessConfig::development()
    } else {
        // In production, load secret from environment
        let secret = load_secret("SESSION_SECRET")?;
        AccessConfig {
            session_secret: secret,
            ..AccessConfig::default()
        }
    };

    // COOKIE_SECURE overrides the Secure attribute in either direction,
    // e.g. a plain-HTTP deployment behind a TLS-terminating proxy
    let access_config = match env::var("COOKIE_SECURE") {
        Ok(raw) => access_config.with_cookie_secure(raw.trim().eq_ignore_ascii_case("true")),
        Err(_) => access_config,
    };

    // The identity provider may share the session secret or carry its own
    let identity_secret = match env::var("IDENTITY_SECRET") {
        Ok(_) => load_secret("IDENTITY_SECRET")?,
        Err(_) => access_config.session_secret,
    };
    let identity = HmacIdentityProvider::new(identity_secret);

    // Pitch configuration
    let public_base_url =
        env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://localhost:40922".to_string());
    let pitch_config = PitchConfig::new(public_base_url);

    let access_repo = PgAccessRepository::new(pool.clone());
    let pitch_repo = PgPitchRepository::new(pool.clone());
    let heirloom_repo = PgHeirloomRepository::new(pool.clone());

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:40922,http://127.0.0.1:40922".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Owner enforcement for the pitch admin surface
    let owner_gate = access::middleware::RequireRoleState {
        repo: Arc::new(access_repo.clone()),
        config: Arc::new(access_config.clone()),
        min_role: Role::Owner,
    };
    let pitch_admin = pitch_admin_router(pitch_repo.clone(), pitch_config.clone()).layer(
        axum::middleware::from_fn(move |req, next| {
            access::middleware::require_role(owner_gate.clone(), req, next)
        }),
    );

    // Presence-only guard for gated page prefixes
    let guard = access::middleware::RouteGuardState::new(
        RouteTable::standard(),
        access_config.session_cookie_name.clone(),
    );

    // Build router
    let app = Router::new()
        .nest(
            "/api/auth",
            auth_router(access_repo.clone(), identity, access_config.clone()),
        )
        .nest("/api/clients", clients_router(ClientDirectory::builtin()))
        .nest(
            "/api/pitch",
            pitch_public_router(pitch_repo, pitch_config).merge(pitch_admin),
        )
        .nest("/api/heirloom", heirloom_router(heirloom_repo))
        .layer(axum::middleware::from_fn(move |req, next| {
            access::middleware::route_guard(guard.clone(), req, next)
        }))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 31113));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Decode a base64 environment variable into a 32-byte key
fn load_secret(name: &str) -> anyhow::Result<[u8; 32]> {
    let raw = env::var(name)
        .map_err(|_| anyhow::anyhow!("{name} must be set in production"))?;
    let bytes = Engine::decode(&general_purpose::STANDARD, raw.trim())?;
    anyhow::ensure!(bytes.len() == 32, "{name} must decode to 32 bytes");
    let mut secret = [0u8; 32];
    secret.copy_from_slice(&bytes);
    Ok(secret)
}
