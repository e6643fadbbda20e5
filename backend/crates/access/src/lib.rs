//! Access (RBAC + Sessions) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Roles, profiles, sessions, the static client directory,
//!   repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations, identity provider
//! - `presentation/` - HTTP handlers, DTOs, router, route guard
//!
//! ## Features
//! - Session issue/verify backed by an external identity assertion
//! - Role hierarchy (client < investor < partner < team < owner)
//! - Edge route guard (cookie presence check + login redirect)
//! - Client-portal credential verification against a static digest table
//!
//! ## Security Model
//! - Session cookies are HMAC-signed references to server-side rows
//! - The guard never verifies cryptographically; verification and role
//!   checks happen downstream (two-phase check)
//! - The effective role is re-fetched from the profile store on every
//!   verification, so a stale role never outlives the lookup

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AccessConfig;
pub use error::{AccessError, AccessResult};
pub use infra::identity::HmacIdentityProvider;
pub use infra::postgres::PgAccessRepository;
pub use presentation::router::{auth_router, clients_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::{ClientDirectory, Role, RouteTable, Session, UserProfile};
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
