//! Pitch Access Backend Module
//!
//! Time-limited tokens, username gates, IP tracking, and access
//! revocation for outbound pitch presentations.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Security Model
//! - Tokens are 32 random bytes rendered as 64 hex chars, bound to a
//!   company slug at creation
//! - Validation NEVER errors to the caller: misses, revocations, expiry,
//!   and even repository failures all come back as `{valid: false}`
//! - The requester IP is recorded for audit; it only gates access when a
//!   record carries a non-empty allowlist

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::PitchConfig;
pub use error::{PitchError, PitchResult};
pub use infra::postgres::PgPitchRepository;
pub use presentation::router::{pitch_admin_router, pitch_public_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}
