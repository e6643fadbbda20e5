//! Heirloom Backend Module
//!
//! The recipe-sharing demo app: recipe storage with validation, public
//! share links, and the dinner-party cooking-timeline calculator.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, the timeline calculator, repository traits
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! The timeline calculator is pure in-process computation; nothing it
//! produces is persisted.

pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use error::{HeirloomError, HeirloomResult};
pub use infra::postgres::PgHeirloomRepository;
pub use presentation::router::heirloom_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::timeline::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}
