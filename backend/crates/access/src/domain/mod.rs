//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{client_config::ClientDirectory, profile::UserProfile, session::Session};
pub use repository::{IdentityProvider, ProfileRepository, SessionRepository};
pub use value_object::{role::Role, route_table::RouteTable};
