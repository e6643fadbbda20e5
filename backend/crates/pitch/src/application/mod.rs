//! Application Layer

pub mod config;
pub mod create_access;
pub mod manage_access;
pub mod validate_access;

pub use config::PitchConfig;
pub use create_access::CreateAccessUseCase;
pub use manage_access::ManageAccessUseCase;
pub use validate_access::ValidateAccessUseCase;
