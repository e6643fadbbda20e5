//! Application Layer
//!
//! Use cases orchestrating domain objects and repositories.

pub mod config;
pub mod issue_session;
pub mod sign_out;
pub mod verify_client;
pub mod verify_session;

pub use config::AccessConfig;
pub use issue_session::IssueSessionUseCase;
pub use sign_out::SignOutUseCase;
pub use verify_client::VerifyClientUseCase;
pub use verify_session::VerifySessionUseCase;
