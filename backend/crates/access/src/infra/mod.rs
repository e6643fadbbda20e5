//! Infrastructure Layer
//!
//! Database and identity-provider implementations.

pub mod identity;
pub mod postgres;
