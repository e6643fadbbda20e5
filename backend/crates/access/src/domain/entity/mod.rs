//! Entity Module

pub mod client_config;
pub mod profile;
pub mod session;
