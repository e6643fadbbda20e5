//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, HMAC-signed tokens, random tokens)
//! - Password digesting for the static credential table
//! - Cookie management
//! - Client request metadata (IP, User-Agent)

pub mod client;
pub mod cookie;
pub mod crypto;
pub mod password;
