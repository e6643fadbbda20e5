//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and the edge route guard.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
