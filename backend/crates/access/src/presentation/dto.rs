//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Session Create
// ============================================================================

/// Session create request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    /// Identity assertion from the external provider
    pub assertion: String,
}

/// Session create response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub uid: String,
    pub role: Option<String>,
    pub expires_at_ms: i64,
}

// ============================================================================
// Session Verify
// ============================================================================

/// Session verify request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifySessionRequest {
    /// Minimum role to require; omit for a pure identity check
    #[serde(default)]
    pub required_role: Option<String>,
}

/// Session verify response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifySessionResponse {
    pub valid: bool,
    pub uid: String,
    pub email: String,
    pub role: Option<String>,
    pub client_id: Option<String>,
    pub expires_at_ms: i64,
}

// ============================================================================
// Client Portal Verify
// ============================================================================

/// Client credential verify request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyClientRequest {
    pub username: String,
    pub password: String,
}

/// Client credential verify response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyClientResponse {
    pub client_id: String,
    pub name: String,
    pub brand_color: String,
}
