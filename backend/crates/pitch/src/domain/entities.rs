//! Domain Entities

use chrono::{DateTime, Duration, Utc};
use kernel::id::PitchAccessId;
use serde::Serialize;

/// Token size in bytes; rendered as 64 hex chars
pub const TOKEN_BYTES: usize = 32;

/// Recipient metadata captured at creation, audit only
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientMeta {
    pub recipient_name: Option<String>,
    pub recipient_email: Option<String>,
    pub recipient_company: Option<String>,
    pub notes: Option<String>,
}

/// A pitch access record
///
/// Grants temporary access to one company's pitch deck via a URL-embedded
/// token, optionally gated by a username and an IP allowlist.
#[derive(Debug, Clone)]
pub struct PitchAccess {
    pub id: PitchAccessId,
    pub company_slug: String,
    pub token: String,
    /// When set, validation additionally requires this exact username
    pub username: Option<String>,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub is_revoked: bool,
    /// Empty list means no IP restriction
    pub allowed_ips: Vec<String>,
    pub view_count: i64,
    pub last_viewed_at: Option<DateTime<Utc>>,
    pub metadata: RecipientMeta,
}

impl PitchAccess {
    pub fn new(
        company_slug: String,
        token: String,
        username: Option<String>,
        expiry_days: i64,
        metadata: RecipientMeta,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: PitchAccessId::new(),
            company_slug,
            token,
            username,
            expires_at: now + Duration::days(expiry_days),
            created_at: now,
            is_revoked: false,
            allowed_ips: Vec::new(),
            view_count: 0,
            last_viewed_at: None,
            metadata,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Whether `client_ip` passes the allowlist (empty list allows all)
    pub fn ip_allowed(&self, client_ip: &str) -> bool {
        self.allowed_ips.is_empty() || self.allowed_ips.iter().any(|ip| ip == client_ip)
    }

    /// Shareable URL embedding the token (and bound username, if any)
    pub fn share_url(&self, base_url: &str) -> String {
        let mut url = format!(
            "{}/pitch/{}?token={}",
            base_url.trim_end_matches('/'),
            self.company_slug,
            self.token
        );
        if let Some(username) = &self.username {
            url.push_str("&username=");
            url.push_str(username);
        }
        url
    }
}

/// One recorded view of a pitch, for analytics
#[derive(Debug, Clone)]
pub struct PitchView {
    pub pitch_id: PitchAccessId,
    pub client_ip: String,
    pub username: Option<String>,
    pub user_agent: Option<String>,
    pub viewed_at: DateTime<Utc>,
}
