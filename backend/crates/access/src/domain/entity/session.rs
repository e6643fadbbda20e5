use crate::domain::value_object::role::Role;
use chrono::{DateTime, Duration, Utc};
use kernel::id::SessionId;

/// A server-side session row
///
/// The cookie holds only an HMAC-signed reference to `id`; everything
/// else lives here and is re-read on every verification.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub uid: String,
    /// Role snapshot at issue time, informational only. The effective
    /// role is always re-fetched from the profile store.
    pub role: Option<Role>,
    pub client_ip: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(
        uid: String,
        role: Option<Role>,
        ttl_secs: i64,
        client_ip: Option<String>,
        user_agent: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: SessionId::new(),
            uid,
            role,
            client_ip,
            user_agent,
            created_at: now,
            expires_at: now + Duration::seconds(ttl_secs),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }

    pub fn remaining_secs(&self) -> i64 {
        (self.expires_at - Utc::now()).num_seconds().max(0)
    }
}
