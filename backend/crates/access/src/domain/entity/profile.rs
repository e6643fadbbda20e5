use crate::domain::value_object::role::Role;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A user profile row
///
/// Created out-of-band by an operator script; this crate only ever reads
/// it. `role` is `None` when the stored code is absent or unrecognized,
/// which downstream treats as "no access anywhere".
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub uid: String,
    pub email: String,
    pub role: Option<Role>,
    pub client_id: Option<String>,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// The profile's role, if one is assigned
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Whether this profile may enter an area requiring `required`
    pub fn grants(&self, required: Role) -> bool {
        self.role.is_some_and(|r| r.grants(required))
    }
}
