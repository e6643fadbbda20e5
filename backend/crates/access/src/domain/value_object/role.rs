use serde::{Deserialize, Serialize};
use std::fmt;

/// Role hierarchy for the studio's gated areas
///
/// Totally ordered: `client < investor < partner < team < owner`.
/// Holding a role grants every permission required at or below it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(i16)]
pub enum Role {
    Client = 0,
    Investor = 1,
    Partner = 2,
    Team = 3,
    Owner = 4,
}

impl Role {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        use Role::*;
        match self {
            Client => "client",
            Investor => "investor",
            Partner => "partner",
            Team => "team",
            Owner => "owner",
        }
    }

    /// Whether this role satisfies a route requiring `required`
    ///
    /// Monotonic over the hierarchy: owner grants everything, client only
    /// client-level routes.
    #[inline]
    pub const fn grants(&self, required: Role) -> bool {
        self.id() >= required.id()
    }

    #[inline]
    pub const fn is_owner(&self) -> bool {
        matches!(self, Role::Owner)
    }

    #[inline]
    pub const fn is_team_or_higher(&self) -> bool {
        self.grants(Role::Team)
    }

    /// Parse a stored role code
    ///
    /// Returns `None` for unknown codes; a profile row with an
    /// unrecognized role is treated as role-less (403 downstream).
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use Role::*;
        match code {
            "client" => Some(Client),
            "investor" => Some(Investor),
            "partner" => Some(Partner),
            "team" => Some(Team),
            "owner" => Some(Owner),
            _ => None,
        }
    }

    /// All roles, lowest first
    pub const ALL: [Role; 5] = [
        Role::Client,
        Role::Investor,
        Role::Partner,
        Role::Team,
        Role::Owner,
    ];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_code() {
        assert_eq!(Role::from_code("client"), Some(Role::Client));
        assert_eq!(Role::from_code("investor"), Some(Role::Investor));
        assert_eq!(Role::from_code("partner"), Some(Role::Partner));
        assert_eq!(Role::from_code("team"), Some(Role::Team));
        assert_eq!(Role::from_code("owner"), Some(Role::Owner));
        assert_eq!(Role::from_code("admin"), None);
        assert_eq!(Role::from_code(""), None);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Owner.to_string(), "owner");
        assert_eq!(Role::Client.to_string(), "client");
    }

    #[test]
    fn test_hierarchy_is_monotonic() {
        // Every role grants every requirement at or below its own rank
        for (i, holder) in Role::ALL.iter().enumerate() {
            for (j, required) in Role::ALL.iter().enumerate() {
                assert_eq!(
                    holder.grants(*required),
                    i >= j,
                    "{holder} vs {required}"
                );
            }
        }
    }

    #[test]
    fn test_role_ordering() {
        assert!(Role::Client < Role::Investor);
        assert!(Role::Investor < Role::Partner);
        assert!(Role::Partner < Role::Team);
        assert!(Role::Team < Role::Owner);
    }

    #[test]
    fn test_role_helpers() {
        assert!(Role::Owner.is_owner());
        assert!(!Role::Team.is_owner());
        assert!(Role::Team.is_team_or_higher());
        assert!(Role::Owner.is_team_or_higher());
        assert!(!Role::Partner.is_team_or_higher());
    }
}
