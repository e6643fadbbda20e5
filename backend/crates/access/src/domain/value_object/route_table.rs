use crate::domain::value_object::role::Role;

/// A single guarded path prefix and the role it requires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRule {
    /// Path prefix, e.g. `/dashboard`
    pub prefix: String,
    /// Minimum role required for anything under the prefix
    pub min_role: Role,
    /// Login page for this area; requests here pass the guard unauthenticated
    pub login_path: String,
}

impl RouteRule {
    pub fn new(
        prefix: impl Into<String>,
        min_role: Role,
        login_path: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            min_role,
            login_path: login_path.into(),
        }
    }
}

/// Ordered mapping from path prefixes to required roles
///
/// Rules are evaluated top to bottom and the first prefix match wins, so
/// a more specific prefix must be listed before a broader one that
/// contains it. Paths matching no rule are public.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    rules: Vec<RouteRule>,
}

impl RouteTable {
    pub fn new(rules: Vec<RouteRule>) -> Self {
        Self { rules }
    }

    /// The studio's standard gated areas
    pub fn standard() -> Self {
        Self::new(vec![
            RouteRule::new("/owner", Role::Owner, "/owner/login"),
            RouteRule::new("/investors", Role::Investor, "/investors/login"),
            RouteRule::new("/clients", Role::Client, "/clients/login"),
        ])
    }

    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    /// Find the rule guarding `path`, if any
    ///
    /// A prefix matches the prefix itself and any deeper segment
    /// (`/clients` matches `/clients` and `/clients/billing`, not
    /// `/clientside`). The rule's own login path is exempt.
    pub fn match_path(&self, path: &str) -> Option<&RouteRule> {
        let rule = self
            .rules
            .iter()
            .find(|r| Self::prefix_matches(&r.prefix, path))?;
        if Self::prefix_matches(&rule.login_path, path) {
            return None;
        }
        Some(rule)
    }

    fn prefix_matches(prefix: &str, path: &str) -> bool {
        match path.strip_prefix(prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_exact_and_nested() {
        let table = RouteTable::standard();
        assert_eq!(table.match_path("/owner").unwrap().min_role, Role::Owner);
        assert_eq!(
            table.match_path("/owner/content/42").unwrap().min_role,
            Role::Owner
        );
        assert_eq!(
            table.match_path("/clients/billing").unwrap().min_role,
            Role::Client
        );
    }

    #[test]
    fn test_public_paths_do_not_match() {
        let table = RouteTable::standard();
        assert!(table.match_path("/").is_none());
        assert!(table.match_path("/work").is_none());
        assert!(table.match_path("/about").is_none());
    }

    #[test]
    fn test_prefix_does_not_match_longer_segment() {
        let table = RouteTable::standard();
        // /clientside shares a string prefix with /clients but is a
        // different top-level segment
        assert!(table.match_path("/clientside").is_none());
        assert!(table.match_path("/ownership").is_none());
    }

    #[test]
    fn test_login_paths_are_exempt() {
        let table = RouteTable::standard();
        assert!(table.match_path("/owner/login").is_none());
        assert!(table.match_path("/clients/login").is_none());
        assert!(table.match_path("/investors/login").is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let table = RouteTable::new(vec![
            RouteRule::new("/clients/archive", Role::Team, "/login"),
            RouteRule::new("/clients", Role::Client, "/clients/login"),
        ]);
        assert_eq!(
            table.match_path("/clients/archive").unwrap().min_role,
            Role::Team
        );
        assert_eq!(table.match_path("/clients").unwrap().min_role, Role::Client);
    }
}
