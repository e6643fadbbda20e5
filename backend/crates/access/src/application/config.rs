//! Application Configuration
//!
//! Configuration for the Access application layer.

use std::time::Duration;

use platform::cookie::SessionCookie;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Access application configuration
#[derive(Debug, Clone)]
pub struct AccessConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session TTL (7 days)
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "session".to_string(),
            session_secret: [0u8; 32],
            session_ttl: Duration::from_secs(7 * 24 * 3600), // 7 days
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl AccessConfig {
    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            session_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Override the cookie Secure attribute, e.g. from `COOKIE_SECURE`
    ///
    /// Lets a release build behind a TLS-terminating proxy (or a local
    /// plain-HTTP deployment) opt out of the Secure default.
    pub fn with_cookie_secure(self, secure: bool) -> Self {
        Self {
            cookie_secure: secure,
            ..self
        }
    }

    /// Session TTL in whole seconds
    pub fn session_ttl_secs(&self) -> i64 {
        self.session_ttl.as_secs() as i64
    }

    /// Build the cookie writer for this config
    pub fn cookie(&self) -> SessionCookie {
        SessionCookie {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            same_site: self.cookie_same_site,
            max_age_secs: self.session_ttl.as_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl_is_seven_days() {
        let config = AccessConfig::default();
        assert_eq!(config.session_ttl_secs(), 7 * 24 * 3600);
        assert_eq!(config.session_cookie_name, "session");
    }

    #[test]
    fn test_random_secret_differs() {
        let a = AccessConfig::with_random_secret();
        let b = AccessConfig::with_random_secret();
        assert_ne!(a.session_secret, b.session_secret);
    }

    #[test]
    fn test_cookie_secure_override() {
        let config = AccessConfig::default().with_cookie_secure(false);
        assert!(!config.cookie_secure);
        assert!(!config.cookie().secure);

        let config = AccessConfig::development().with_cookie_secure(true);
        assert!(config.cookie_secure);
    }

    #[test]
    fn test_development_is_insecure_cookie() {
        let config = AccessConfig::development();
        assert!(!config.cookie_secure);
        assert_ne!(config.session_secret, [0u8; 32]);
    }
}
