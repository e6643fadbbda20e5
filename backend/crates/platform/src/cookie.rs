//! Cookie Management Infrastructure
//!
//! Session cookie building and extraction.

use axum::http::{HeaderMap, header};

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Session cookie settings
///
/// `Secure` is attached only when `secure` is set (production); the cookie
/// is always `HttpOnly` with `Path=/`.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    pub name: String,
    pub secure: bool,
    pub same_site: SameSite,
    pub max_age_secs: u64,
}

impl SessionCookie {
    /// Build the `Set-Cookie` value carrying a session token
    pub fn set(&self, token: &str) -> String {
        let mut parts = vec![
            format!("{}={}", self.name, token),
            "HttpOnly".to_string(),
            "Path=/".to_string(),
            format!("Max-Age={}", self.max_age_secs),
        ];

        if self.secure {
            parts.push("Secure".to_string());
        }
        parts.push(format!("SameSite={}", self.same_site.as_str()));

        parts.join("; ")
    }

    /// Build the `Set-Cookie` value that clears the cookie
    pub fn clear(&self) -> String {
        let mut parts = vec![
            format!("{}=", self.name),
            "HttpOnly".to_string(),
            "Path=/".to_string(),
            "Max-Age=0".to_string(),
            "Expires=Thu, 01 Jan 1970 00:00:00 GMT".to_string(),
        ];

        if self.secure {
            parts.push("Secure".to_string());
        }
        parts.push(format!("SameSite={}", self.same_site.as_str()));

        parts.join("; ")
    }
}

/// Extract a cookie value from request headers
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(header::COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;

            if key == name {
                Some(value.to_string())
            } else {
                None
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn cookie() -> SessionCookie {
        SessionCookie {
            name: "session".to_string(),
            secure: true,
            same_site: SameSite::Lax,
            max_age_secs: 7 * 24 * 3600,
        }
    }

    #[test]
    fn test_set_cookie_attributes() {
        let value = cookie().set("tok123");
        assert!(value.starts_with("session=tok123"));
        assert!(value.contains("HttpOnly"));
        assert!(value.contains("Secure"));
        assert!(value.contains("SameSite=Lax"));
        assert!(value.contains("Max-Age=604800"));
    }

    #[test]
    fn test_insecure_cookie_omits_secure() {
        let mut c = cookie();
        c.secure = false;
        assert!(!c.set("tok").contains("Secure"));
    }

    #[test]
    fn test_clear_cookie() {
        let value = cookie().clear();
        assert!(value.starts_with("session="));
        assert!(value.contains("Max-Age=0"));
        assert!(value.contains("Expires="));
    }

    #[test]
    fn test_extract_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("foo=bar; session=abc123; other=xyz"),
        );

        assert_eq!(
            extract_cookie(&headers, "session"),
            Some("abc123".to_string())
        );
        assert_eq!(extract_cookie(&headers, "foo"), Some("bar".to_string()));
        assert_eq!(extract_cookie(&headers, "missing"), None);
    }
}
