//! Client identification utilities
//!
//! Request metadata (IP address, User-Agent) recorded for session and
//! pitch-view audit trails.

use axum::http::{HeaderMap, header};
use std::net::IpAddr;

/// Non-authoritative request metadata
///
/// Recorded for audit only; nothing here is a security boundary.
#[derive(Debug, Clone, Default)]
pub struct RequestMeta {
    /// Client IP address (from X-Forwarded-For or direct connection)
    pub ip: Option<IpAddr>,
    /// User-Agent string
    pub user_agent: Option<String>,
}

impl RequestMeta {
    /// Extract metadata from request headers and the connection address
    pub fn from_request(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> Self {
        let user_agent = headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        Self {
            ip: extract_client_ip(headers, direct_ip),
            user_agent,
        }
    }

    /// IP rendered for storage ("unknown" when absent)
    pub fn ip_string(&self) -> String {
        self.ip
            .map(|ip| ip.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Extract client IP address from headers
///
/// Checks X-Forwarded-For first (for reverse proxy setups), then falls
/// back to the direct connection IP.
pub fn extract_client_ip(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> Option<IpAddr> {
    // First IP in the X-Forwarded-For list is the originating client
    if let Some(xff) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first_ip) = xff.split(',').next() {
            if let Ok(ip) = first_ip.trim().parse::<IpAddr>() {
                return Some(ip);
            }
        }
    }
    direct_ip
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_client_ip_xff() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("192.168.1.1, 10.0.0.1"),
        );

        let ip = extract_client_ip(&headers, None);
        assert_eq!(ip, Some("192.168.1.1".parse().unwrap()));
    }

    #[test]
    fn test_extract_client_ip_direct() {
        let headers = HeaderMap::new();
        let direct: IpAddr = "127.0.0.1".parse().unwrap();

        let ip = extract_client_ip(&headers, Some(direct));
        assert_eq!(ip, Some(direct));
    }

    #[test]
    fn test_request_meta() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_static("Mozilla/5.0 Test Browser"),
        );

        let meta = RequestMeta::from_request(&headers, None);
        assert_eq!(meta.user_agent.as_deref(), Some("Mozilla/5.0 Test Browser"));
        assert_eq!(meta.ip, None);
        assert_eq!(meta.ip_string(), "unknown");
    }

    #[test]
    fn test_request_meta_without_user_agent() {
        let headers = HeaderMap::new();
        let meta = RequestMeta::from_request(&headers, Some("10.0.0.9".parse().unwrap()));
        assert_eq!(meta.user_agent, None);
        assert_eq!(meta.ip_string(), "10.0.0.9");
    }
}
