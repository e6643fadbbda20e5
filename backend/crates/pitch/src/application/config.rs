//! Application Configuration

/// Pitch application configuration
#[derive(Debug, Clone)]
pub struct PitchConfig {
    /// Base URL for generated share links
    pub public_base_url: String,
    /// Expiry window when the creator does not pick one
    pub default_expiry_days: i64,
    /// Hard cap on extension: never more than this many days from now
    pub max_extension_days: i64,
}

impl Default for PitchConfig {
    fn default() -> Self {
        Self {
            public_base_url: "http://localhost:3000".to_string(),
            default_expiry_days: 7,
            max_extension_days: 30,
        }
    }
}

impl PitchConfig {
    pub fn new(public_base_url: impl Into<String>) -> Self {
        Self {
            public_base_url: public_base_url.into(),
            ..Default::default()
        }
    }
}
