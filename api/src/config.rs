//! Backend configuration.
//!
//! Values are read once from the build environment (see `build.rs`) so the
//! same binary carries them into the browser.

/// Application id of the site on the hosted backend.
pub const DEFAULT_APP_ID: &str = "691466a63d4977ae37992c93";
pub const DEFAULT_SERVER_URL: &str = "https://base44.app";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Application identifier (default: `DEFAULT_APP_ID`)
    pub app_id: String,
    /// Every call through the handle must carry caller authentication (default: true)
    pub requires_auth: bool,
    /// Base URL of the hosted backend (default: `DEFAULT_SERVER_URL`)
    pub server_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            app_id: DEFAULT_APP_ID.to_string(),
            requires_auth: true,
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

impl BackendConfig {
    pub fn new(app_id: impl Into<String>, requires_auth: bool) -> Self {
        Self {
            app_id: app_id.into(),
            requires_auth,
            ..Self::default()
        }
    }

    /// Load configuration from `BACKEND_APP_ID`, `BACKEND_REQUIRES_AUTH` and
    /// `BACKEND_SERVER_URL` as seen at build time, falling back to the defaults.
    pub fn load() -> Self {
        let defaults = Self::default();
        Self {
            app_id: option_env!("BACKEND_APP_ID")
                .map(str::to_string)
                .unwrap_or(defaults.app_id),
            requires_auth: option_env!("BACKEND_REQUIRES_AUTH")
                .and_then(parse_flag)
                .unwrap_or(defaults.requires_auth),
            server_url: option_env!("BACKEND_SERVER_URL")
                .map(str::to_string)
                .unwrap_or(defaults.server_url),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
