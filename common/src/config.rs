//! Client configuration.
//!
//! The defaults point at the development server shipped in this workspace;
//! the frontend overrides the API address at compile time.

/// Address of the API when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Local storage key holding the session token.
pub const SESSION_KEY: &str = "auth_token";

/// Quiet interval before a search input is committed.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 800;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub session_key: String,
    pub search_debounce_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            session_key: SESSION_KEY.to_string(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
        }
    }
}

impl ClientConfig {
    /// Replaces the API address when `base_url` is set and not blank.
    pub fn with_api_base_url(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|url| !url.is_empty()) {
            self.api_base_url = url.trim_end_matches('/').to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_override_keeps_default() {
        let config = ClientConfig::default().with_api_base_url(Some("  "));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);

        let config = ClientConfig::default().with_api_base_url(Some("https://crm.test/api/"));
        assert_eq!(config.api_base_url, "https://crm.test/api");
        assert_eq!(config.session_key, "auth_token");
        assert_eq!(config.search_debounce_ms, 800);
    }
}
