//! Client Configuration
//!
//! Build-time settings for the remote task-list API.

use log::{Level, LevelFilter};

const DEFAULT_API_BASE: &str = "http://173.199.114.233:3001";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Local storage key holding the credential token
pub const TOKEN_KEY: &str = "token";

/// Delay before a failed main view falls back to the homepage
pub const REDIRECT_DELAY_MS: u32 = 3000;

/// API endpoint settings, provided via context
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL without trailing slash, e.g. `http://host:3001`
    pub base_url: String,
    pub token_key: &'static str,
    pub redirect_delay_ms: u32,
    pub log_level: LevelFilter,
}

impl ApiConfig {
    /// Resolve from `TASKLIST_API_BASE` / `TASKLIST_LOG_LEVEL` at compile time.
    /// A WASM bundle has no process environment, so these are baked in by the build.
    pub fn from_env() -> Self {
        Self::from_parts(
            option_env!("TASKLIST_API_BASE"),
            option_env!("TASKLIST_LOG_LEVEL"),
        )
    }

    pub fn from_parts(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_string();

        let log_level = log_level
            .unwrap_or(DEFAULT_LOG_LEVEL)
            .parse()
            .unwrap_or(LevelFilter::Info);

        Self {
            base_url,
            token_key: TOKEN_KEY,
            redirect_delay_ms: REDIRECT_DELAY_MS,
            log_level,
        }
    }

    /// Level handed to the console logger; `off` falls back to `Info`
    pub fn console_level(&self) -> Level {
        self.log_level.to_level().unwrap_or(Level::Info)
    }

    /// Absolute URL for an API path such as `/v1/task_lists`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_parts(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_BASE);
        assert_eq!(config.token_key, "token");
        assert_eq!(config.redirect_delay_ms, 3000);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::from_parts(Some("https://todo.example.com/"), Some("debug"));
        assert_eq!(config.base_url, "https://todo.example.com");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.url("/v1/task_lists"), "https://todo.example.com/v1/task_lists");
        assert_eq!(config.url("v1/users/login"), "https://todo.example.com/v1/users/login");
    }

    #[test]
    fn test_console_level() {
        assert_eq!(ApiConfig::from_parts(None, Some("warn")).console_level(), Level::Warn);
        assert_eq!(ApiConfig::from_parts(None, Some("off")).console_level(), Level::Info);
    }

    #[test]
    fn test_blank_base_and_bad_level_fall_back() {
        let config = ApiConfig::from_parts(Some("   "), Some("loud"));
        assert_eq!(config.base_url, DEFAULT_API_BASE);
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
