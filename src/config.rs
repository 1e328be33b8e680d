//! Application Configuration
//!
//! Built once at startup and handed to the API client and the logger.
//! Values come from build-time environment variables so the static
//! bundle carries its own settings.

use log::LevelFilter;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Root of the notes API, without the `/api` suffix
    pub api_base_url: &'static str,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// Read `CORENOTES_API_URL` and `CORENOTES_LOG` as set at compile time
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("CORENOTES_API_URL"), option_env!("CORENOTES_LOG"))
    }

    fn from_values(api_url: Option<&'static str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);
        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);
        Self { api_base_url, log_level }
    }
}
