// ============================================================
// APPLICATION CONFIGURATION
// ============================================================
// Values for search, selection, download and pacing

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Configuration for a batch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory images are written into (default: images)
    pub output_dir: PathBuf,

    /// CSV file to read; the embedded menu dataset is used when unset
    pub csv_path: Option<PathBuf>,

    /// Pause after every item in milliseconds (default: 1500)
    pub delay_ms: u64,

    /// Image search page queried for every item
    pub search_endpoint: String,

    /// User-Agent sent with every request
    pub user_agent: String,

    /// CSS selector marking one image result on the search page (default: .mimg)
    pub candidate_selector: String,

    /// Appended to every query before searching
    pub query_hint: String,

    /// Number of leading results the random pick is drawn from (default: 5)
    pub random_window: usize,

    /// Number of leading results scanned when the pick is unusable (default: 10)
    pub fallback_window: usize,

    /// Request timeout in seconds; the HTTP client default applies when unset
    pub request_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("images"),
            csv_path: None,
            delay_ms: 1500,
            search_endpoint: "https://www.bing.com/images/search".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            candidate_selector: ".mimg".to_string(),
            query_hint: "food dish restaurant".to_string(),
            random_window: 5,
            fallback_window: 10,
            request_timeout_secs: None,
        }
    }
}

impl AppConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.search_endpoint.trim().is_empty() {
            return Err("search_endpoint must not be empty".to_string());
        }
        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty".to_string());
        }
        if self.candidate_selector.trim().is_empty() {
            return Err("candidate_selector must not be empty".to_string());
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err("output_dir must not be empty".to_string());
        }
        if self.random_window == 0 {
            return Err("random_window must be > 0".to_string());
        }
        if self.fallback_window < self.random_window {
            return Err("fallback_window must be >= random_window".to_string());
        }
        if self.request_timeout_secs == Some(0) {
            return Err("request_timeout_secs must be > 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.delay(), Duration::from_millis(1500));
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn test_window_validation() {
        let config = AppConfig {
            random_window: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            random_window: 5,
            fallback_window: 3,
            ..Default::default()
        };
        assert_eq!(
            config.validate().unwrap_err(),
            "fallback_window must be >= random_window"
        );
    }

    #[test]
    fn test_empty_selector_rejected() {
        let config = AppConfig {
            candidate_selector: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
