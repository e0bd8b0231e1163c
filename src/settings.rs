use std::env;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://opentdb.com";
pub const DEFAULT_LOG_FILE: &str = "quiz_wiz.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    pub log_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Settings {
    /// Read runtime settings from `QUIZ_WIZ_API_URL` and `QUIZ_WIZ_LOG`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let api_url = lookup("QUIZ_WIZ_API_URL")
            .filter(|value| !value.trim().is_empty())
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_url);
        let log_path = lookup("QUIZ_WIZ_LOG")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.log_path);
        Self { api_url, log_path }
    }
}
