use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://snaphive.onrender.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const TOKEN_FILE_NAME: &str = ".snapbee_token";

fn api_url() -> String {
    std::env::var("SNAPBEE_API_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

fn timeout_secs() -> u64 {
    std::env::var("SNAPBEE_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}

fn token_file() -> PathBuf {
    if let Ok(path) = std::env::var("SNAPBEE_TOKEN_FILE") {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }
    match std::env::var("HOME") {
        Ok(home) if !home.is_empty() => PathBuf::from(home).join(TOKEN_FILE_NAME),
        _ => PathBuf::from(TOKEN_FILE_NAME),
    }
}

/// Deployment configuration for the client.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub request_timeout: Duration,
    pub token_file: PathBuf,
}

impl Config {
    /// Environment-provided configuration with fixed defaults.
    pub fn from_env() -> Self {
        Config {
            base_url: api_url(),
            request_timeout: Duration::from_secs(timeout_secs()),
            token_file: token_file(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_token_file(mut self, path: PathBuf) -> Self {
        self.token_file = path;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::from_env()
    }
}
