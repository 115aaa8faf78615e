//! Run configuration, read from the environment exactly once at startup.
//!
//! Every component receives the resulting struct by reference; nothing else
//! in the crate touches the environment, so components can be tested with
//! hand-built configurations instead of env mutation.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Which origin the source user list is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    /// A local JSON snapshot at `XUI_CONFIG_PATH`.
    File,
    /// The live panel, via login with `XUI_USERNAME` / `XUI_PASSWORD`.
    Login,
}

impl SourceMode {
    /// Anything other than the literal `file` selects the live panel.
    pub fn parse(value: &str) -> Self {
        if value == "file" {
            Self::File
        } else {
            Self::Login
        }
    }
}

/// Immutable configuration for one migration run.
///
/// The defaults exist for local testing only and must never be used against
/// production panels.
#[derive(Debug, Clone)]
pub struct MigrationConfig {
    pub xui_url: String,
    pub xui_username: String,
    pub xui_password: String,
    pub remn_api_url: String,
    pub remn_token: String,
    pub config_path: PathBuf,
    pub source: SourceMode,
    /// Per-request bound so no single call can hang the batch.
    pub request_timeout: Duration,
    /// Disables destination certificate validation when set. Defaults to
    /// validating.
    pub accept_invalid_certs: bool,
    pub log_dir: PathBuf,
}

impl MigrationConfig {
    pub fn from_env() -> Self {
        let timeout_secs = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse::<u64>()
            .unwrap_or(30);

        Self {
            xui_url: env_or("XUI_URL", "https://your-xui-panel.com"),
            xui_username: env_or("XUI_USERNAME", "admin"),
            xui_password: env_or("XUI_PASSWORD", "password"),
            remn_api_url: env_or("REMN_API_URL", "https://your-remnawave-panel.com/api"),
            remn_token: env_or("REMN_TOKEN", "YOUR_REMN_TOKEN"),
            config_path: PathBuf::from(env_or("XUI_CONFIG_PATH", "config.json")),
            source: SourceMode::parse(&env_or("SOURCE", "login")),
            request_timeout: Duration::from_secs(timeout_secs),
            accept_invalid_certs: env_or("ACCEPT_INVALID_CERTS", "false") == "true",
            log_dir: PathBuf::from(env_or("LOG_DIR", "logs")),
        }
    }

    /// HTTP client shared by both panel clients.
    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.request_timeout)
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .build()
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_mode_parses_file() {
        assert_eq!(SourceMode::parse("file"), SourceMode::File);
    }

    #[test]
    fn source_mode_defaults_to_login() {
        assert_eq!(SourceMode::parse("login"), SourceMode::Login);
        assert_eq!(SourceMode::parse(""), SourceMode::Login);
        assert_eq!(SourceMode::parse("FILE"), SourceMode::Login);
    }
}
