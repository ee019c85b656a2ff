use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::workflows::drafting::InferenceBackendKind;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub drafting: DraftingConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            drafting: DraftingConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

pub const DEFAULT_DEBOUNCE_MS: u64 = 1500;
pub const DEFAULT_MIN_ISSUE_CHARS: usize = 10;

/// Knobs for the drafting pipeline and its live projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftingConfig {
    /// Quiet period before a live draft is regenerated.
    pub debounce: Duration,
    /// Trimmed character floor below which no draft is produced.
    pub min_issue_chars: usize,
    pub backend: InferenceBackendKind,
}

impl Default for DraftingConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            min_issue_chars: DEFAULT_MIN_ISSUE_CHARS,
            backend: InferenceBackendKind::Heuristic,
        }
    }
}

impl DraftingConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let debounce_ms = env::var("DRAFT_DEBOUNCE_MS")
            .unwrap_or_else(|_| DEFAULT_DEBOUNCE_MS.to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidDebounce)?;

        let min_issue_chars = env::var("DRAFT_MIN_ISSUE_CHARS")
            .unwrap_or_else(|_| DEFAULT_MIN_ISSUE_CHARS.to_string())
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidMinIssueChars)?;

        let raw_backend =
            env::var("DRAFT_INFERENCE_BACKEND").unwrap_or_else(|_| "heuristic".to_string());
        let backend = InferenceBackendKind::parse(&raw_backend)
            .ok_or(ConfigError::UnsupportedBackend(raw_backend))?;

        Ok(Self {
            debounce: Duration::from_millis(debounce_ms),
            min_issue_chars,
            backend,
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidDebounce,
    InvalidMinIssueChars,
    UnsupportedBackend(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidDebounce => {
                write!(f, "DRAFT_DEBOUNCE_MS must be a whole number of milliseconds")
            }
            ConfigError::InvalidMinIssueChars => {
                write!(f, "DRAFT_MIN_ISSUE_CHARS must be a non-negative integer")
            }
            ConfigError::UnsupportedBackend(value) => write!(
                f,
                "DRAFT_INFERENCE_BACKEND '{}' is not supported (expected 'heuristic' or 'rule_engine')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidDebounce
            | ConfigError::InvalidMinIssueChars
            | ConfigError::UnsupportedBackend(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("DRAFT_DEBOUNCE_MS");
        env::remove_var("DRAFT_MIN_ISSUE_CHARS");
        env::remove_var("DRAFT_INFERENCE_BACKEND");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.drafting, DraftingConfig::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn drafting_overrides_are_read_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("DRAFT_DEBOUNCE_MS", "250");
        env::set_var("DRAFT_MIN_ISSUE_CHARS", "20");
        env::set_var("DRAFT_INFERENCE_BACKEND", "Heuristic");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.drafting.debounce, Duration::from_millis(250));
        assert_eq!(config.drafting.min_issue_chars, 20);
        assert_eq!(config.drafting.backend, InferenceBackendKind::Heuristic);
        reset_env();
    }

    #[test]
    fn rule_engine_backend_can_be_selected() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("DRAFT_INFERENCE_BACKEND", "rule_engine");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.drafting.backend, InferenceBackendKind::RuleEngine);
        reset_env();
    }

    #[test]
    fn rejects_unknown_inference_backend() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("DRAFT_INFERENCE_BACKEND", "gpt");
        match AppConfig::load() {
            Err(ConfigError::UnsupportedBackend(value)) => assert_eq!(value, "gpt"),
            other => panic!("expected unsupported backend error, got {other:?}"),
        }
        reset_env();
    }
}
