//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `VERDANT_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `VERDANT_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Directory holding the model checkpoint and tokenizer. Default:
    /// `./model`. `None` (an explicitly empty `VERDANT_MODEL_PATH`) opts into
    /// stub scoring.
    pub model_path: Option<PathBuf>,

    /// Maximum token length before truncation. Default: `512`.
    pub max_seq_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            model_path: Some(PathBuf::from("./model")),
            max_seq_len: crate::inference::MAX_SEQ_LEN,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "VERDANT_PORT";
    const ENV_BIND_ADDR: &'static str = "VERDANT_BIND_ADDR";
    const ENV_MODEL_PATH: &'static str = "VERDANT_MODEL_PATH";
    const ENV_MAX_SEQ_LEN: &'static str = "VERDANT_MAX_SEQ_LEN";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let model_path = Self::parse_model_path_from_env(defaults.model_path);
        let max_seq_len = Self::parse_usize_from_env(Self::ENV_MAX_SEQ_LEN, defaults.max_seq_len);

        Ok(Self {
            port,
            bind_addr,
            model_path,
            max_seq_len,
        })
    }

    /// Validates basic invariants (does not require the model directory to
    /// exist yet; the scorer reports missing artifacts when it loads).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.model_path
            && path.exists()
            && !path.is_dir()
        {
            return Err(ConfigError::NotADirectory { path: path.clone() });
        }

        if self.max_seq_len == 0 {
            return Err(ConfigError::InvalidMaxSeqLen {
                value: self.max_seq_len,
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    /// An unset variable keeps the default; a set-but-empty variable is the
    /// explicit opt-in for stub scoring.
    fn parse_model_path_from_env(default: Option<PathBuf>) -> Option<PathBuf> {
        match env::var(Self::ENV_MODEL_PATH) {
            Ok(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(trimmed))
                }
            }
            Err(_) => default,
        }
    }

    fn parse_usize_from_env(var_name: &str, default: usize) -> usize {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}
