use crate::core::retry::{Backoff, RetryConfig};
use crate::core::ConfigProvider;
use crate::utils::error::{FacadeError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub retry: RetryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8111,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FacadeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FacadeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FacadeError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("upstream.base_url", &self.upstream.base_url)?;
        validate_non_empty_string("server.host", &self.server.host)?;
        validate_positive_number("retry.max_attempts", u64::from(self.retry.max_attempts), 1)?;

        if let Some(timeout) = self.upstream.timeout_seconds {
            validate_positive_number("upstream.timeout_seconds", timeout, 1)?;
        }

        if let Backoff::Exponential {
            initial_delay_ms,
            multiplier,
            max_delay_ms,
        } = self.retry.backoff
        {
            validate_range("retry.backoff.multiplier", multiplier, 1.0, 10.0)?;
            validate_positive_number(
                "retry.backoff.max_delay_ms",
                max_delay_ms,
                initial_delay_ms,
            )?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn upstream_url(&self) -> &str {
        &self.upstream.base_url
    }

    fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn retry_config(&self) -> RetryConfig {
        self.retry.clone()
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream.timeout_seconds.unwrap_or(10))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
