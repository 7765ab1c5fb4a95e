use crate::core::retry::{Backoff, RetryConfig};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "employee-facade")]
#[command(about = "Stable REST facade over an unreliable employee data provider")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:8112/api/v1/employee")]
    pub upstream_url: String,

    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, default_value = "8111")]
    pub port: u16,

    #[arg(long, default_value = "3", help = "Total attempts per upstream call")]
    pub max_attempts: u32,

    #[arg(long, default_value = "500")]
    pub backoff_ms: u64,

    #[arg(long, default_value = "1.0", help = "1.0 keeps the delay fixed")]
    pub backoff_multiplier: f64,

    #[arg(long, default_value = "10000")]
    pub max_backoff_ms: u64,

    #[arg(long, default_value = "10")]
    pub request_timeout_seconds: u64,

    #[arg(long, help = "TOML configuration file; replaces the flags above")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Serve a seeded in-memory employee set instead of the upstream")]
    pub in_memory: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn upstream_url(&self) -> &str {
        &self.upstream_url
    }

    fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn retry_config(&self) -> RetryConfig {
        let backoff = if self.backoff_multiplier > 1.0 {
            Backoff::Exponential {
                initial_delay_ms: self.backoff_ms,
                multiplier: self.backoff_multiplier,
                max_delay_ms: self.max_backoff_ms,
            }
        } else {
            Backoff::Fixed {
                delay_ms: self.backoff_ms,
            }
        };

        RetryConfig {
            max_attempts: self.max_attempts,
            backoff,
        }
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("upstream_url", &self.upstream_url)?;
        validate_non_empty_string("host", &self.host)?;
        validate_positive_number("max_attempts", u64::from(self.max_attempts), 1)?;
        validate_range("backoff_multiplier", self.backoff_multiplier, 1.0, 10.0)?;
        validate_positive_number("max_backoff_ms", self.max_backoff_ms, self.backoff_ms)?;
        validate_positive_number("request_timeout_seconds", self.request_timeout_seconds, 1)?;
        Ok(())
    }
}
