//! Configuration module for cgroup_memlimit.
//!
//! This module provides centralized configuration loading from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `CGROUP_ROOT` | `/sys/fs/cgroup` | Cgroup mount root |
//! | `SOFT_MEMORY_LIMIT` | unset | Explicit soft limit (`512MiB`, `off`); disables cgroup detection |
//! | `LOG_LEVEL` / `RUST_LOG` | `cgroup_memlimit=info` | Log filter |
//! | `SERVICE_NAME` | `cgroup_memlimit` | Service name in JSON logs |
//!
//! # Example
//!
//! ```rust,ignore
//! use cgroup_memlimit::config::Config;
//!
//! let config = Config::from_env()?;
//! println!("Cgroup root: {}", config.cgroup.root.display());
//! ```

mod cgroup;
mod error;
mod logging;
mod parse;

pub use cgroup::{CgroupConfig, LIMIT_OVERRIDE_ENV};
pub use error::ConfigError;
pub use logging::LoggingConfig;
pub use parse::parse_byte_size;

/// Complete library configuration.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Cgroup configuration.
    pub cgroup: CgroupConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            cgroup: CgroupConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
        })
    }

    /// Print configuration summary to log.
    pub fn log_summary(&self) {
        use tracing::info;

        info!("Configuration loaded:");
        info!("  Cgroup root: {}", self.cgroup.root.display());

        if let Some(ref value) = self.cgroup.limit_override {
            info!("  {}: {}", LIMIT_OVERRIDE_ENV, value);
        }

        info!("  Log filter: {}", self.logging.filter);
    }
}

/// Serializes tests that mutate the process environment.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
