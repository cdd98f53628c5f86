//! Cgroup and memory limit configuration.

use std::path::PathBuf;

use super::parse::{env_byte_size, env_opt, env_or};
use super::ConfigError;
use crate::system::CGROUP_MOUNT;

/// Environment variable that takes explicit control of the soft limit.
pub const LIMIT_OVERRIDE_ENV: &str = "SOFT_MEMORY_LIMIT";

/// Cgroup configuration loaded from environment.
#[derive(Clone, Debug)]
pub struct CgroupConfig {
    /// Cgroup mount root (CGROUP_ROOT).
    pub root: PathBuf,
    /// Raw override value; empty values are treated as unset.
    pub limit_override: Option<String>,
    /// Override parsed as a byte count.
    pub limit_override_bytes: Option<i64>,
}

impl CgroupConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let root = PathBuf::from(env_or("CGROUP_ROOT", CGROUP_MOUNT));
        if !root.is_absolute() {
            return Err(ConfigError::Invalid {
                key: "CGROUP_ROOT".into(),
                message: format!("'{}' is not an absolute path", root.display()),
            });
        }

        Ok(Self {
            root,
            limit_override: env_opt(LIMIT_OVERRIDE_ENV),
            limit_override_bytes: env_byte_size(LIMIT_OVERRIDE_ENV)?,
        })
    }
}

impl Default for CgroupConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(CGROUP_MOUNT),
            limit_override: None,
            limit_override_bytes: None,
        }
    }
}
