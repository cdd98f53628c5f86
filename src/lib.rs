//! cgroup_memlimit - Container-aware soft memory limit.
//!
//! Detects the memory quota a cgroup (v1 or v2) imposes on the current
//! process and installs a soft limit at 90% of it, so the process stays
//! below the quota instead of being killed by the OOM killer.
//!
//! # Features
//!
//! - **cgroup v2 and v1**: `memory.max` first, `memory/memory.limit_in_bytes` as fallback
//! - **Explicit override**: a non-empty `SOFT_MEMORY_LIMIT` disables detection
//! - **Init once**: [`runtime::init`] runs at startup, the effective limit stays readable afterwards
//! - **Structured logging**: JSON log format via tracing
//!
//! # Example
//!
//! ```rust,ignore
//! use cgroup_memlimit::{runtime, Config};
//!
//! let config = Config::from_env()?;
//! cgroup_memlimit::logging::init(&config.logging)?;
//!
//! let configured = runtime::init(&config)?;
//! configured.log_summary();
//!
//! assert_eq!(runtime::effective_limit(), Some(configured.effective_limit));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod runtime;
pub mod system;

// Re-exports for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use runtime::{effective_limit, init, Configured, MemoryManager, SoftLimit};
pub use system::{resolve, CgroupFs, QuotaSource, Resolution, NO_LIMIT};
