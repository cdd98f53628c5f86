//! Startup configuration of the soft memory limit.

use std::sync::{Mutex, OnceLock, PoisonError};

use serde::Serialize;
use tracing::{debug, info};

use super::manager::{MemoryManager, SoftLimit, UNLIMITED};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::system::{resolve, CgroupFs, QuotaSource, Resolution};

static CONFIGURED: OnceLock<Configured> = OnceLock::new();

// Held for the whole of `init` so only one caller ever touches the global manager.
static INIT_LOCK: Mutex<()> = Mutex::new(());

/// Result of configuring the memory manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Configured {
    /// How the limit was resolved.
    #[serde(flatten)]
    pub resolution: Resolution,
    /// Limit handed to the manager, or `-1` when it was only queried.
    pub requested_limit: i64,
    /// Limit the manager reports as in effect.
    pub effective_limit: i64,
}

impl Configured {
    /// Print the outcome to log.
    pub fn log_summary(&self) {
        match self.resolution {
            Resolution::Overridden => {
                info!("Memory limit: explicit override, cgroup quota ignored");
            }
            Resolution::NoCgroup => {
                info!("Memory limit: no cgroup quota detected");
            }
            Resolution::Unbounded { version } => {
                info!("Memory limit: cgroup {} imposes no quota", version);
            }
            Resolution::Limited { version, quota, .. } => {
                info!(
                    "Memory limit: cgroup {} quota {}",
                    version,
                    format_bytes(quota)
                );
            }
        }
        info!("  Effective soft limit: {}", format_bytes(self.effective_limit));
    }
}

/// Resolve the limit from `source` and apply it to `manager`.
///
/// When resolution yields no concrete limit the manager is only queried.
/// On error the manager is left untouched.
pub fn configure<M, S>(manager: &M, source: &S, limit_override: Option<&str>) -> Result<Configured>
where
    M: MemoryManager + ?Sized,
    S: QuotaSource + ?Sized,
{
    let resolution = resolve(source, limit_override)?;
    let requested_limit = resolution.limit();

    let effective_limit = if resolution.is_limited() {
        let applied = manager.set_soft_limit(requested_limit);
        info!(
            "Soft memory limit set to {} ({} bytes)",
            format_bytes(applied),
            applied
        );
        applied
    } else {
        let current = manager.soft_limit();
        debug!("Keeping current soft memory limit: {}", format_bytes(current));
        current
    };

    Ok(Configured {
        resolution,
        requested_limit,
        effective_limit,
    })
}

/// Configure the process-wide soft limit.
///
/// Must be called once during startup, before other code relies on the
/// limit. A parsed override from `config` is installed on the manager first,
/// so the effective limit reflects the caller's explicit choice.
///
/// Concurrent callers are serialized. Once a call has succeeded, later calls
/// return [`Error::AlreadyConfigured`] without touching the manager.
pub fn init(config: &Config) -> Result<&'static Configured> {
    let _guard = INIT_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

    if let Some(existing) = CONFIGURED.get() {
        return Err(Error::AlreadyConfigured {
            effective_limit: existing.effective_limit,
        });
    }

    let manager = SoftLimit::global();
    if let Some(bytes) = config.cgroup.limit_override_bytes {
        manager.set_soft_limit(bytes);
    }

    let source = CgroupFs::new(&config.cgroup.root);
    let configured = configure(manager, &source, config.cgroup.limit_override.as_deref())?;

    Ok(CONFIGURED.get_or_init(|| configured))
}

/// Outcome of [`init`], if it has run.
pub fn configured() -> Option<&'static Configured> {
    CONFIGURED.get()
}

/// Effective soft limit recorded by [`init`], if it has run.
pub fn effective_limit() -> Option<i64> {
    CONFIGURED.get().map(|c| c.effective_limit)
}

/// Human-readable byte count.
pub fn format_bytes(bytes: i64) -> String {
    if bytes == UNLIMITED {
        return "unlimited".to_string();
    }
    if bytes < 0 {
        return "none".to_string();
    }

    if bytes >= 1_073_741_824 {
        format!("{:.1} GB", bytes as f64 / 1_073_741_824.0)
    } else if bytes >= 1_048_576 {
        format!("{:.1} MB", bytes as f64 / 1_048_576.0)
    } else {
        format!("{} bytes", bytes)
    }
}
