//! Soft memory limit resolution from cgroup quota files.

use serde::Serialize;
use tracing::{debug, trace, warn};

use super::cgroup::{CgroupVersion, QuotaSource, UNLIMITED_TOKEN};
use crate::error::{Error, Result};

/// Sentinel limit meaning "do not override the current setting".
pub const NO_LIMIT: i64 = -1;

/// Fraction of the cgroup quota handed to the memory manager. The remainder
/// is left for stacks, native buffers and allocator bookkeeping.
pub const HEADROOM_RATIO: f64 = 0.9;

/// Outcome of a successful resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum Resolution {
    /// The override variable is set; the caller has taken control.
    Overridden,
    /// No quota file exists.
    NoCgroup,
    /// The quota file contains `max`.
    Unbounded { version: CgroupVersion },
    /// The quota file holds a byte count.
    Limited {
        version: CgroupVersion,
        quota: i64,
        limit: i64,
    },
}

impl Resolution {
    /// Resolved limit in bytes, or [`NO_LIMIT`].
    pub fn limit(&self) -> i64 {
        match self {
            Self::Limited { limit, .. } => *limit,
            _ => NO_LIMIT,
        }
    }

    /// Whether this resolution carries a concrete limit.
    pub fn is_limited(&self) -> bool {
        matches!(self, Self::Limited { .. })
    }

    /// Cgroup version the quota was read from, if any.
    pub fn version(&self) -> Option<CgroupVersion> {
        match self {
            Self::Unbounded { version } | Self::Limited { version, .. } => Some(*version),
            _ => None,
        }
    }
}

/// Resolve the soft memory limit.
///
/// `limit_override` is the raw value of the override variable; any non-empty
/// value short-circuits filesystem inspection.
///
/// Unreadable or malformed quota files are errors. They are never treated as
/// "no limit".
pub fn resolve<S>(source: &S, limit_override: Option<&str>) -> Result<Resolution>
where
    S: QuotaSource + ?Sized,
{
    if limit_override.is_some_and(|v| !v.is_empty()) {
        debug!("Memory limit override set, skipping cgroup detection");
        return Ok(Resolution::Overridden);
    }

    let Some((version, raw)) = find_quota_file(source)? else {
        debug!("No cgroup memory quota file found");
        return Ok(Resolution::NoCgroup);
    };

    let file = version.memory_limit_file();
    let content = String::from_utf8(raw).map_err(|e| Error::Unparsable {
        path: source.display_path(file),
        value: String::from_utf8_lossy(e.as_bytes()).trim().to_string(),
        error: e.utf8_error().to_string(),
    })?;
    let trimmed = content.trim();
    trace!("cgroup {} {}: {:?}", version, file, trimmed);

    if trimmed == UNLIMITED_TOKEN {
        debug!("cgroup {} imposes no memory quota", version);
        return Ok(Resolution::Unbounded { version });
    }

    let quota = parse_quota(trimmed).map_err(|error| Error::Unparsable {
        path: source.display_path(file),
        value: trimmed.to_string(),
        error,
    })?;

    if quota == 0 {
        warn!("cgroup {} reports a zero memory quota", version);
    }

    let limit = apply_headroom(quota);
    debug!(
        "cgroup {} memory quota: {} bytes, soft limit: {} bytes",
        version, quota, limit
    );

    Ok(Resolution::Limited {
        version,
        quota,
        limit,
    })
}

/// Locate the first existing quota file in precedence order.
fn find_quota_file<S>(source: &S) -> Result<Option<(CgroupVersion, Vec<u8>)>>
where
    S: QuotaSource + ?Sized,
{
    for version in CgroupVersion::PRECEDENCE {
        let file = version.memory_limit_file();
        let content = source.read_file(file).map_err(|error| Error::Unreadable {
            path: source.display_path(file),
            error,
        })?;

        if let Some(content) = content {
            debug!("Found cgroup {} memory quota file", version);
            return Ok(Some((version, content)));
        }
    }

    Ok(None)
}

/// Parse a quota as a base-10 byte count within `i64` range.
fn parse_quota(s: &str) -> std::result::Result<i64, String> {
    let value: i64 = s.parse().map_err(|e: std::num::ParseIntError| e.to_string())?;
    if value < 0 {
        return Err("negative quota".to_string());
    }
    Ok(value)
}

/// `ceil(quota * 0.9)`, computed in floating point.
pub fn apply_headroom(quota: i64) -> i64 {
    (quota as f64 * HEADROOM_RATIO).ceil() as i64
}
