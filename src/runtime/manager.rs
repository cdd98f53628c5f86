//! Soft memory limit held by the memory manager.

use std::sync::atomic::{AtomicI64, Ordering};

use crate::system::NO_LIMIT;

/// Memory manager that accepts a soft limit.
///
/// A soft limit is a target footprint the manager tries to stay under by
/// reclaiming more aggressively. It is not a hard kill threshold.
pub trait MemoryManager {
    /// Install `bytes` as the soft limit and return the limit now in effect.
    ///
    /// A negative value leaves the limit unchanged and only queries it.
    fn set_soft_limit(&self, bytes: i64) -> i64;

    /// Current soft limit without changing it.
    fn soft_limit(&self) -> i64 {
        self.set_soft_limit(NO_LIMIT)
    }
}

/// Limit reported when no soft limit has been installed.
pub const UNLIMITED: i64 = i64::MAX;

static GLOBAL: SoftLimit = SoftLimit::new(UNLIMITED);

/// Atomic soft limit shared by the components that allocate on behalf of the
/// process. It only records the target; it does not enforce it.
#[derive(Debug)]
pub struct SoftLimit {
    bytes: AtomicI64,
}

impl SoftLimit {
    /// Create a soft limit starting at `bytes`.
    pub const fn new(bytes: i64) -> Self {
        Self {
            bytes: AtomicI64::new(bytes),
        }
    }

    /// Process-wide soft limit.
    pub fn global() -> &'static SoftLimit {
        &GLOBAL
    }

    /// Current limit in bytes.
    pub fn get(&self) -> i64 {
        self.bytes.load(Ordering::Acquire)
    }
}

impl Default for SoftLimit {
    fn default() -> Self {
        Self::new(UNLIMITED)
    }
}

impl MemoryManager for SoftLimit {
    fn set_soft_limit(&self, bytes: i64) -> i64 {
        if bytes < 0 {
            return self.get();
        }
        self.bytes.store(bytes, Ordering::Release);
        bytes
    }
}
