//! Cgroup quota files and the filesystem view they are read through.
//!
//! Supports both cgroup v1 and v2 memory quota files as exposed in
//! containerized environments (Docker, Kubernetes).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Default cgroup mount point.
pub const CGROUP_MOUNT: &str = "/sys/fs/cgroup";

/// cgroup v2 memory quota file, relative to the mount root.
pub const CGROUP_V2_MEMORY_MAX: &str = "memory.max";

/// cgroup v1 memory quota file, relative to the mount root.
pub const CGROUP_V1_MEMORY_LIMIT: &str = "memory/memory.limit_in_bytes";

/// Quota value meaning "no numeric limit".
pub const UNLIMITED_TOKEN: &str = "max";

/// Cgroup version a quota was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CgroupVersion {
    /// cgroup v2 (unified hierarchy)
    V2,
    /// cgroup v1 (legacy hierarchy)
    V1,
}

impl CgroupVersion {
    /// Lookup order for quota files. v2 always wins when present.
    pub const PRECEDENCE: [CgroupVersion; 2] = [CgroupVersion::V2, CgroupVersion::V1];

    /// Memory quota file for this version, relative to the mount root.
    pub fn memory_limit_file(self) -> &'static str {
        match self {
            Self::V2 => CGROUP_V2_MEMORY_MAX,
            Self::V1 => CGROUP_V1_MEMORY_LIMIT,
        }
    }
}

impl std::fmt::Display for CgroupVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::V2 => write!(f, "v2"),
            Self::V1 => write!(f, "v1"),
        }
    }
}

/// Read-only view of the files a cgroup exposes.
///
/// Implementations return `Ok(None)` when the file does not exist; every
/// other failure is reported as an error.
pub trait QuotaSource {
    /// Read the raw bytes of the file at `relative`.
    fn read_file(&self, relative: &str) -> io::Result<Option<Vec<u8>>>;

    /// Path used in diagnostics for `relative`.
    fn display_path(&self, relative: &str) -> PathBuf {
        PathBuf::from(relative)
    }
}

/// Cgroup filesystem rooted at a mount point.
#[derive(Debug, Clone)]
pub struct CgroupFs {
    root: PathBuf,
}

impl CgroupFs {
    /// View of the cgroup filesystem mounted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Mount root this view reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for CgroupFs {
    fn default() -> Self {
        Self::new(CGROUP_MOUNT)
    }
}

impl QuotaSource for CgroupFs {
    fn read_file(&self, relative: &str) -> io::Result<Option<Vec<u8>>> {
        match fs::read(self.root.join(relative)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn display_path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}
