//! Test helpers and utilities

use std::fs;
use std::path::Path;

use cgroup_memlimit::system::{CgroupFs, CGROUP_V1_MEMORY_LIMIT, CGROUP_V2_MEMORY_MAX};
use tempfile::TempDir;

/// Temporary cgroup mount root
pub struct TestCgroup {
    pub dir: TempDir,
}

#[allow(dead_code)]
impl TestCgroup {
    /// Create an empty mount root (no quota files)
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Write the cgroup v2 quota file
    pub fn with_v2(self, content: &str) -> Self {
        self.write(CGROUP_V2_MEMORY_MAX, content);
        self
    }

    /// Write the cgroup v1 quota file
    pub fn with_v1(self, content: &str) -> Self {
        self.write(CGROUP_V1_MEMORY_LIMIT, content);
        self
    }

    /// Write raw bytes to the cgroup v2 quota file
    pub fn with_v2_bytes(self, content: &[u8]) -> Self {
        self.write(CGROUP_V2_MEMORY_MAX, content);
        self
    }

    /// Write a file relative to the mount root, creating parent directories
    pub fn write(&self, relative: &str, content: impl AsRef<[u8]>) {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create cgroup dir");
        }
        fs::write(path, content).expect("Failed to write cgroup file");
    }

    /// Create a directory where a quota file is expected
    pub fn with_dir_at(self, relative: &str) -> Self {
        fs::create_dir_all(self.dir.path().join(relative)).expect("Failed to create dir");
        self
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn fs(&self) -> CgroupFs {
        CgroupFs::new(self.root())
    }
}
