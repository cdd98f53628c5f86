//! Cgroup memory quota detection.
//!
//! Reads the memory quota imposed on the current cgroup and derives a soft
//! limit that leaves headroom below it.
//!
//! # Cgroup Support
//!
//! - **cgroup v2**: `memory.max` (checked first)
//! - **cgroup v1**: `memory/memory.limit_in_bytes`
//!
//! # Example
//!
//! ```rust,ignore
//! use cgroup_memlimit::system::{resolve, CgroupFs};
//!
//! let resolution = resolve(&CgroupFs::default(), None)?;
//! println!("soft limit: {}", resolution.limit());
//! ```

mod cgroup;
mod resolver;

pub use cgroup::{
    CgroupFs, CgroupVersion, QuotaSource, CGROUP_MOUNT, CGROUP_V1_MEMORY_LIMIT,
    CGROUP_V2_MEMORY_MAX,
};
pub use resolver::{apply_headroom, resolve, Resolution, HEADROOM_RATIO, NO_LIMIT};
