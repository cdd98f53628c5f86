//! Memory manager configuration at process startup.
//!
//! [`init`] runs once, resolves the cgroup quota and installs the derived
//! soft limit on the process-wide [`SoftLimit`]. The effective limit stays
//! readable through [`effective_limit`] for the rest of the process.
//!
//! ```rust,ignore
//! let config = cgroup_memlimit::Config::from_env()?;
//! let configured = cgroup_memlimit::runtime::init(&config)?;
//! configured.log_summary();
//! ```

mod configurator;
mod manager;

pub use configurator::{configure, configured, effective_limit, format_bytes, init, Configured};
pub use manager::{MemoryManager, SoftLimit, UNLIMITED};
