//! Integration tests for cgroup_memlimit
//!
//! These tests build cgroup-like directory trees in temporary directories
//! and resolve limits against them through the real filesystem.

mod helpers;

mod init;
mod resolver;
