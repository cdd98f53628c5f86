//! Process-wide initialization.
//!
//! `init` may succeed only once per process, so everything touching the
//! global state lives in a single test.

use crate::helpers::*;
use cgroup_memlimit::config::{CgroupConfig, Config};
use cgroup_memlimit::runtime::{self, MemoryManager};
use cgroup_memlimit::{Error, SoftLimit};

#[test]
fn test_init_once() {
    assert!(runtime::configured().is_none());
    assert!(runtime::effective_limit().is_none());

    let cgroup = TestCgroup::new().with_v2("1000\n");
    let config = Config {
        cgroup: CgroupConfig {
            root: cgroup.root().to_path_buf(),
            ..Default::default()
        },
        ..Default::default()
    };

    let configured = runtime::init(&config).expect("init should succeed");
    assert_eq!(configured.effective_limit, 900);
    assert_eq!(runtime::effective_limit(), Some(900));
    assert_eq!(SoftLimit::global().soft_limit(), 900);

    // Never re-entered, even with a different quota.
    let other = TestCgroup::new().with_v2("5000\n");
    let config = Config {
        cgroup: CgroupConfig {
            root: other.root().to_path_buf(),
            ..Default::default()
        },
        ..Default::default()
    };

    match runtime::init(&config) {
        Err(Error::AlreadyConfigured { effective_limit }) => assert_eq!(effective_limit, 900),
        other => panic!("expected AlreadyConfigured, got {:?}", other.map(|c| *c)),
    }
    assert_eq!(runtime::effective_limit(), Some(900));
    assert_eq!(SoftLimit::global().get(), 900);
}
