//! Limit resolution against real directory trees.

use crate::helpers::*;
use cgroup_memlimit::system::{resolve, CgroupVersion, Resolution, NO_LIMIT};
use cgroup_memlimit::Error;

#[test]
fn test_v1_only() {
    let cgroup = TestCgroup::new().with_v1("1000\n");
    assert_eq!(resolve(&cgroup.fs(), None).unwrap().limit(), 900);
}

#[test]
fn test_v2_only() {
    let cgroup = TestCgroup::new().with_v2("1000\n");
    assert_eq!(resolve(&cgroup.fs(), None).unwrap().limit(), 900);
}

#[test]
fn test_no_cgroup() {
    let cgroup = TestCgroup::new();
    let resolution = resolve(&cgroup.fs(), None).unwrap();

    assert_eq!(resolution, Resolution::NoCgroup);
    assert_eq!(resolution.limit(), NO_LIMIT);
}

#[test]
fn test_unbounded() {
    let cgroup = TestCgroup::new().with_v1("max\n");
    assert_eq!(resolve(&cgroup.fs(), None).unwrap().limit(), NO_LIMIT);

    let cgroup = TestCgroup::new().with_v2("max\n");
    assert_eq!(
        resolve(&cgroup.fs(), None).unwrap(),
        Resolution::Unbounded {
            version: CgroupVersion::V2
        }
    );
}

#[test]
fn test_v2_wins_over_v1() {
    let cgroup = TestCgroup::new().with_v1("1000\n").with_v2("2000\n");
    assert_eq!(resolve(&cgroup.fs(), None).unwrap().limit(), 1800);

    let cgroup = TestCgroup::new().with_v1("4000\n").with_v2("2000\n");
    assert_eq!(resolve(&cgroup.fs(), None).unwrap().limit(), 1800);
}

#[test]
fn test_override_disables_detection() {
    let layouts = [
        TestCgroup::new().with_v1("1000\n"),
        TestCgroup::new().with_v2("1000\n"),
        TestCgroup::new(),
        TestCgroup::new().with_v1("max\n"),
        TestCgroup::new().with_v2("max\n"),
        TestCgroup::new().with_v1("1000\n").with_v2("2000\n"),
        TestCgroup::new().with_v2("not a number\n"),
    ];

    for cgroup in &layouts {
        let resolution = resolve(&cgroup.fs(), Some("3000")).unwrap();
        assert_eq!(resolution, Resolution::Overridden);
        assert_eq!(resolution.limit(), NO_LIMIT);
    }
}

#[test]
fn test_kubernetes_style_quota() {
    // 256Mi container limit
    let cgroup = TestCgroup::new().with_v2("268435456\n");
    let resolution = resolve(&cgroup.fs(), None).unwrap();

    assert_eq!(
        resolution,
        Resolution::Limited {
            version: CgroupVersion::V2,
            quota: 268_435_456,
            limit: 241_591_911,
        }
    );
}

#[test]
fn test_unreadable_quota_file() {
    let cgroup = TestCgroup::new()
        .with_dir_at("memory.max")
        .with_v1("1000\n");

    match resolve(&cgroup.fs(), None) {
        Err(Error::Unreadable { path, .. }) => {
            assert_eq!(path, cgroup.root().join("memory.max"));
        }
        other => panic!("expected unreadable error, got {:?}", other),
    }
}

#[test]
fn test_unparsable_quota_file() {
    let cgroup = TestCgroup::new().with_v1("unlimited\n");

    let err = resolve(&cgroup.fs(), None).unwrap_err();
    let msg = err.to_string();

    assert!(matches!(err, Error::Unparsable { .. }));
    assert!(msg.contains("memory.limit_in_bytes"));
    assert!(msg.contains("unlimited"));
}

#[test]
fn test_non_utf8_quota_file() {
    let cgroup = TestCgroup::new().with_v2_bytes(b"\xff\xfe1000\n");

    match resolve(&cgroup.fs(), None) {
        Err(Error::Unparsable { path, value, .. }) => {
            assert_eq!(path, cgroup.root().join("memory.max"));
            assert!(value.ends_with("1000"));
        }
        other => panic!("expected unparsable error, got {:?}", other),
    }
}

#[test]
fn test_repeated_resolution_is_identical() {
    let cgroup = TestCgroup::new().with_v1("1000\n").with_v2("2000\n");
    let fs = cgroup.fs();

    let first = resolve(&fs, None).unwrap();
    let second = resolve(&fs, None).unwrap();
    assert_eq!(first, second);
}
