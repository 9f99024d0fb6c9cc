// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

use super::*;
use std::os::unix::fs::PermissionsExt;

#[tokio::test]
async fn describe_captures_combined_output() {
    let tmp = tempfile::tempdir().unwrap();
    let bin = tmp.path().join("fakesim");
    std::fs::write(&bin, "#!/bin/sh\necho usage: fakesim [options]\nexit 0\n").unwrap();
    let mut perms = std::fs::metadata(&bin).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&bin, perms).unwrap();

    let metadata = describe(&bin.to_string_lossy()).await.unwrap();
    assert!(metadata.as_str().contains("usage: fakesim"));
}

#[tokio::test]
async fn describe_on_missing_binary_is_an_error() {
    let err = describe("/no/such/simulator/binary").await.unwrap_err();
    assert!(matches!(err, SimulationFailure::DescribeSpawn { .. }));
}
