// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

use super::*;
use std::os::unix::fs::PermissionsExt;

/// Writes a tiny shell script as the "simulator" binary so tests don't
/// depend on any real simulation tool being installed.
fn write_fake_binary(dir: &std::path::Path, name: &str, script: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, script).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

#[tokio::test]
async fn success_exit_classifies_as_success_and_appends_log() {
    let tmp = tempfile::tempdir().unwrap();
    let run_dir = tmp.path().join("run_a");
    std::fs::create_dir(&run_dir).unwrap();
    std::fs::write(run_dir.join(INPUT_FILE_NAME), "").unwrap();

    let bin_dir = tmp.path().join("bin");
    std::fs::create_dir(&bin_dir).unwrap();
    let bin = write_fake_binary(
        &bin_dir,
        "fakesim",
        "#!/bin/sh\necho out-line\necho err-line 1>&2\nexit 0\n",
    );

    let runner = Runner::new(bin.to_string_lossy().to_string());
    let class = runner.execute(&run_dir).await;

    assert_eq!(class, ExitClass::Success);
    let log = std::fs::read_to_string(run_dir.join(LOG_FILE_NAME)).unwrap();
    assert!(log.contains("err-line"));
    assert!(log.contains("out-line"));
    // stderr is appended before stdout (§4.3 step 3).
    assert!(log.find("err-line").unwrap() < log.find("out-line").unwrap());
}

#[tokio::test]
async fn nonzero_exit_classifies_as_failure() {
    let tmp = tempfile::tempdir().unwrap();
    let run_dir = tmp.path().join("run_a");
    std::fs::create_dir(&run_dir).unwrap();

    let bin_dir = tmp.path().join("bin");
    std::fs::create_dir(&bin_dir).unwrap();
    let bin = write_fake_binary(&bin_dir, "fakesim", "#!/bin/sh\nexit 1\n");

    let runner = Runner::new(bin.to_string_lossy().to_string());
    let class = runner.execute(&run_dir).await;

    assert_eq!(class, ExitClass::Failure);
}

#[tokio::test]
async fn missing_binary_classifies_as_failure_without_panicking() {
    let tmp = tempfile::tempdir().unwrap();
    let run_dir = tmp.path().join("run_a");
    std::fs::create_dir(&run_dir).unwrap();

    let runner = Runner::new("/no/such/simulator/binary".to_string());
    let class = runner.execute(&run_dir).await;

    assert_eq!(class, ExitClass::Failure);
}

#[tokio::test]
async fn large_output_is_drained_before_classification() {
    let tmp = tempfile::tempdir().unwrap();
    let run_dir = tmp.path().join("run_a");
    std::fs::create_dir(&run_dir).unwrap();

    let bin_dir = tmp.path().join("bin");
    std::fs::create_dir(&bin_dir).unwrap();
    // Enough output on both pipes to deadlock a naive sequential drain once
    // the OS pipe buffer (commonly 64KiB) fills.
    let bin = write_fake_binary(
        &bin_dir,
        "fakesim",
        "#!/bin/sh\nyes out | head -c 200000\nyes err 1>&2 | head -c 200000\nexit 0\n",
    );

    let runner = Runner::new(bin.to_string_lossy().to_string());
    let class = tokio::time::timeout(std::time::Duration::from_secs(10), runner.execute(&run_dir))
        .await
        .expect("runner must not hang on large output");

    assert_eq!(class, ExitClass::Success);
}
