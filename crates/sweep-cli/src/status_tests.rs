// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

use super::*;
use crate::cli::StatusArgs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

static CWD_LOCK: tokio::sync::Mutex<()> = tokio::sync::Mutex::const_new(());

fn seed_sweep(tmp: &std::path::Path) -> PathBuf {
    let sweep_dir = tmp.join("Sweep");
    std::fs::create_dir(&sweep_dir).unwrap();
    let run_dir = sweep_dir.join("r0");
    std::fs::create_dir(&run_dir).unwrap();
    std::fs::write(run_dir.join("vpl.in"), "").unwrap();
    std::fs::write(run_dir.join("earth.in"), "sName earth\n").unwrap();

    let manifest_path = tmp.join("vspace.in");
    std::fs::write(&manifest_path, "destfolder Sweep\nfile earth.in\n").unwrap();
    manifest_path
}

fn write_always_succeed(tmp: &std::path::Path) -> String {
    let bin = tmp.join("always_ok");
    std::fs::write(&bin, "#!/bin/sh\nexit 0\n").unwrap();
    let mut perms = std::fs::metadata(&bin).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&bin, perms).unwrap();
    bin.to_string_lossy().into_owned()
}

#[tokio::test]
async fn status_before_any_run_reports_all_pending() {
    let _guard = CWD_LOCK.lock().await;
    let tmp = tempfile::tempdir().unwrap();
    let manifest_path = seed_sweep(tmp.path());

    let before = std::env::current_dir().unwrap();
    std::env::set_current_dir(tmp.path()).unwrap();

    // Initialize the checkpoint the same way `execute(RunArgs{dry_run:true,..})`
    // would, without pulling in sweep-orchestrator as a dev-dependency.
    let (layout, runs) = sweep_manifest::build_layout(&manifest_path, tmp.path()).unwrap();
    let ckpt_path = layout.checkpoint_path(tmp.path());
    sweep_checkpoint::Checkpoint::init_or_restore(ckpt_path, manifest_path.clone(), runs, false)
        .await
        .unwrap();

    let result = execute(StatusArgs { manifest: manifest_path }).await;
    std::env::set_current_dir(before).unwrap();
    result.unwrap();
}

#[tokio::test]
async fn status_after_a_completed_run_reports_done() {
    let _guard = CWD_LOCK.lock().await;
    let tmp = tempfile::tempdir().unwrap();
    let manifest_path = seed_sweep(tmp.path());
    let binary = write_always_succeed(tmp.path());

    let before = std::env::current_dir().unwrap();
    std::env::set_current_dir(tmp.path()).unwrap();

    let config = sweep_orchestrator::OrchestratorConfig {
        manifest_path: manifest_path.clone(),
        cores: 1,
        quiet: true,
        verbose: false,
        bigplanet: false,
        force: false,
        dry_run: false,
        simulator_binary: binary,
        notify_addr: None,
    };
    sweep_orchestrator::run_parallel(
        config,
        std::sync::Arc::new(sweep_archive::LogGatherer),
        std::sync::Arc::new(sweep_archive::TarArchiveSink),
        None,
    )
    .await
    .unwrap();

    let result = execute(StatusArgs { manifest: manifest_path }).await;
    std::env::set_current_dir(before).unwrap();
    result.unwrap();

    let (done, in_progress, pending) =
        sweep_checkpoint::counts(&tmp.path().join(".Sweep")).await.unwrap();
    assert_eq!((done, in_progress, pending), (1, 0, 0));
}
