// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

use super::*;
use std::fs;

#[test]
fn parses_destfolder_and_file_directives() {
    let tmp = tempfile::tempdir().unwrap();
    let cwd = tmp.path();
    fs::create_dir(cwd.join("runs")).unwrap();

    let manifest_path = cwd.join("vspace.in");
    fs::write(
        &manifest_path,
        "destfolder runs\nfile primary.in\nfile secondary.in\nunrelated directive\n",
    )
    .unwrap();

    let info = read_manifest(&manifest_path, cwd).unwrap();
    assert_eq!(info.dest_folder_name, "runs");
    assert_eq!(info.body_file_basenames, vec!["primary.in", "secondary.in"]);
}

#[test]
fn missing_destfolder_directive_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let manifest_path = tmp.path().join("vspace.in");
    fs::write(&manifest_path, "file primary.in\n").unwrap();

    let err = read_manifest(&manifest_path, tmp.path()).unwrap_err();
    assert!(matches!(err, ConfigError::MissingDestFolder { .. }));
}

#[test]
fn nonexistent_dest_folder_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let manifest_path = tmp.path().join("vspace.in");
    fs::write(&manifest_path, "destfolder does-not-exist\n").unwrap();

    let err = read_manifest(&manifest_path, tmp.path()).unwrap_err();
    assert!(matches!(err, ConfigError::DestFolderMissing { .. }));
}

#[test]
fn unreadable_manifest_path_is_an_io_error() {
    let tmp = tempfile::tempdir().unwrap();
    let err = read_manifest(&tmp.path().join("missing.in"), tmp.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
