// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

use super::*;
use std::fs;

#[tokio::test]
async fn counts_reflects_mixed_states() {
    let tmp = tempfile::tempdir().unwrap();
    let ckpt_path = tmp.path().join(".runs");
    let text = "Vspace File: /m\nTotal Number of Simulations: 3\n/r/a 1\n/r/b 0\n/r/c -1\nTHE END\n";
    fs::write(&ckpt_path, text).unwrap();

    let (done, in_progress, pending) = counts(&ckpt_path).await.unwrap();
    assert_eq!((done, in_progress, pending), (1, 1, 1));
}

#[tokio::test]
async fn counts_on_missing_file_is_a_read_error() {
    let tmp = tempfile::tempdir().unwrap();
    let err = counts(&tmp.path().join(".missing")).await.unwrap_err();
    assert!(matches!(err, CheckpointError::Read { .. }));
}
