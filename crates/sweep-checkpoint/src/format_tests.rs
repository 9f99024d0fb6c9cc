// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

use super::*;
use sweep_core::RunStatus;

fn sample_entries() -> Vec<RunEntry> {
    vec![
        RunEntry {
            path: PathBuf::from("/sweeps/runs/run_a"),
            status: RunStatus::Complete,
        },
        RunEntry {
            path: PathBuf::from("/sweeps/runs/run_b"),
            status: RunStatus::Pending,
        },
    ]
}

#[test]
fn render_then_parse_round_trips() {
    let manifest_path = Path::new("/sweeps/vspace.in");
    let entries = sample_entries();

    let text = render(manifest_path, &entries);
    let (parsed_manifest, parsed_entries) = parse(&text, Path::new(".sweep")).unwrap();

    assert_eq!(parsed_manifest, manifest_path);
    assert_eq!(parsed_entries, entries);
}

#[test]
fn render_contains_sentinel_and_total() {
    let text = render(Path::new("/m"), &sample_entries());
    assert!(text.starts_with("Vspace File: /m\n"));
    assert!(text.contains("Total Number of Simulations: 2\n"));
    assert!(text.ends_with("THE END\n"));
}

#[test]
fn unknown_status_token_parses_as_pending() {
    let text = "Vspace File: /m\nTotal Number of Simulations: 1\n/r garbage\nTHE END\n";
    let (_, entries) = parse(text, Path::new(".sweep")).unwrap();
    assert_eq!(entries[0].status, RunStatus::Pending);
}

#[test]
fn duplicate_run_dir_keeps_first_occurrence() {
    let text = "Vspace File: /m\nTotal Number of Simulations: 2\n/r 1\n/r -1\nTHE END\n";
    let (_, entries) = parse(text, Path::new(".sweep")).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].status, RunStatus::Complete);
}

#[test]
fn missing_sentinel_is_malformed() {
    let text = "Vspace File: /m\nTotal Number of Simulations: 1\n/r -1\n";
    let err = parse(text, Path::new(".sweep")).unwrap_err();
    assert!(matches!(err, CheckpointError::Malformed { .. }));
}

#[test]
fn missing_header_is_malformed() {
    let text = "garbage\nTotal Number of Simulations: 1\nTHE END\n";
    let err = parse(text, Path::new(".sweep")).unwrap_err();
    assert!(matches!(err, CheckpointError::Malformed { .. }));
}
