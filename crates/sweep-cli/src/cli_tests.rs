// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Sweep Contributors

use super::*;
use clap::Parser;

#[test]
fn default_invocation_parses_as_run() {
    let cli = Cli::try_parse_from(["sweep", "vspace.in", "--cores", "4", "--bp"]).unwrap();
    match cli.dispatch() {
        CommandKind::Run(args) => {
            assert_eq!(args.manifest, PathBuf::from("vspace.in"));
            assert_eq!(args.cores, Some(4));
            assert!(args.bigplanet);
            assert!(!args.force);
            assert!(!args.dry_run);
            assert_eq!(args.simulator_binary, "vplanet");
        }
        CommandKind::Status(_) => panic!("expected Run"),
    }
}

#[test]
fn status_subcommand_parses_its_own_manifest() {
    let cli = Cli::try_parse_from(["sweep", "status", "vspace.in"]).unwrap();
    match cli.dispatch() {
        CommandKind::Status(args) => assert_eq!(args.manifest, PathBuf::from("vspace.in")),
        CommandKind::Run(_) => panic!("expected Status"),
    }
}

#[test]
fn quiet_and_verbose_select_verbosity() {
    let quiet = Cli::try_parse_from(["sweep", "vspace.in", "-q"]).unwrap();
    assert_eq!(quiet.verbosity(), Verbosity::Quiet);

    let verbose = Cli::try_parse_from(["sweep", "vspace.in", "-v"]).unwrap();
    assert_eq!(verbose.verbosity(), Verbosity::Verbose);

    let plain = Cli::try_parse_from(["sweep", "vspace.in"]).unwrap();
    assert_eq!(plain.verbosity(), Verbosity::Normal);
}

#[test]
fn status_invocation_is_always_quiet() {
    let cli = Cli::try_parse_from(["sweep", "status", "vspace.in"]).unwrap();
    assert_eq!(cli.verbosity(), Verbosity::Quiet);
}

#[test]
fn missing_manifest_is_a_parse_error() {
    assert!(Cli::try_parse_from(["sweep"]).is_err());
}

#[test]
fn simulator_binary_defaults_to_vplanet() {
    let cli = Cli::try_parse_from(["sweep", "vspace.in"]).unwrap();
    match cli.dispatch() {
        CommandKind::Run(args) => assert_eq!(args.simulator_binary, "vplanet"),
        CommandKind::Status(_) => panic!("expected Run"),
    }
}
