use clap::Parser;
use ont_cli::args::CliArgs;
use std::path::PathBuf;

#[test]
fn test_defaults() {
    let args = CliArgs::try_parse_from(["ont-cli"]).unwrap();
    assert_eq!(args.mode, None);
    assert!(!args.deploy);
    assert!(!args.list);
    assert_eq!(args.config, PathBuf::from("ontology.json"));
    assert_eq!(args.working_directory(), PathBuf::from("."));
    assert_eq!(args.migrations_dir(), PathBuf::from("./migrations"));
}

#[test]
fn test_mode_and_deploy() {
    let args = CliArgs::try_parse_from(["ont-cli", "-m", "testnet", "--deploy"]).unwrap();
    assert_eq!(args.mode.as_deref(), Some("testnet"));
    assert!(args.deploy);

    let args = CliArgs::try_parse_from(["ont-cli", "--mode", "local"]).unwrap();
    assert_eq!(args.mode.as_deref(), Some("local"));
    assert!(!args.deploy);
}

#[test]
fn test_paths_resolve_against_config_directory() {
    let args = CliArgs::try_parse_from([
        "ont-cli",
        "--config",
        "project/ontology.json",
        "--migrations",
        "scripts",
    ])
    .unwrap();
    assert_eq!(args.working_directory(), PathBuf::from("project"));
    assert_eq!(args.migrations_dir(), PathBuf::from("project/scripts"));
}

#[test]
fn test_rejects_unknown_flags() {
    assert!(CliArgs::try_parse_from(["ont-cli", "--network", "mainnet"]).is_err());
}
