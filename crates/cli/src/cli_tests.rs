#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use clap::error::ErrorKind;

#[test]
fn test_parses_positional_arguments() {
    let cli = Cli::try_parse_from(["countless", "talents.json", "reference"]).unwrap();
    assert_eq!(cli.talents, PathBuf::from("talents.json"));
    assert_eq!(cli.engine, "reference");
    assert!(!cli.verbose);
}

#[test]
fn test_verbose_flag() {
    let cli =
        Cli::try_parse_from(["countless", "talents.json", "reference", "--verbose"]).unwrap();
    assert!(cli.verbose);
}

#[test]
fn test_missing_engine_is_an_error() {
    let err = Cli::try_parse_from(["countless", "talents.json"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_missing_all_arguments_is_an_error() {
    assert!(Cli::try_parse_from(["countless"]).is_err());
}

#[test]
fn test_unknown_flag_is_an_error() {
    let err =
        Cli::try_parse_from(["countless", "talents.json", "reference", "--fast"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}
