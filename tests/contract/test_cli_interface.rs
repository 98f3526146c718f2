use clap::Parser;
use opamp::cli::{Cli, DumpFormat};
use opamp::OpampError;
use std::path::PathBuf;

#[test]
fn test_no_arguments_means_interactive() {
    let cli = Cli::try_parse_from(["opamp"]).unwrap();

    assert!(cli.is_interactive());
    assert_eq!(cli.model, "gpt-4o");
    assert_eq!(cli.timeout, 60);
    assert!(cli.validate().is_ok());
}

#[test]
fn test_full_batch_invocation() {
    let cli = Cli::try_parse_from([
        "opamp",
        "-m",
        "gemini-1.5-pro",
        "-t",
        "90",
        "--topic",
        "education reform",
        "--positive",
        "Smaller classes help students",
        "--negative",
        "Smaller classes cost too much",
        "-s",
        "Policy Recommendation",
        "-o",
        "out.txt",
    ])
    .unwrap();

    assert!(!cli.is_interactive());
    assert!(cli.validate().is_ok());
    assert_eq!(cli.model, "gemini-1.5-pro");
    assert_eq!(cli.timeout, 90);
    assert_eq!(cli.topic.as_deref(), Some("education reform"));
    assert_eq!(cli.styles, vec!["Policy Recommendation".to_string()]);
    assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
    assert_eq!(cli.format, DumpFormat::Text);
}

#[test]
fn test_timeout_bounds() {
    assert!(Cli::try_parse_from(["opamp", "--timeout", "9"]).is_err());
    assert!(Cli::try_parse_from(["opamp", "--timeout", "301"]).is_err());
    assert!(Cli::try_parse_from(["opamp", "--timeout", "abc"]).is_err());
    assert_eq!(Cli::try_parse_from(["opamp", "--timeout", "10"]).unwrap().timeout, 10);
    assert_eq!(Cli::try_parse_from(["opamp", "--timeout", "300"]).unwrap().timeout, 300);
}

#[test]
fn test_inputs_must_be_given_together() {
    let cli = Cli::try_parse_from(["opamp", "--negative", "No"]).unwrap();
    assert!(matches!(cli.validate(), Err(OpampError::InvalidArguments(_))));

    let cli = Cli::try_parse_from(["opamp", "--topic", "t", "--positive", "p", "--negative", "n"])
        .unwrap();
    assert!(cli.validate().is_ok());
}

#[test]
fn test_output_requires_batch_inputs() {
    let cli = Cli::try_parse_from(["opamp", "--output", "results.txt"]).unwrap();
    let err = cli.validate().unwrap_err();

    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_blank_model_rejected() {
    let cli = Cli::try_parse_from(["opamp", "--model", "  "]).unwrap();
    assert!(matches!(cli.validate(), Err(OpampError::InvalidArguments(_))));
}

#[test]
fn test_logging_flags_map_to_filters() {
    assert_eq!(Cli::try_parse_from(["opamp"]).unwrap().log_filter(), "warn");
    assert_eq!(Cli::try_parse_from(["opamp", "--verbose"]).unwrap().log_filter(), "info");
    assert_eq!(Cli::try_parse_from(["opamp", "-d"]).unwrap().log_filter(), "debug");
    assert_eq!(Cli::try_parse_from(["opamp", "-v", "-d"]).unwrap().log_filter(), "debug");
}

#[test]
fn test_json_format_flag() {
    let cli = Cli::try_parse_from(["opamp", "--format", "json"]).unwrap();
    assert_eq!(cli.format, DumpFormat::Json);
}

#[test]
fn test_unknown_flag_rejected() {
    assert!(Cli::try_parse_from(["opamp", "--lang", "python"]).is_err());
}

#[test]
fn test_explicit_timeout_wins_over_environment_default() {
    let cli = Cli::try_parse_from(["opamp", "--timeout", "120"]).unwrap();
    assert_eq!(cli.timeout_with_override(Some("30")), 120);

    let cli = Cli::try_parse_from(["opamp"]).unwrap();
    assert_eq!(cli.timeout_with_override(Some("30")), 30);
}
