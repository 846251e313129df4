//! CLI tests

use clap::{CommandFactory, Parser};

use crate::render::OutputFormat;
use crate::{Cli, Commands, ConfigAction};

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_no_subcommand_defaults_to_interactive() {
    let cli = Cli::try_parse_from(["taskdesk"]).unwrap();
    assert!(cli.command.is_none());
    assert_eq!(cli.format, OutputFormat::Text);
    assert!(!cli.quiet);
}

#[test]
fn test_global_flags() {
    let cli = Cli::try_parse_from(["taskdesk", "interactive", "--format", "json", "-q"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Interactive)));
    assert_eq!(cli.format, OutputFormat::Json);
    assert!(cli.quiet);
}

#[test]
fn test_config_set_parsing() {
    let cli =
        Cli::try_parse_from(["taskdesk", "config", "set", "logging.level", "debug"]).unwrap();
    match cli.command {
        Some(Commands::Config {
            action: ConfigAction::Set { key, value },
        }) => {
            assert_eq!(key, "logging.level");
            assert_eq!(value, "debug");
        }
        _ => panic!("expected config set"),
    }
}

#[test]
fn test_unknown_format_rejected() {
    assert!(Cli::try_parse_from(["taskdesk", "--format", "xml"]).is_err());
}
