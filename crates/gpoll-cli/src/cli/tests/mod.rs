//! CLI parse tests.

use super::commands::load_client;
use super::{Cli, CliCommand};
use clap::Parser;
use gpoll_core::config::PollerConfig;
use std::net::TcpListener;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_no_subcommand_defaults_to_none() {
    let cli = parse(&["gpoll"]);
    assert!(cli.command.is_none());
    assert!(cli.config.is_none());
}

#[test]
fn cli_parse_run() {
    match parse(&["gpoll", "run"]).command {
        Some(CliCommand::Run) => {}
        other => panic!("expected Run, got {:?}", other),
    }
}

#[test]
fn cli_parse_once() {
    match parse(&["gpoll", "once"]).command {
        Some(CliCommand::Once) => {}
        other => panic!("expected Once, got {:?}", other),
    }
}

#[test]
fn cli_parse_config_before_and_after_subcommand() {
    let before = parse(&["gpoll", "--config", "/tmp/g.toml", "run"]);
    assert_eq!(
        before.config.as_deref(),
        Some(std::path::Path::new("/tmp/g.toml"))
    );
    let after = parse(&["gpoll", "once", "--config", "/tmp/g.toml"]);
    assert_eq!(
        after.config.as_deref(),
        Some(std::path::Path::new("/tmp/g.toml"))
    );
    assert!(matches!(after.command, Some(CliCommand::Once)));
}

#[test]
fn cli_parse_completions() {
    match parse(&["gpoll", "completions", "bash"]).command {
        Some(CliCommand::Completions { shell }) => {
            assert_eq!(shell, clap_complete::Shell::Bash)
        }
        other => panic!("expected Completions, got {:?}", other),
    }
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["gpoll", "add", "x"]).is_err());
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}

#[test]
fn missing_token_skips_client_and_sends_nothing() {
    let var = "GPOLL_TEST_TOKEN_CLI_MISSING";
    std::env::remove_var(var);

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let cfg = PollerConfig {
        api_base: format!("http://{}/", listener.local_addr().unwrap()),
        token_env: var.to_string(),
        ..PollerConfig::default()
    };

    assert!(load_client(&cfg).unwrap().is_none());
    let err = listener.accept().unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::WouldBlock);
}

#[test]
fn present_token_builds_client_for_configured_base() {
    let var = "GPOLL_TEST_TOKEN_CLI_PRESENT";
    std::env::set_var(var, "t");
    let cfg = PollerConfig {
        api_base: "http://127.0.0.1:9/".to_string(),
        token_env: var.to_string(),
        ..PollerConfig::default()
    };

    let client = load_client(&cfg).unwrap().unwrap();
    assert!(client.endpoint().as_str().starts_with("http://127.0.0.1:9/"));
    std::env::remove_var(var);
}
