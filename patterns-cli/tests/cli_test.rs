//! Integration tests for command dispatch through [`patterns_cli::run`].
//!
//! Each subcommand is parsed from argv and run against a recording notifier, so the assertions
//! see exactly which demos ran and in what order.

use std::sync::Arc;

use clap::Parser;
use handler_chain::UnhandledPolicy;
use patterns_cli::{run, Cli, Commands, DemoConfig};
use patterns_core::RecordingNotifier;
use serial_test::serial;

const MEMENTO_MESSAGES: [&str; 4] = [
    "Hello World",
    "Memento is set",
    "Whoops, we need to go back to Hello World.",
    "Hello World",
];

fn run_args(args: &[&str]) -> Vec<String> {
    std::env::remove_var("UNHANDLED_POLICY");
    std::env::remove_var("LOG_FILE");
    let cli = Cli::try_parse_from(args).unwrap();
    let config = DemoConfig::load(cli.policy).unwrap();
    let notifier = Arc::new(RecordingNotifier::new());
    run(&cli.command, &config, notifier.clone()).unwrap();
    notifier.messages()
}

/// **Test: `chain` runs only the chain demo.**
///
/// **Setup:** Parse `patterns chain`.
/// **Action:** `run` with a recording notifier.
/// **Expected:** Manager then Director notifications; no memento output.
#[test]
#[serial]
fn test_run_chain_command() {
    let messages = run_args(&["patterns", "chain"]);

    assert_eq!(messages.len(), 2);
    assert!(messages[0].starts_with("Manager::handleInput "));
    assert!(messages[1].starts_with("Director::handleInput "));
}

/// **Test: `memento` runs only the memento demo.**
#[test]
#[serial]
fn test_run_memento_command() {
    let messages = run_args(&["patterns", "memento"]);

    assert_eq!(messages, MEMENTO_MESSAGES);
}

/// **Test: `all` runs both demos against one notifier, chain first.**
///
/// **Setup:** Parse `patterns all --policy error`.
/// **Action:** `run` with a recording notifier.
/// **Expected:** Two chain notifications followed by the four memento notifications.
#[test]
#[serial]
fn test_run_all_command_chain_then_memento() {
    let cli = Cli::try_parse_from(["patterns", "all", "--policy", "error"]).unwrap();
    assert_eq!(cli.command, Commands::All);
    assert_eq!(cli.policy, Some(UnhandledPolicy::Error));

    let messages = run_args(&["patterns", "all", "--policy", "error"]);

    assert_eq!(messages.len(), 6);
    assert!(messages[0].starts_with("Manager::handleInput "));
    assert!(messages[1].starts_with("Director::handleInput "));
    assert_eq!(messages[2..], MEMENTO_MESSAGES);
}
