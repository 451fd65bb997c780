// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use clap::Parser;
use wayfarer::cli::{Cli, Commands};

#[test]
fn test_parse_no_command_defaults_to_chat() {
    let cli = Cli::try_parse_from(["wayfarer"]).expect("Valid command parsing");
    assert!(cli.command.is_none());
}

#[test]
fn test_parse_chat_ephemeral() {
    let cli = Cli::try_parse_from(["wayfarer", "chat", "--ephemeral"]).expect("Valid command parsing");
    if let Some(Commands::Chat(args)) = cli.command {
        assert!(args.ephemeral);
    } else {
        panic!("Expected Chat command");
    }
}

#[test]
fn test_parse_ask_joins_words() {
    let cli = Cli::try_parse_from(["wayfarer", "ask", "4", "days", "in", "Bangkok"])
        .expect("Valid command parsing");
    if let Some(Commands::Ask(args)) = cli.command {
        assert_eq!(args.query_text(), "4 days in Bangkok");
        assert!(args.example.is_none());
    } else {
        panic!("Expected Ask command");
    }
}

#[test]
fn test_parse_ask_example() {
    let cli = Cli::try_parse_from(["wayfarer", "ask", "--example", "beach"])
        .expect("Valid command parsing");
    if let Some(Commands::Ask(args)) = cli.command {
        assert_eq!(args.example.as_deref(), Some("beach"));
        assert!(args.query.is_empty());
    } else {
        panic!("Expected Ask command");
    }
}

#[test]
fn test_parse_ask_requires_query_or_example() {
    assert!(Cli::try_parse_from(["wayfarer", "ask"]).is_err());
}

#[test]
fn test_parse_ask_query_conflicts_with_example() {
    assert!(Cli::try_parse_from(["wayfarer", "ask", "Goa", "--example", "beach"]).is_err());
}

#[test]
fn test_parse_history_clear_status_examples() {
    let history = Cli::try_parse_from(["wayfarer", "history"]).unwrap();
    assert!(matches!(history.command, Some(Commands::History)));

    let clear = Cli::try_parse_from(["wayfarer", "clear"]).unwrap();
    assert!(matches!(clear.command, Some(Commands::Clear)));

    let status = Cli::try_parse_from(["wayfarer", "status"]).unwrap();
    assert!(matches!(status.command, Some(Commands::Status)));

    let examples = Cli::try_parse_from(["wayfarer", "examples"]).unwrap();
    assert!(matches!(examples.command, Some(Commands::Examples)));
}

#[test]
fn test_parse_global_flags() {
    let cli = Cli::try_parse_from([
        "wayfarer",
        "history",
        "--session",
        "goa-trip",
        "--base-url",
        "http://trips.local:5000",
        "-vv",
    ])
    .expect("Valid command parsing");

    assert_eq!(cli.session.as_deref(), Some("goa-trip"));
    assert_eq!(cli.base_url.as_deref(), Some("http://trips.local:5000"));
    assert_eq!(cli.verbose, 2);
}

#[test]
fn test_status_and_examples_skip_session_storage() {
    // An invalid session id must not matter to commands that never open storage
    for args in [
        ["wayfarer", "--session", "../bad", "status"],
        ["wayfarer", "--session", "../bad", "examples"],
    ] {
        let cli = Cli::try_parse_from(args).expect("Valid command parsing");
        let command = cli.command.expect("Command present");
        assert!(!command.uses_history(), "{:?} should not use history", command);
    }
}

#[test]
fn test_history_commands_use_session_storage() {
    for args in [
        vec!["wayfarer", "chat"],
        vec!["wayfarer", "ask", "Goa"],
        vec!["wayfarer", "history"],
        vec!["wayfarer", "clear"],
    ] {
        let cli = Cli::try_parse_from(args).expect("Valid command parsing");
        let command = cli.command.expect("Command present");
        assert!(command.uses_history(), "{:?} should use history", command);
        assert!(!command.is_ephemeral());
    }
}

#[test]
fn test_only_ephemeral_chat_is_ephemeral() {
    let cli = Cli::try_parse_from(["wayfarer", "chat", "--ephemeral"]).expect("Valid command parsing");
    assert!(cli.command.expect("Command present").is_ephemeral());
}
