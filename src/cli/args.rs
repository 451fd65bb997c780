// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for Wayfarer.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Wayfarer - AI travel planning assistant for your terminal
#[derive(Parser, Debug)]
#[command(name = "wayfarer")]
#[command(version, about = "AI travel planning assistant for your terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Session id; invocations sharing an id share chat history
    #[arg(short, long, global = true)]
    pub session: Option<String>,

    /// Travel agent backend base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start interactive planning session (default when no command given)
    Chat(ChatArgs),

    /// Ask a single travel question (non-interactive)
    Ask(AskArgs),

    /// Show this session's chat history
    History,

    /// Clear this session's chat history
    Clear,

    /// Show which backend API keys are configured
    Status,

    /// List the built-in example queries
    Examples,
}

impl Commands {
    /// Whether the command reads or writes the session's chat history.
    ///
    /// `Status` and `Examples` never touch session storage, so they run
    /// without creating directories or validating the session id.
    pub fn uses_history(&self) -> bool {
        !matches!(self, Commands::Status | Commands::Examples)
    }

    /// Whether history should stay in memory for this invocation
    pub fn is_ephemeral(&self) -> bool {
        matches!(self, Commands::Chat(ChatArgs { ephemeral: true }))
    }
}

/// Arguments for the chat subcommand
#[derive(clap::Args, Debug, Default)]
pub struct ChatArgs {
    /// Keep history in memory only; nothing is written to disk
    #[arg(long)]
    pub ephemeral: bool,
}

/// Arguments for the ask subcommand
#[derive(clap::Args, Debug)]
pub struct AskArgs {
    /// The travel query
    #[arg(required_unless_present = "example", conflicts_with = "example")]
    pub query: Vec<String>,

    /// Use a built-in example query (beach, international)
    #[arg(short, long)]
    pub example: Option<String>,
}

impl AskArgs {
    /// Query words joined back into one string
    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }
}
