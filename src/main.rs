// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Wayfarer - AI travel planning assistant for your terminal
//!
//! Entry point for the Wayfarer CLI application.

use clap::Parser;

use wayfarer::cli::{ChatArgs, Cli, Commands};
use wayfarer::client::HttpChatClient;
use wayfarer::config::Settings;
use wayfarer::error::Result;
use wayfarer::storage::{FileStorage, MemoryStorage, SessionStorage};

#[path = "main/cli_commands.rs"]
mod cli_commands;

use cli_commands::{run_ask, run_chat, run_clear, run_examples, run_history, run_status};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` turns on our own debug output; `RUST_LOG` still takes precedence.
    if cli.verbose > 0 {
        if let Ok(parsed) = "wayfarer=debug".parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Load settings
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    let base_url = cli.base_url.clone().unwrap_or_else(|| settings.base_url());
    let session_id = cli.session.clone().unwrap_or_else(|| settings.session_id());
    let backend = HttpChatClient::new(base_url, settings.timeout())?;

    let command = cli.command.unwrap_or(Commands::Chat(ChatArgs::default()));
    if !command.uses_history() {
        return match command {
            Commands::Status => run_status(backend).await,
            _ => {
                run_examples();
                Ok(())
            }
        };
    }

    let storage = open_storage(command.is_ephemeral(), &session_id)?;

    // Dispatch to appropriate command
    match command {
        Commands::Chat(_) => run_chat(backend, storage, &session_id).await?,
        Commands::Ask(args) => run_ask(args, backend, storage).await?,
        Commands::History => run_history(backend, storage),
        Commands::Clear => run_clear(backend, storage),
        Commands::Status | Commands::Examples => {}
    }

    Ok(())
}

/// Memory-only storage for ephemeral chats, otherwise this session's file
fn open_storage(ephemeral: bool, session_id: &str) -> Result<Box<dyn SessionStorage>> {
    let storage: Box<dyn SessionStorage> = if ephemeral {
        Box::new(MemoryStorage::new())
    } else {
        Settings::ensure_directories()?;
        Box::new(FileStorage::open(Settings::sessions_dir(), session_id)?)
    };
    tracing::debug!(session = %session_id, ephemeral, "Opened session storage");
    Ok(storage)
}
