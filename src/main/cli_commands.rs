// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::io::{self, Write};

use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};

use wayfarer::chat::display::{format_history, format_status, format_submit_error};
use wayfarer::chat::input_parser::{help_text, parse_input, ChatInput};
use wayfarer::chat::{ExampleQuery, TripPlanner};
use wayfarer::cli::AskArgs;
use wayfarer::client::ChatBackend;
use wayfarer::error::{Result, WayfarerError};
use wayfarer::storage::SessionStorage;

/// Run the interactive planning loop
pub(super) async fn run_chat<B: ChatBackend, S: SessionStorage>(
    backend: B,
    storage: S,
    session_id: &str,
) -> Result<()> {
    let mut planner = TripPlanner::new(backend, storage);
    planner.start();

    print_welcome(session_id, planner.history().len())?;

    loop {
        let input = match read_user_input()? {
            Some(input) => input,
            None => break,
        };

        match parse_input(&input) {
            ChatInput::Empty => continue,
            ChatInput::Exit => break,
            ChatInput::Help => println!("{}\n", help_text()),
            ChatInput::History => print_history(&planner),
            ChatInput::ClearHistory => {
                planner.clear_history();
                println!("History cleared.\n");
            }
            ChatInput::Status => match planner.status().await {
                Ok(status) => println!("{}", format_status(&status)),
                Err(e) => print_error(&format_submit_error(&e))?,
            },
            ChatInput::Example(name) => match planner.select_example(&name) {
                Some("") => println!("Type your own travel query.\n"),
                Some(query) => {
                    println!("{}\n", query);
                    submit_and_print(&mut planner, query).await?;
                }
                None => print_error(&format!(
                    "Unknown example '{}'. Try: {}",
                    name,
                    example_names()
                ))?,
            },
            ChatInput::UnknownCommand(name) => {
                print_error(&format!("Unknown command '/{}'. Type /help.", name))?
            }
            ChatInput::Query(query) => submit_and_print(&mut planner, &query).await?,
        }
    }

    Ok(())
}

/// Ask a single question and print the plan
pub(super) async fn run_ask<B: ChatBackend, S: SessionStorage>(
    args: AskArgs,
    backend: B,
    storage: S,
) -> Result<()> {
    let mut planner = TripPlanner::new(backend, storage);
    planner.start();

    let query = match &args.example {
        Some(name) => match planner.select_example(name) {
            Some(query) if !query.is_empty() => query.to_string(),
            _ => {
                return Err(WayfarerError::InvalidInput(format!(
                    "Unknown example '{}'. Try: {}",
                    name,
                    example_names()
                )))
            }
        },
        None => args.query_text(),
    };

    set_loading_state(true)?;
    let result = planner.submit(&query).await;
    set_loading_state(false)?;

    match result {
        Ok(response) => {
            println!("{}", response);
            Ok(())
        }
        Err(e) => {
            tracing::debug!(error = %e, "Submission failed");
            print_error(&format_submit_error(&e))?;
            std::process::exit(1);
        }
    }
}

/// Print this session's history
pub(super) fn run_history<B: ChatBackend, S: SessionStorage>(backend: B, storage: S) {
    let mut planner = TripPlanner::new(backend, storage);
    planner.start();
    print_history(&planner);
}

/// Clear this session's history
pub(super) fn run_clear<B: ChatBackend, S: SessionStorage>(backend: B, storage: S) {
    let mut planner = TripPlanner::new(backend, storage);
    planner.clear_history();
    println!("History cleared.");
}

/// Print backend API key status
pub(super) async fn run_status<B: ChatBackend>(backend: B) -> Result<()> {
    let status = backend.status().await?;
    println!("\nBackend API keys:\n{}", format_status(&status));
    Ok(())
}

/// List the built-in example queries
pub(super) fn run_examples() {
    for example in ExampleQuery::ALL {
        println!("[{}]", example.name());
        println!("{}\n", example.text());
    }
}

fn example_names() -> String {
    ExampleQuery::ALL
        .iter()
        .map(|e| e.name())
        .collect::<Vec<_>>()
        .join(", ")
}

async fn submit_and_print<B: ChatBackend, S: SessionStorage>(
    planner: &mut TripPlanner<B, S>,
    query: &str,
) -> Result<()> {
    set_loading_state(true)?;
    let result = planner.submit(query).await;
    set_loading_state(false)?;

    match result {
        Ok(response) => {
            print_response_prefix()?;
            println!("{}\n", response);
        }
        Err(e) => {
            tracing::debug!(error = %e, "Submission failed");
            print_error(&format_submit_error(&e))?;
        }
    }
    Ok(())
}

fn print_history<B: ChatBackend, S: SessionStorage>(planner: &TripPlanner<B, S>) {
    let rendered = format_history(planner.history());
    if rendered.is_empty() {
        println!("\nNo chat history in this session.\n");
    } else {
        println!("\nChat history:\n\n{}", rendered);
    }
}

fn print_welcome(session_id: &str, history_len: usize) -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(SetForegroundColor(Color::Cyan))?;
    println!("wayfarer v{}", env!("CARGO_PKG_VERSION"));
    stdout.execute(ResetColor)?;
    println!("AI travel planning assistant for your terminal");
    println!("Session: {}", session_id);
    if history_len > 0 {
        println!("{} previous exchange(s) in history. Type /history to see them.", history_len);
    }
    println!("Type /help for commands.\n");
    Ok(())
}

/// Returns `None` at end of input
fn read_user_input() -> Result<Option<String>> {
    let mut stdout = io::stdout();
    stdout.execute(SetForegroundColor(Color::Green))?;
    print!("you: ");
    stdout.execute(ResetColor)?;
    stdout.flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn set_loading_state(loading: bool) -> Result<()> {
    let mut stderr = io::stderr();
    if loading {
        stderr.execute(SetForegroundColor(Color::DarkGrey))?;
        eprint!("Planning...");
        stderr.execute(ResetColor)?;
    } else {
        // Erase the indicator line
        eprint!("\r\x1b[2K");
    }
    stderr.flush()?;
    Ok(())
}

fn print_response_prefix() -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(SetForegroundColor(Color::Cyan))?;
    print!("\nwayfarer: ");
    stdout.execute(ResetColor)?;
    stdout.flush()?;
    Ok(())
}

fn print_error(message: &str) -> Result<()> {
    let mut stderr = io::stderr();
    stderr.execute(SetForegroundColor(Color::Red))?;
    eprintln!("Error: {}\n", message);
    stderr.execute(ResetColor)?;
    Ok(())
}
