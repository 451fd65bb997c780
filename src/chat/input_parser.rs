// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Input parsing for the interactive planner
//!
//! Pure functions that classify a line typed at the prompt.

/// What a line of user input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatInput {
    /// Nothing typed
    Empty,
    /// Leave the session
    Exit,
    /// Show available commands
    Help,
    /// Show chat history
    History,
    /// Clear chat history
    ClearHistory,
    /// Show backend API key status
    Status,
    /// Submit an example query (`/example <name>`)
    Example(String),
    /// A slash command we don't know
    UnknownCommand(String),
    /// A travel query to send
    Query(String),
}

/// Classify a line of input
pub fn parse_input(input: &str) -> ChatInput {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ChatInput::Empty;
    }

    let lower = trimmed.to_lowercase();
    if matches!(lower.as_str(), "exit" | "quit") {
        return ChatInput::Exit;
    }

    let Some(command) = trimmed.strip_prefix('/') else {
        return ChatInput::Query(trimmed.to_string());
    };

    let mut parts = command.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default().to_lowercase();
    let arg = parts.next().map(str::trim).unwrap_or_default();

    match name.as_str() {
        "exit" | "quit" => ChatInput::Exit,
        "help" => ChatInput::Help,
        "history" => ChatInput::History,
        "clear" => ChatInput::ClearHistory,
        "status" => ChatInput::Status,
        "example" => ChatInput::Example(arg.to_string()),
        _ => ChatInput::UnknownCommand(name),
    }
}

/// Help text for the interactive planner
pub fn help_text() -> &'static str {
    "Commands:
  /example <name>  Submit an example query (beach, international)
  /history         Show this session's chat history
  /clear           Clear this session's chat history
  /status          Show which backend API keys are configured
  /help            Show this help
  /quit            Leave (also: exit, quit)
Anything else is sent to the travel agent."
}
