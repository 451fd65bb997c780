// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Wayfarer - terminal client for an AI travel planning assistant.
//!
//! Architecture highlights:
//! - `history`: bounded, newest-first chat history persisted per session
//! - `storage`: session-scoped key-value storage (memory, per-session file)
//! - `client`: chat backend abstraction and its HTTP implementation
//! - `chat`: command handlers, example queries, input parsing, display
//! - `config`, `cli`: settings and command-line surface

pub mod chat;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod history;
pub mod storage;

pub use error::{Result, WayfarerError};
