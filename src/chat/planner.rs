// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Trip planner command handlers
//!
//! Each user action (submit, clear, pick an example) maps to one handler
//! that calls exactly one backend or history operation.

use crate::client::{ApiStatus, ChatBackend};
use crate::error::{Result, WayfarerError};
use crate::history::{HistoryEntry, HistoryStore};
use crate::storage::SessionStorage;

use super::examples::ExampleSelection;

/// Message shown when the user submits an empty query
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter your travel query!";

/// Owns the backend client and the session's chat history
pub struct TripPlanner<B: ChatBackend, S: SessionStorage> {
    backend: B,
    history: HistoryStore<S>,
}

impl<B: ChatBackend, S: SessionStorage> TripPlanner<B, S> {
    /// Create a planner. History stays empty until [`start`](Self::start).
    pub fn new(backend: B, storage: S) -> Self {
        Self {
            backend,
            history: HistoryStore::new(storage),
        }
    }

    /// Restore history persisted earlier in this session
    pub fn start(&mut self) {
        self.history.load();
    }

    /// Send a query and record the exchange if the backend answers.
    ///
    /// Blank queries are rejected before anything is sent. Failed requests
    /// are never recorded.
    pub async fn submit(&mut self, query: &str) -> Result<String> {
        let query = query.trim();
        if query.is_empty() {
            return Err(WayfarerError::InvalidInput(EMPTY_QUERY_MESSAGE.to_string()));
        }

        let response = self.backend.chat(query).await?;
        self.history.record(query, response.as_str());
        tracing::debug!(entries = self.history.len(), "Recorded exchange");
        Ok(response)
    }

    /// Forget the session's history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Text the query input should hold after choosing `name` in the
    /// example selector, or `None` to leave the input untouched.
    pub fn select_example(&self, name: &str) -> Option<&'static str> {
        ExampleSelection::parse(name).map(ExampleSelection::input_text)
    }

    /// Backend API key status
    pub async fn status(&self) -> Result<ApiStatus> {
        self.backend.status().await
    }

    /// Current history, newest first
    pub fn history(&self) -> &[HistoryEntry] {
        self.history.list()
    }

    /// The backend client
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The session storage behind the history
    pub fn storage(&self) -> &S {
        self.history.storage()
    }
}
